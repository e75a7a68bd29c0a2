//! Taskpad Core - Entity Types
//!
//! Pure data structures with no behavior. All other crates depend on this.
//! This crate contains ONLY data types and pure helpers - no I/O.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod filter;

pub use filter::{NoteFilter, SortKey};

// ============================================================================
// IDENTITY TYPES
// ============================================================================

/// Note identifier using UUIDv7 for timestamp-sortable IDs.
/// UUIDv7 embeds a Unix timestamp, making IDs naturally sortable by creation time.
pub type NoteId = Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Generate a new UUIDv7 NoteId (timestamp-sortable).
pub fn new_note_id() -> NoteId {
    Uuid::now_v7()
}

// ============================================================================
// VALIDATION LIMITS
// ============================================================================

/// Maximum title length in characters.
pub const TITLE_MAX_LEN: usize = 100;

/// Maximum description length in characters.
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// Due date wire format (`2025-12-31`).
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a due date string in the canonical `YYYY-MM-DD` format.
pub fn parse_due_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DUE_DATE_FORMAT).ok()
}

// ============================================================================
// ENUMS
// ============================================================================

/// Priority of a note. Ordering is Low < Medium < High.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// All variants in ascending order.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Wire name of the variant (`LOW`, `MEDIUM`, `HIGH`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Priority::Low),
            "MEDIUM" => Ok(Priority::Medium),
            "HIGH" => Ok(Priority::High),
            other => Err(ValidationError::InvalidValue {
                field: "priority".to_string(),
                reason: format!("unknown priority '{other}'"),
            }),
        }
    }
}

/// Workflow status of a note. Ordering follows the workflow:
/// Todo < InProgress < Done.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// All variants in workflow order.
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    /// Wire name of the variant (`TODO`, `IN_PROGRESS`, `DONE`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "TODO",
            Status::InProgress => "IN_PROGRESS",
            Status::Done => "DONE",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TODO" => Ok(Status::Todo),
            "IN_PROGRESS" => Ok(Status::InProgress),
            "DONE" => Ok(Status::Done),
            other => Err(ValidationError::InvalidValue {
                field: "status".to_string(),
                reason: format!("unknown status '{other}'"),
            }),
        }
    }
}

// ============================================================================
// ENTITIES
// ============================================================================

/// Note - a single task entry in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Note {
    #[cfg_attr(feature = "openapi", schema(value_type = Uuid))]
    pub note_id: NoteId,
    pub title: String,
    pub description: String,
    /// Due date in `YYYY-MM-DD` format.
    pub due_date: String,
    pub priority: Priority,
    pub status: Status,
    #[cfg_attr(feature = "openapi", schema(value_type = DateTime<Utc>))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "openapi", schema(value_type = DateTime<Utc>))]
    pub updated_at: Timestamp,
}

/// Fields of a note before the store has assigned an identifier.
/// Timestamps are stamped by the caller; both are equal at insert time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: Priority,
    pub status: Status,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NewNote {
    /// Materialize the note with a store-assigned identifier.
    pub fn into_note(self, note_id: NoteId) -> Note {
        Note {
            note_id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Note store errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Note not found: {id}")]
    NotFound { id: NoteId },

    #[error("Store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Backend error: {reason}")]
    Backend { reason: String },

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Validation errors for note fields.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Field {field} exceeds maximum length {max}")]
    TooLong { field: String, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_id_is_v7() {
        let id = new_note_id();
        assert_eq!(id.get_version_num(), 7);
    }

    #[test]
    fn test_note_ids_are_sortable() {
        let id1 = new_note_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = new_note_id();
        // UUIDv7 should be lexicographically sortable by time
        assert!(id1.to_string() < id2.to_string());
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
    }

    #[test]
    fn test_status_ordering_follows_workflow() {
        assert!(Status::Todo < Status::InProgress);
        assert!(Status::InProgress < Status::Done);
    }

    #[test]
    fn test_priority_wire_format() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"HIGH\"");
        let back: Priority = serde_json::from_str("\"LOW\"").unwrap();
        assert_eq!(back, Priority::Low);
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        let back: Status = serde_json::from_str("\"DONE\"").unwrap();
        assert_eq!(back, Status::Done);
    }

    #[test]
    fn test_parse_due_date_accepts_canonical_format() {
        assert!(parse_due_date("2025-12-31").is_some());
        assert!(parse_due_date("2025-02-29").is_none());
        assert!(parse_due_date("12/31/2025").is_none());
        assert!(parse_due_date("").is_none());
    }

    #[test]
    fn test_into_note_preserves_fields() {
        let now = Utc::now();
        let new = NewNote {
            title: "Buy milk".to_string(),
            description: "Two liters".to_string(),
            due_date: "2025-06-01".to_string(),
            priority: Priority::Medium,
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        };
        let id = new_note_id();
        let note = new.into_note(id);
        assert_eq!(note.note_id, id);
        assert_eq!(note.title, "Buy milk");
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn test_priority_from_str_rejects_unknown() {
        let err = "URGENT".parse::<Priority>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { .. }));
    }

    #[test]
    fn test_note_serde_round_trip() {
        let now = Utc::now();
        let note = Note {
            note_id: new_note_id(),
            title: "t".to_string(),
            description: "d".to_string(),
            due_date: "2025-01-01".to_string(),
            priority: Priority::Low,
            status: Status::Done,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_string(&note).unwrap();
        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(note, back);
    }
}
