//! Request and Response Types for the Taskpad API
//!
//! Wire types for the REST surface. Entity types live in taskpad-core;
//! these structs only shape requests and response envelopes.

use serde::{Deserialize, Serialize};
use taskpad_core::{Note, Priority, Status};

// ============================================================================
// REQUEST TYPES
// ============================================================================

/// Request body for creating a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateNoteRequest {
    /// Note title, non-empty, at most 100 characters
    pub title: String,
    /// Free-form description, at most 500 characters
    pub description: String,
    /// Due date in `YYYY-MM-DD` format
    pub due_date: String,
    pub priority: Priority,
    pub status: Status,
}

// ============================================================================
// RESPONSE TYPES
// ============================================================================

/// Response envelope for a successful note creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AddNoteResponse {
    /// Confirmation message
    pub message: String,
    /// The stored note with its assigned identifier and timestamps
    pub result: Note,
}

/// Response envelope for a successful note deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeleteNoteResponse {
    /// Confirmation message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_note_request_deserializes_wire_enums() {
        let json = r#"{
            "title": "Buy milk",
            "description": "Two liters",
            "due_date": "2025-06-01",
            "priority": "HIGH",
            "status": "IN_PROGRESS"
        }"#;
        let req: CreateNoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.priority, Priority::High);
        assert_eq!(req.status, Status::InProgress);
    }

    #[test]
    fn test_create_note_request_rejects_unknown_priority() {
        let json = r#"{
            "title": "x",
            "description": "",
            "due_date": "2025-06-01",
            "priority": "URGENT",
            "status": "TODO"
        }"#;
        assert!(serde_json::from_str::<CreateNoteRequest>(json).is_err());
    }
}
