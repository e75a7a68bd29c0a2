//! Client-side sorting and filtering for note lists
//!
//! This module provides the pure list-transform kernel shared by every
//! consumer of the note collection. Sorting is stable and filtering
//! composes criteria with AND semantics.

use serde::{Deserialize, Serialize};

use crate::{Note, Priority, Status};

/// Sort key for note lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Title,
    DueDate,
    Priority,
    Status,
    CreatedAt,
}

impl SortKey {
    /// All keys in menu order.
    pub const ALL: [SortKey; 5] = [
        SortKey::Title,
        SortKey::DueDate,
        SortKey::Priority,
        SortKey::Status,
        SortKey::CreatedAt,
    ];

    /// Human-readable label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::DueDate => "Due date",
            SortKey::Priority => "Priority",
            SortKey::Status => "Status",
            SortKey::CreatedAt => "Created",
        }
    }
}

/// Sort notes in place by the given key.
///
/// Uses a stable sort: notes that compare equal keep their relative order,
/// so re-sorting an already sorted list is a no-op.
pub fn sort_notes(notes: &mut [Note], key: SortKey) {
    match key {
        SortKey::Title => notes.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::DueDate => notes.sort_by(|a, b| a.due_date.cmp(&b.due_date)),
        SortKey::Priority => notes.sort_by(|a, b| a.priority.cmp(&b.priority)),
        SortKey::Status => notes.sort_by(|a, b| a.status.cmp(&b.status)),
        SortKey::CreatedAt => notes.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
}

/// Filter criteria for note lists. Unset fields match everything;
/// set fields are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NoteFilter {
    /// Exact status match.
    pub status: Option<Status>,
    /// Exact priority match.
    pub priority: Option<Priority>,
    /// Exact due date match (`YYYY-MM-DD`).
    pub due_date: Option<String>,
    /// Case-insensitive substring match on the title.
    pub title_contains: Option<String>,
}

impl NoteFilter {
    /// A filter with no criteria set.
    pub fn none() -> Self {
        Self::default()
    }

    /// True when no criteria are set.
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.title_contains.is_none()
    }

    /// True when the note satisfies every set criterion.
    pub fn matches(&self, note: &Note) -> bool {
        if let Some(status) = self.status {
            if note.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if note.priority != priority {
                return false;
            }
        }
        if let Some(ref due_date) = self.due_date {
            if &note.due_date != due_date {
                return false;
            }
        }
        if let Some(ref needle) = self.title_contains {
            if !note
                .title
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        true
    }

    /// Drop notes that do not satisfy the filter.
    pub fn apply(&self, notes: &mut Vec<Note>) {
        if self.is_empty() {
            return;
        }
        notes.retain(|note| self.matches(note));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::new_note_id;
    use chrono::Utc;

    fn make_note(title: &str, due: &str, priority: Priority, status: Status) -> Note {
        let now = Utc::now();
        Note {
            note_id: new_note_id(),
            title: title.to_string(),
            description: String::new(),
            due_date: due.to_string(),
            priority,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_sort_by_priority_ascending() {
        let mut notes = vec![
            make_note("a", "2025-01-01", Priority::High, Status::Todo),
            make_note("b", "2025-01-02", Priority::Low, Status::Todo),
            make_note("c", "2025-01-03", Priority::Medium, Status::Todo),
        ];
        sort_notes(&mut notes, SortKey::Priority);
        let titles: Vec<_> = notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_equal_keys_preserve_order() {
        let mut notes = vec![
            make_note("first", "2025-01-01", Priority::Low, Status::Todo),
            make_note("second", "2025-01-01", Priority::Low, Status::Todo),
            make_note("third", "2025-01-01", Priority::Low, Status::Todo),
        ];
        sort_notes(&mut notes, SortKey::DueDate);
        let titles: Vec<_> = notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let filter = NoteFilter::none();
        assert!(filter.is_empty());
        let note = make_note("x", "2025-01-01", Priority::Low, Status::Done);
        assert!(filter.matches(&note));
    }

    #[test]
    fn test_filter_status_exact() {
        let filter = NoteFilter {
            status: Some(Status::Done),
            ..Default::default()
        };
        assert!(filter.matches(&make_note("a", "2025-01-01", Priority::Low, Status::Done)));
        assert!(!filter.matches(&make_note(
            "b",
            "2025-01-01",
            Priority::Low,
            Status::InProgress
        )));
    }

    #[test]
    fn test_filter_criteria_are_anded() {
        let filter = NoteFilter {
            status: Some(Status::Todo),
            priority: Some(Priority::High),
            ..Default::default()
        };
        assert!(filter.matches(&make_note("a", "2025-01-01", Priority::High, Status::Todo)));
        assert!(!filter.matches(&make_note("b", "2025-01-01", Priority::Low, Status::Todo)));
        assert!(!filter.matches(&make_note("c", "2025-01-01", Priority::High, Status::Done)));
    }

    #[test]
    fn test_filter_title_contains_is_case_insensitive() {
        let filter = NoteFilter {
            title_contains: Some("milk".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&make_note(
            "Buy Milk",
            "2025-01-01",
            Priority::Low,
            Status::Todo
        )));
        assert!(!filter.matches(&make_note(
            "Buy bread",
            "2025-01-01",
            Priority::Low,
            Status::Todo
        )));
    }

    #[test]
    fn test_apply_retains_matching_notes() {
        let mut notes = vec![
            make_note("a", "2025-01-01", Priority::Low, Status::Todo),
            make_note("b", "2025-01-02", Priority::Low, Status::Done),
            make_note("c", "2025-01-01", Priority::Low, Status::Todo),
        ];
        let filter = NoteFilter {
            due_date: Some("2025-01-01".to_string()),
            ..Default::default()
        };
        filter.apply(&mut notes);
        assert_eq!(notes.len(), 2);
        assert!(notes.iter().all(|n| n.due_date == "2025-01-01"));
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use crate::new_note_id;
    use chrono::Utc;
    use proptest::prelude::*;

    fn arb_priority() -> impl Strategy<Value = Priority> {
        prop_oneof![
            Just(Priority::Low),
            Just(Priority::Medium),
            Just(Priority::High),
        ]
    }

    fn arb_status() -> impl Strategy<Value = Status> {
        prop_oneof![
            Just(Status::Todo),
            Just(Status::InProgress),
            Just(Status::Done),
        ]
    }

    fn arb_note() -> impl Strategy<Value = Note> {
        (
            "[a-z]{0,12}",
            0u32..=27u32,
            arb_priority(),
            arb_status(),
        )
            .prop_map(|(title, day, priority, status)| {
                let now = Utc::now();
                Note {
                    note_id: new_note_id(),
                    title,
                    description: String::new(),
                    due_date: format!("2025-01-{:02}", day % 28 + 1),
                    priority,
                    status,
                    created_at: now,
                    updated_at: now,
                }
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Sorting never changes the set of notes, only their order.
        #[test]
        fn prop_sort_is_permutation(mut notes in prop::collection::vec(arb_note(), 0..20)) {
            let mut ids: Vec<_> = notes.iter().map(|n| n.note_id).collect();
            sort_notes(&mut notes, SortKey::Priority);
            let mut sorted_ids: Vec<_> = notes.iter().map(|n| n.note_id).collect();
            ids.sort();
            sorted_ids.sort();
            prop_assert_eq!(ids, sorted_ids);
        }

        /// Sorting is idempotent: a second pass leaves the order unchanged.
        #[test]
        fn prop_sort_is_idempotent(mut notes in prop::collection::vec(arb_note(), 0..20)) {
            sort_notes(&mut notes, SortKey::DueDate);
            let once: Vec<_> = notes.iter().map(|n| n.note_id).collect();
            sort_notes(&mut notes, SortKey::DueDate);
            let twice: Vec<_> = notes.iter().map(|n| n.note_id).collect();
            prop_assert_eq!(once, twice);
        }

        /// Every note kept by a filter satisfies all of its criteria.
        #[test]
        fn prop_filter_keeps_only_matches(
            mut notes in prop::collection::vec(arb_note(), 0..20),
            status in arb_status(),
            priority in arb_priority(),
        ) {
            let filter = NoteFilter {
                status: Some(status),
                priority: Some(priority),
                ..Default::default()
            };
            filter.apply(&mut notes);
            prop_assert!(notes.iter().all(|n| n.status == status && n.priority == priority));
        }

        /// Filtering with no criteria is the identity transform.
        #[test]
        fn prop_empty_filter_is_identity(notes in prop::collection::vec(arb_note(), 0..20)) {
            let mut filtered = notes.clone();
            NoteFilter::none().apply(&mut filtered);
            prop_assert_eq!(filtered, notes);
        }
    }
}
