//! Validation Traits and Note Payload Checks
//!
//! Common validation patterns extracted from route handlers, plus the
//! single validation policy for note payloads. Validation runs in the
//! service layer so every transport gets the same rules.

use crate::error::{ApiError, ApiResult};
use crate::types::CreateNoteRequest;
use taskpad_core::{parse_due_date, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};

/// Trait for validating non-empty strings.
pub trait ValidateNonEmpty {
    /// Validate that the value is non-empty.
    ///
    /// # Errors
    /// Returns `ApiError::missing_field` if the value is empty or whitespace-only.
    fn validate_non_empty(&self, field_name: &str) -> ApiResult<()>;
}

impl ValidateNonEmpty for str {
    fn validate_non_empty(&self, field_name: &str) -> ApiResult<()> {
        if self.trim().is_empty() {
            return Err(ApiError::missing_field(field_name));
        }
        Ok(())
    }
}

impl ValidateNonEmpty for String {
    fn validate_non_empty(&self, field_name: &str) -> ApiResult<()> {
        self.as_str().validate_non_empty(field_name)
    }
}

/// Trait for validating string lengths against a character cap.
pub trait ValidateMaxLen {
    /// Validate that the value has at most `max` characters.
    fn validate_max_len(&self, field_name: &str, max: usize) -> ApiResult<()>;
}

impl ValidateMaxLen for str {
    fn validate_max_len(&self, field_name: &str, max: usize) -> ApiResult<()> {
        if self.chars().count() > max {
            return Err(ApiError::invalid_range(field_name, 0, max));
        }
        Ok(())
    }
}

impl ValidateMaxLen for String {
    fn validate_max_len(&self, field_name: &str, max: usize) -> ApiResult<()> {
        self.as_str().validate_max_len(field_name, max)
    }
}

/// Validate a note creation payload.
///
/// Enum membership for priority and status is already enforced by serde
/// during deserialization, so only the string fields are checked here.
pub fn validate_create_note(req: &CreateNoteRequest) -> ApiResult<()> {
    req.title.validate_non_empty("title")?;
    req.title.validate_max_len("title", TITLE_MAX_LEN)?;
    req.description
        .validate_max_len("description", DESCRIPTION_MAX_LEN)?;

    if parse_due_date(&req.due_date).is_none() {
        return Err(ApiError::invalid_format("due_date", "YYYY-MM-DD"));
    }

    Ok(())
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use crate::error::ErrorCode;
    use proptest::prelude::*;
    use taskpad_core::{Priority, Status};

    fn request_with_title(title: String) -> CreateNoteRequest {
        CreateNoteRequest {
            title,
            description: "Two liters".to_string(),
            due_date: "2025-06-01".to_string(),
            priority: Priority::Medium,
            status: Status::Todo,
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_titles_within_cap_accepted(title in "[a-z][a-z0-9 ]{0,99}") {
            prop_assert!(validate_create_note(&request_with_title(title)).is_ok());
        }

        #[test]
        fn prop_overlong_titles_rejected(extra in 1usize..40) {
            let req = request_with_title("x".repeat(TITLE_MAX_LEN + extra));
            let err = validate_create_note(&req).unwrap_err();
            prop_assert_eq!(err.code, ErrorCode::InvalidRange);
        }

        #[test]
        fn prop_calendar_due_dates_accepted(
            year in 2000i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
        ) {
            let mut req = request_with_title("Buy milk".to_string());
            req.due_date = format!("{:04}-{:02}-{:02}", year, month, day);
            prop_assert!(validate_create_note(&req).is_ok());
        }
    }
}
