//! OpenAPI Specification for the Taskpad API
//!
//! Generates the OpenAPI document from Rust types and route annotations
//! using utoipa.

use utoipa::OpenApi;

use crate::error::{ApiError, ErrorCode};
use crate::routes::{health, note};
use crate::types::{AddNoteResponse, CreateNoteRequest, DeleteNoteResponse};
use taskpad_core::{Note, NoteFilter, Priority, SortKey, Status};

/// OpenAPI document for the Taskpad API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskpad API",
        version = "0.1.0",
        description = "Minimal task and notes manager - single-collection note CRUD",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
    ),
    servers(
        (url = "http://localhost:3000", description = "Local Development")
    ),
    tags(
        (name = "Notes", description = "Note collection management"),
        (name = "Health", description = "Liveness and readiness probes")
    ),
    paths(
        note::create_note,
        note::list_notes,
        note::delete_note,
        health::ping,
        health::liveness,
        health::readiness,
    ),
    components(schemas(
        Note,
        Priority,
        Status,
        SortKey,
        NoteFilter,
        CreateNoteRequest,
        AddNoteResponse,
        DeleteNoteResponse,
        ApiError,
        ErrorCode,
        health::HealthResponse,
        health::HealthStatus,
        health::HealthDetails,
        health::ComponentHealth,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_includes_note_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/notes"));
        assert!(doc.paths.paths.contains_key("/api/v1/notes/{id}"));
        assert!(doc.paths.paths.contains_key("/health/ready"));
    }

    #[test]
    fn test_openapi_document_serializes() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("Taskpad API"));
    }
}
