//! Note REST API Routes
//!
//! Axum route handlers for the note collection. Handlers validate
//! payloads, stamp timestamps, and delegate persistence to the store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    types::{AddNoteResponse, CreateNoteRequest, DeleteNoteResponse},
    validation::validate_create_note,
};
use taskpad_core::{NewNote, Note};
use taskpad_storage::NoteStore;

// ============================================================================
// SHARED STATE
// ============================================================================

/// Shared application state for note routes.
#[derive(Clone)]
pub struct NoteState {
    pub store: Arc<dyn NoteStore>,
}

impl NoteState {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }
}

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /api/v1/notes - Create a new note
#[utoipa::path(
    post,
    path = "/api/v1/notes",
    tag = "Notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = AddNoteResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError),
    ),
)]
pub async fn create_note(
    State(state): State<Arc<NoteState>>,
    Json(req): Json<CreateNoteRequest>,
) -> ApiResult<impl IntoResponse> {
    validate_create_note(&req)?;

    // Both timestamps are stamped here; they are equal at insert time
    let now = Utc::now();
    let new_note = NewNote {
        title: req.title,
        description: req.description,
        due_date: req.due_date,
        priority: req.priority,
        status: req.status,
        created_at: now,
        updated_at: now,
    };

    let note_id = state.store.note_insert(new_note.clone()).await?;
    let note = new_note.into_note(note_id);

    tracing::info!(%note_id, "Note created");

    let response = AddNoteResponse {
        message: "Added Successfully".to_string(),
        result: note,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/notes - List the entire collection
#[utoipa::path(
    get,
    path = "/api/v1/notes",
    tag = "Notes",
    responses(
        (status = 200, description = "All notes, oldest first", body = [Note]),
        (status = 500, description = "Store failure", body = ApiError),
    ),
)]
pub async fn list_notes(
    State(state): State<Arc<NoteState>>,
) -> ApiResult<impl IntoResponse> {
    let notes = state.store.note_list_all().await?;
    Ok(Json(notes))
}

/// DELETE /api/v1/notes/{id} - Delete a note
#[utoipa::path(
    delete,
    path = "/api/v1/notes/{id}",
    tag = "Notes",
    params(
        ("id" = String, Path, description = "Note ID (UUID)")
    ),
    responses(
        (status = 200, description = "Note deleted successfully", body = DeleteNoteResponse),
        (status = 400, description = "Malformed note ID", body = ApiError),
        (status = 404, description = "Note not found", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError),
    ),
)]
pub async fn delete_note(
    State(state): State<Arc<NoteState>>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    // Malformed IDs are rejected before the store is consulted
    let note_id = Uuid::parse_str(&id)?;

    let deleted = state.store.note_delete(note_id).await?;
    if deleted == 0 {
        return Err(ApiError::note_not_found(note_id));
    }

    tracing::info!(%note_id, "Note deleted");

    Ok(Json(DeleteNoteResponse {
        message: "Deleted Successfully".to_string(),
    }))
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the note routes router.
pub fn create_router(store: Arc<dyn NoteStore>) -> axum::Router {
    let state = Arc::new(NoteState::new(store));

    axum::Router::new()
        .route("/", axum::routing::post(create_note))
        .route("/", axum::routing::get(list_notes))
        .route("/:id", axum::routing::delete(delete_note))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use taskpad_core::{new_note_id, Priority, Status};
    use taskpad_storage::MemoryNoteStore;
    use tower::ServiceExt;

    fn test_router() -> (axum::Router, Arc<MemoryNoteStore>) {
        let store = Arc::new(MemoryNoteStore::new());
        let router = create_router(store.clone());
        (router, store)
    }

    fn create_body(title: &str) -> String {
        serde_json::json!({
            "title": title,
            "description": "test",
            "due_date": "2025-06-01",
            "priority": "MEDIUM",
            "status": "TODO",
        })
        .to_string()
    }

    async fn response_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_note_returns_201_with_envelope() {
        let (router, store) = test_router();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(Body::from(create_body("Buy milk")))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = response_json(response).await;
        assert_eq!(json["message"], "Added Successfully");
        assert_eq!(json["result"]["title"], "Buy milk");
        assert_eq!(json["result"]["created_at"], json["result"]["updated_at"]);
        assert_eq!(store.note_count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_note_empty_title_returns_400() {
        let (router, store) = test_router();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(Body::from(create_body("   ")))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["code"], "MISSING_FIELD");
        assert_eq!(store.note_count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_notes_returns_raw_array() {
        let (router, store) = test_router();
        let now = Utc::now();
        store
            .note_insert(NewNote {
                title: "a".to_string(),
                description: String::new(),
                due_date: "2025-01-01".to_string(),
                priority: Priority::Low,
                status: Status::Todo,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["title"], "a");
    }

    #[tokio::test]
    async fn test_delete_malformed_id_returns_400() {
        let (router, _store) = test_router();

        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["code"], "INVALID_FORMAT");
    }

    #[tokio::test]
    async fn test_delete_absent_id_returns_404() {
        let (router, _store) = test_router();

        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(&format!("/{}", new_note_id()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = response_json(response).await;
        assert_eq!(json["code"], "NOTE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_delete_present_id_returns_200() {
        let (router, store) = test_router();
        let now = Utc::now();
        let id = store
            .note_insert(NewNote {
                title: "a".to_string(),
                description: String::new(),
                due_date: "2025-01-01".to_string(),
                priority: Priority::Low,
                status: Status::Todo,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(&format!("/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["message"], "Deleted Successfully");
        assert_eq!(store.note_count().unwrap(), 0);
    }
}
