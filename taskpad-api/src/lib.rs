//! Taskpad API - REST API Layer
//!
//! Axum REST server for the Taskpad note collection. Handlers validate
//! payloads and delegate persistence to a `NoteStore` implementation;
//! the Postgres-backed store lives in `db`.

pub mod config;
pub mod db;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use config::ApiConfig;
pub use db::{DbConfig, PgNoteStore};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use openapi::ApiDoc;
pub use routes::create_api_router;
pub use types::{AddNoteResponse, CreateNoteRequest, DeleteNoteResponse};
