//! REST client for the Taskpad API.

use crate::config::TuiConfig;
use std::time::Duration;
use taskpad_api::error::ApiError as ApiServerError;
use taskpad_api::types::{AddNoteResponse, CreateNoteRequest, DeleteNoteResponse};
use taskpad_core::{Note, NoteId};

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
    #[error("Config error: {0}")]
    Config(String),
}

#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>, ApiClientError> {
        self.get_json("/api/v1/notes").await
    }

    pub async fn add_note(
        &self,
        req: &CreateNoteRequest,
    ) -> Result<AddNoteResponse, ApiClientError> {
        self.post_json("/api/v1/notes", req).await
    }

    pub async fn delete_note(&self, note_id: NoteId) -> Result<DeleteNoteResponse, ApiClientError> {
        let path = format!("/api/v1/notes/{}", note_id);
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.delete(url).send().await?;
        self.parse_response(response).await
    }

    pub async fn ping(&self) -> Result<(), ApiClientError> {
        let url = format!("{}/health/ping", self.base_url);
        let response = self.client.get(url).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiClientError::InvalidResponse(format!(
                "HTTP {}",
                response.status().as_u16()
            )))
        }
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ApiClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(url).send().await?;
        self.parse_response(response).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiClientError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(url).json(body).send().await?;
        self.parse_response(response).await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let text = response.text().await?;
            if let Ok(api_error) = serde_json::from_str::<ApiServerError>(&text) {
                return Err(ApiClientError::InvalidResponse(format!(
                    "{}: {}",
                    api_error.code, api_error.message
                )));
            }
            Err(ApiClientError::InvalidResponse(format!(
                "HTTP {}: {}",
                status.as_u16(),
                text
            )))
        }
    }
}
