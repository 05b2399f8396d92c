use curriculum_core::model::{Topic, TopicId, Unit};
use reqwest::StatusCode;
use serde::Serialize;

use crate::error::ClientError;

#[derive(Serialize)]
struct ToggleTopicRequest {
    completed: bool,
}

/// HTTP client for the curriculum API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client against the given base URL, e.g. `http://127.0.0.1:3000`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch the full curriculum tree.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` on transport failure or a non-success status.
    pub async fn get_curriculum(&self) -> Result<Vec<Unit>, ClientError> {
        let url = format!("{}/api/curriculum", self.base_url);
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Set a topic's completed flag, returning the updated record.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::TopicNotFound` for an unknown id, or
    /// `ClientError` on transport failure or any other non-success status.
    pub async fn toggle_topic(
        &self,
        id: TopicId,
        completed: bool,
    ) -> Result<Topic, ClientError> {
        let url = format!("{}/api/topics/{id}/toggle", self.base_url);
        let response = self
            .http
            .patch(url)
            .json(&ToggleTopicRequest { completed })
            .send()
            .await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(ClientError::TopicNotFound),
            status if !status.is_success() => Err(ClientError::HttpStatus(status)),
            _ => Ok(response.json().await?),
        }
    }
}
