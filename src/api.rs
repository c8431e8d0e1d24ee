//! Generation service client and wire schemas
//!
//! Request and response bodies are typed here and validated at this boundary;
//! anything the server sends that does not match the schema surfaces as
//! [`GenerateError::Protocol`] instead of leaking into rendering.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of `POST {base}/generate`
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub org_name: String,
    pub org_website: String,
}

/// A titled action item belonging to one priority
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Definition {
    pub title: String,
    pub description: String,
}

/// A top-level strategic priority returned by the service. Display order is
/// the order the server sent them in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Priority {
    pub priority: String,
    pub description: String,
    pub definitions: Vec<Definition>,
}

/// Success body of the generation endpoint
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    priorities: Vec<Priority>,
}

/// Ways a generation request can fail
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Protocol(#[from] serde_json::Error),
}

/// HTTP client bound to a configured service base address
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    pub fn generate_url(&self) -> String {
        format!("{}/generate", self.base)
    }

    pub fn word_export_url(&self) -> String {
        format!("{}/download/word", self.base)
    }

    pub fn excel_export_url(&self) -> String {
        format!("{}/download/excel", self.base)
    }

    /// Send the form data and parse the priority list out of the response.
    /// Awaited indefinitely; the transport reports its own failures.
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<Vec<Priority>, GenerateError> {
        let response = self
            .http
            .post(self.generate_url())
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerateError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let parsed: GenerateResponse = serde_json::from_str(&body)?;
        Ok(parsed.priorities)
    }
}
