use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

use crate::config::FavouritesApiConfig;
use crate::models::favourite::Favourite;

/// All favourites-service failures normalize into this one error: network
/// failures, non-2xx responses, and malformed response bodies. The status is
/// present only when a response was actually received.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FavouritesApiError {
    pub message: String,
    pub status: Option<StatusCode>,
}

impl FavouritesApiError {
    fn network(err: &reqwest::Error) -> Self {
        Self {
            message: format!("Network error: {err}"),
            status: None,
        }
    }

    fn malformed(status: StatusCode) -> Self {
        Self {
            message: "Malformed response body".to_string(),
            status: Some(status),
        }
    }
}

/// Proof that a write against the favourites service succeeded. The
/// favourites query must be invalidated before the next read; holding the
/// token is the only way to do that, so the step cannot be forgotten.
#[must_use = "a successful write must invalidate the favourites query"]
#[derive(Debug)]
pub struct Invalidate {
    _proof: (),
}

/// Typed wrapper over the favourites service HTTP surface. Never retries;
/// retry policy belongs to the query-cache layer.
#[derive(Clone)]
pub struct FavouritesClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl FavouritesClient {
    #[must_use]
    pub fn new(client: Client, config: &FavouritesApiConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/favourites", self.base_url)
    }

    pub async fn list(&self) -> Result<Vec<Favourite>, FavouritesApiError> {
        let response = self
            .client
            .get(self.endpoint())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FavouritesApiError::network(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_response("Failed to fetch favourites", response).await);
        }

        response
            .json::<Vec<Favourite>>()
            .await
            .map_err(|_| FavouritesApiError::malformed(status))
    }

    pub async fn add(
        &self,
        image_url: &str,
        breed: &str,
    ) -> Result<Invalidate, FavouritesApiError> {
        let response = self
            .client
            .post(self.endpoint())
            .timeout(self.timeout)
            .json(&serde_json::json!({ "imageUrl": image_url, "breed": breed }))
            .send()
            .await
            .map_err(|e| FavouritesApiError::network(&e))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response("Failed to add favourite", response).await);
        }

        Ok(Invalidate { _proof: () })
    }

    pub async fn remove(&self, image_url: &str) -> Result<Invalidate, FavouritesApiError> {
        let response = self
            .client
            .delete(self.endpoint())
            .timeout(self.timeout)
            .json(&serde_json::json!({ "imageUrl": image_url }))
            .send()
            .await
            .map_err(|e| FavouritesApiError::network(&e))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response("Failed to remove favourite", response).await);
        }

        Ok(Invalidate { _proof: () })
    }

    /// Pulls the `{error: ...}` body out of a failure response, falling back
    /// to a per-operation message when the body is missing or unreadable.
    async fn error_from_response(
        fallback: &str,
        response: reqwest::Response,
    ) -> FavouritesApiError {
        let status = response.status();

        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => match body.get("error") {
                Some(serde_json::Value::String(msg)) => msg.clone(),
                Some(serde_json::Value::Array(violations)) => {
                    let details: Vec<String> = violations
                        .iter()
                        .filter_map(|v| {
                            let field = v.get("field")?.as_str()?;
                            let message = v.get("message")?.as_str()?;
                            Some(format!("{field} {message}"))
                        })
                        .collect();
                    if details.is_empty() {
                        fallback.to_string()
                    } else {
                        details.join("; ")
                    }
                }
                _ => fallback.to_string(),
            },
            Err(_) => fallback.to_string(),
        };

        FavouritesApiError {
            message,
            status: Some(status),
        }
    }
}
