use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::DogApiConfig;
use crate::models::breed::{BreedMap, DogImage, breed_path};

#[derive(Debug, Error)]
pub enum DogApiError {
    #[error("dog API request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("dog API returned HTTP {0}")]
    Http(reqwest::StatusCode),

    #[error("dog API error: {0}")]
    Api(String),
}

/// Every dog API response is wrapped in `{message, status}`.
#[derive(Debug, Deserialize)]
struct DogApiEnvelope<T> {
    message: T,
    status: String,
}

impl<T> DogApiEnvelope<T> {
    fn into_message(self) -> Result<T, DogApiError> {
        if self.status != "success" {
            return Err(DogApiError::Api("API returned error status".to_string()));
        }
        Ok(self.message)
    }
}

// `/images/random` without a count returns a bare string, with a count an
// array. The count is always in our request path, but accept both anyway.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<String>),
    One(String),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::Many(urls) => urls,
            Self::One(url) => vec![url],
        }
    }
}

/// Read-only client for the public dog breed/image API (dog.ceo).
#[derive(Clone)]
pub struct DogApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl DogApiClient {
    #[must_use]
    pub fn new(client: Client, config: &DogApiConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    /// All breeds with their sub-breeds.
    pub async fn list_all_breeds(&self) -> Result<BreedMap, DogApiError> {
        let url = format!("{}/breeds/list/all", self.base_url);
        let response = self.client.get(&url).timeout(self.timeout).send().await?;

        if !response.status().is_success() {
            return Err(DogApiError::Http(response.status()));
        }

        let envelope: DogApiEnvelope<BreedMap> = response.json().await?;
        envelope.into_message()
    }

    /// `count` random image URLs for a breed (`"breed"` or `"breed/subbreed"`).
    pub async fn random_images(
        &self,
        breed: &str,
        count: u32,
    ) -> Result<Vec<DogImage>, DogApiError> {
        let url = format!(
            "{}/breed/{}/images/random/{}",
            self.base_url,
            breed_path(breed),
            count
        );
        let response = self.client.get(&url).timeout(self.timeout).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(DogApiError::Api(format!(
                "No images found for breed: {breed}"
            )));
        }

        if !response.status().is_success() {
            return Err(DogApiError::Http(response.status()));
        }

        let envelope: DogApiEnvelope<OneOrMany> = response.json().await?;
        let urls = envelope.into_message()?.into_vec();

        Ok(urls
            .into_iter()
            .map(|url| DogImage {
                url,
                breed: breed.to_string(),
            })
            .collect())
    }
}
