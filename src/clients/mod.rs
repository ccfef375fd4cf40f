pub mod dog_api;
pub mod favourites;

pub use dog_api::{DogApiClient, DogApiError};
pub use favourites::{FavouritesApiError, FavouritesClient, Invalidate};

/// Build a shared HTTP client with reasonable defaults for API calls.
/// This client should be reused across all HTTP-based clients to enable
/// connection pooling and avoid socket exhaustion. Timeouts are set
/// per-request from each client's own config.
pub fn build_shared_http_client() -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("pawdex/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}
