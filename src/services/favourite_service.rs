//! Domain service for favourite image operations.
//!
//! Abstracts the favourites data access behind a trait so the HTTP handlers
//! never touch the database directly and tests can substitute the store.

use crate::domain::ImageUrl;
use crate::models::favourite::Favourite;
use thiserror::Error;

/// Domain errors for favourite operations.
#[derive(Debug, Error)]
pub enum FavouriteError {
    #[error("Favourite not found: {0}")]
    NotFound(ImageUrl),

    #[error("Favourite already exists: {0}")]
    Duplicate(ImageUrl),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for FavouriteError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

/// Domain service trait for favourite operations.
///
/// All three operations are independent and stateless; none depends on
/// ordering relative to another within the service.
#[async_trait::async_trait]
pub trait FavouriteService: Send + Sync {
    /// Lists all favourites, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`FavouriteError::Database`] on storage failures.
    async fn list_favourites(&self) -> Result<Vec<Favourite>, FavouriteError>;

    /// Adds a favourite for `image_url`.
    ///
    /// # Errors
    ///
    /// - Returns [`FavouriteError::Duplicate`] if the URL is already favourited
    /// - Returns [`FavouriteError::Database`] on storage failures
    async fn add_favourite(
        &self,
        image_url: &ImageUrl,
        breed: &str,
    ) -> Result<(), FavouriteError>;

    /// Removes the favourite for `image_url`.
    ///
    /// # Errors
    ///
    /// - Returns [`FavouriteError::NotFound`] if no favourite matches the URL
    /// - Returns [`FavouriteError::Database`] on storage failures
    async fn remove_favourite(&self, image_url: &ImageUrl) -> Result<(), FavouriteError>;
}
