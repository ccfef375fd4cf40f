//! `SeaORM` implementation of the [`FavouriteService`] trait.

use crate::db::{AddOutcome, Store};
use crate::domain::ImageUrl;
use crate::models::favourite::Favourite;
use crate::services::favourite_service::{FavouriteError, FavouriteService};

pub struct SeaOrmFavouriteService {
    store: Store,
}

impl SeaOrmFavouriteService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl FavouriteService for SeaOrmFavouriteService {
    async fn list_favourites(&self) -> Result<Vec<Favourite>, FavouriteError> {
        self.store
            .list_favourites()
            .await
            .map_err(|e| FavouriteError::Database(e.to_string()))
    }

    async fn add_favourite(
        &self,
        image_url: &ImageUrl,
        breed: &str,
    ) -> Result<(), FavouriteError> {
        let outcome = self
            .store
            .add_favourite(image_url.as_str(), breed)
            .await
            .map_err(|e| FavouriteError::Database(e.to_string()))?;

        match outcome {
            AddOutcome::Added(_) => Ok(()),
            AddOutcome::Duplicate => Err(FavouriteError::Duplicate(image_url.clone())),
        }
    }

    async fn remove_favourite(&self, image_url: &ImageUrl) -> Result<(), FavouriteError> {
        let removed = self
            .store
            .remove_favourite(image_url.as_str())
            .await
            .map_err(|e| FavouriteError::Database(e.to_string()))?;

        if removed == 0 {
            return Err(FavouriteError::NotFound(image_url.clone()));
        }

        Ok(())
    }
}
