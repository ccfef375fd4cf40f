//! The client-facing view of the system: dog API + favourites service behind
//! the query cache. This plays the role the React hooks played in a web
//! frontend; the CLI consumes it.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::cache::CachedQuery;
use crate::clients::{
    DogApiClient, DogApiError, FavouritesApiError, FavouritesClient, Invalidate,
    build_shared_http_client,
};
use crate::config::Config;
use crate::models::breed::{BreedMap, DogImage};
use crate::models::favourite::Favourite;

// Breeds change rarely; random image sets are short-lived; the favourites
// list only changes through our own writes, so it never expires on its own.
const BREEDS_STALE_AFTER: Duration = Duration::from_secs(24 * 60 * 60);
const BREED_IMAGES_STALE_AFTER: Duration = Duration::from_secs(5 * 60);
const DOG_API_RETRIES: u32 = 2;

pub struct Browser {
    dog_api: DogApiClient,
    favourites_client: FavouritesClient,
    breeds_query: CachedQuery<BreedMap>,
    images_queries: Mutex<HashMap<String, Arc<CachedQuery<Vec<DogImage>>>>>,
    favourites_query: CachedQuery<Vec<Favourite>>,
    image_count: u32,
}

impl Browser {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = build_shared_http_client()?;

        Ok(Self {
            dog_api: DogApiClient::new(http.clone(), &config.dog_api),
            favourites_client: FavouritesClient::new(http, &config.favourites_api),
            breeds_query: CachedQuery::new(Some(BREEDS_STALE_AFTER), DOG_API_RETRIES),
            images_queries: Mutex::new(HashMap::new()),
            favourites_query: CachedQuery::new(None, config.favourites_api.read_retries),
            image_count: config.dog_api.image_count,
        })
    }

    pub async fn breeds(&self) -> Result<BreedMap, DogApiError> {
        self.breeds_query
            .get_or_fetch(|| self.dog_api.list_all_breeds())
            .await
    }

    /// Random images for a breed, memoized per breed.
    pub async fn breed_images(&self, breed: &str) -> Result<Vec<DogImage>, DogApiError> {
        let query = {
            let mut queries = self.images_queries.lock().await;
            queries
                .entry(breed.to_string())
                .or_insert_with(|| {
                    Arc::new(CachedQuery::new(
                        Some(BREED_IMAGES_STALE_AFTER),
                        DOG_API_RETRIES,
                    ))
                })
                .clone()
        };

        query
            .get_or_fetch(|| self.dog_api.random_images(breed, self.image_count))
            .await
    }

    pub async fn favourites(&self) -> Result<Vec<Favourite>, FavouritesApiError> {
        self.favourites_query
            .get_or_fetch(|| self.favourites_client.list())
            .await
    }

    pub async fn add_favourite(
        &self,
        image_url: &str,
        breed: &str,
    ) -> Result<(), FavouritesApiError> {
        let proof = self.favourites_client.add(image_url, breed).await?;
        self.accept(proof).await;
        Ok(())
    }

    pub async fn remove_favourite(&self, image_url: &str) -> Result<(), FavouritesApiError> {
        let proof = self.favourites_client.remove(image_url).await?;
        self.accept(proof).await;
        Ok(())
    }

    /// Consumes the write proof: the favourites list is now out of date and
    /// the next read must refetch it.
    async fn accept(&self, _proof: Invalidate) {
        self.favourites_query.invalidate().await;
    }
}
