use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;
use crate::services::{FavouriteService, SeaOrmFavouriteService};

mod error;
mod favourites;
mod system;
mod validation;

pub use error::ApiError;
pub use favourites::{AddFavouriteRequest, FavouriteDto, MessageResponse, RemoveFavouriteRequest};
pub use validation::FieldViolation;

pub struct AppState {
    pub config: Config,

    pub store: Store,

    pub favourite_service: Arc<dyn FavouriteService>,

    pub start_time: std::time::Instant,
}

pub async fn create_app_state(config: Config) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let favourite_service: Arc<dyn FavouriteService> =
        Arc::new(SeaOrmFavouriteService::new(store.clone()));

    Ok(Arc::new(AppState {
        config,
        store,
        favourite_service,
        start_time: std::time::Instant::now(),
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .route("/favourites", get(favourites::list_favourites))
        .route("/favourites", post(favourites::add_favourite))
        .route("/favourites", delete(favourites::remove_favourite));

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .route("/health", get(system::health))
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
