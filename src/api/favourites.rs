use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{ApiError, AppState, validation};
use crate::models::favourite::Favourite;

#[derive(Debug, Serialize)]
pub struct FavouriteDto {
    pub id: i64,
    pub image_url: String,
    pub breed: String,
    pub created_at: String,
}

impl From<Favourite> for FavouriteDto {
    fn from(fav: Favourite) -> Self {
        Self {
            id: fav.id,
            image_url: fav.image_url,
            breed: fav.breed,
            created_at: fav.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// Request fields are optional so a missing field surfaces as a schema
// violation in our own format instead of an axum rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavouriteRequest {
    pub image_url: Option<String>,
    pub breed: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFavouriteRequest {
    pub image_url: Option<String>,
}

pub async fn list_favourites(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FavouriteDto>>, ApiError> {
    let favourites = state.favourite_service.list_favourites().await?;
    let dtos: Vec<FavouriteDto> = favourites.into_iter().map(FavouriteDto::from).collect();
    Ok(Json(dtos))
}

pub async fn add_favourite(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AddFavouriteRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let mut violations = Vec::new();

    let image_url =
        match validation::validate_image_url("imageUrl", payload.image_url.as_deref()) {
            Ok(url) => Some(url),
            Err(violation) => {
                violations.push(violation);
                None
            }
        };

    let breed = match validation::validate_breed("breed", payload.breed.as_deref()) {
        Ok(breed) => Some(breed),
        Err(violation) => {
            violations.push(violation);
            None
        }
    };

    if !violations.is_empty() {
        return Err(ApiError::validation(violations));
    }

    let (image_url, breed) = (
        image_url.ok_or_else(|| ApiError::internal("validated imageUrl missing"))?,
        breed.ok_or_else(|| ApiError::internal("validated breed missing"))?,
    );

    state
        .favourite_service
        .add_favourite(&image_url, &breed)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Favourite added".to_string(),
        }),
    ))
}

pub async fn remove_favourite(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RemoveFavouriteRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let image_url = validation::validate_image_url("imageUrl", payload.image_url.as_deref())
        .map_err(|violation| ApiError::validation(vec![violation]))?;

    state.favourite_service.remove_favourite(&image_url).await?;

    Ok(Json(MessageResponse {
        message: "Favourite removed".to_string(),
    }))
}
