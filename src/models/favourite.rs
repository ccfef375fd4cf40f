use serde::{Deserialize, Serialize};

/// A persisted record pairing an image URL with its breed and creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favourite {
    pub id: i64,
    pub image_url: String,
    pub breed: String,
    pub created_at: String,
}
