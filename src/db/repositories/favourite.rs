use crate::entities::{favourite, prelude::*};
use crate::models::favourite::Favourite;
use anyhow::Result;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr,
};
use tracing::info;

/// Outcome of an insert attempt. The unique constraint on `image_url` is
/// enforced by the database, so a duplicate is a distinct outcome rather
/// than an undifferentiated error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added(i64),
    Duplicate,
}

/// Repository for favourite image operations.
///
/// Deletion is keyed on `image_url`, not `id`: a favourite is conceptually
/// "this image", and callers only ever hold the URL. This works because
/// `image_url` carries a unique constraint of its own.
pub struct FavouriteRepository {
    conn: DatabaseConnection,
}

impl FavouriteRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: favourite::Model) -> Favourite {
        Favourite {
            id: i64::from(m.id),
            image_url: m.image_url,
            breed: m.breed,
            created_at: m.created_at,
        }
    }

    /// All favourites, most recent first. Ties on `created_at` fall back to
    /// `id` descending so the order is stable.
    pub async fn list(&self) -> Result<Vec<Favourite>> {
        let rows = Favourites::find()
            .order_by_desc(favourite::Column::CreatedAt)
            .order_by_desc(favourite::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn add(&self, image_url: &str, breed: &str) -> Result<AddOutcome> {
        let active_model = favourite::ActiveModel {
            image_url: Set(image_url.to_string()),
            breed: Set(breed.to_string()),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        match Favourites::insert(active_model).exec(&self.conn).await {
            Ok(res) => {
                info!("Added favourite ({}): {}", breed, image_url);
                Ok(AddOutcome::Added(i64::from(res.last_insert_id)))
            }
            Err(err) => {
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    Ok(AddOutcome::Duplicate)
                } else {
                    Err(err.into())
                }
            }
        }
    }

    /// Deletes by image URL. Returns the number of removed rows (0 or 1) so
    /// callers can tell "not found" from "removed" without an error path.
    pub async fn remove(&self, image_url: &str) -> Result<u64> {
        let res = Favourites::delete_many()
            .filter(favourite::Column::ImageUrl.eq(image_url))
            .exec(&self.conn)
            .await?;

        if res.rows_affected > 0 {
            info!("Removed favourite: {}", image_url);
        }

        Ok(res.rows_affected)
    }
}
