use crate::domain::{FlowerAttributes, FlowerName, NewFlower, SavedFlower};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

/// Persistence seam over the `flowers` table.
pub struct FlowerStore {
    pool: PgPool,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Flower not found")]
    NotFound,
    #[error("Database error: {0}")]
    Backend(#[from] sqlx::Error),
}

impl FlowerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All saved flowers, newest first.
    pub async fn list_flowers(&self) -> Result<Vec<SavedFlower>, StoreError> {
        let rows = sqlx::query_as::<_, FlowerRow>(
            "select id, name, color, image_url, attributes, created_at
             from flowers
             order by created_at desc",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SavedFlower::from).collect())
    }

    pub async fn insert_flower(&self, new_flower: &NewFlower) -> Result<SavedFlower, StoreError> {
        let row = sqlx::query_as::<_, FlowerRow>(
            "insert into flowers (name, color, image_url, attributes)
             values ($1, null, $2, $3)
             returning id, name, color, image_url, attributes, created_at",
        )
        .bind(new_flower.name.as_str())
        .bind(&new_flower.image_url)
        .bind(Json(&new_flower.attributes))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    pub async fn get_flower(&self, id: Uuid) -> Result<SavedFlower, StoreError> {
        let row = sqlx::query_as::<_, FlowerRow>(
            "select id, name, color, image_url, attributes, created_at
             from flowers
             where id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(SavedFlower::from).ok_or(StoreError::NotFound)
    }

    pub async fn rename_flower(&self, id: Uuid, name: &FlowerName) -> Result<(), StoreError> {
        let result = sqlx::query("update flowers set name = $1 where id = $2")
            .bind(name.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    pub async fn delete_flower(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("delete from flowers where id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct FlowerRow {
    id: Uuid,
    name: String,
    color: Option<String>,
    image_url: String,
    attributes: Json<FlowerAttributes>,
    created_at: DateTime<Utc>,
}

impl From<FlowerRow> for SavedFlower {
    fn from(row: FlowerRow) -> Self {
        SavedFlower {
            id: row.id,
            name: row.name,
            color: row.color,
            image_url: row.image_url,
            attributes: row.attributes.0,
            created_at: row.created_at,
        }
    }
}
