use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A flower saved to the garden. Immutable after insert except for `name`.
#[derive(Debug, Clone)]
pub struct SavedFlower {
    pub id: Uuid,
    pub name: String,
    /// Reserved column, currently always `None`.
    pub color: Option<String>,
    pub image_url: String,
    pub attributes: FlowerAttributes,
    pub created_at: DateTime<Utc>,
}

/// Denormalized plant metadata stored alongside the flower as jsonb.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowerAttributes {
    /// One to three tags from the classifier vocabularies.
    pub botanical_attributes: Vec<String>,
    pub scientific_name: Option<String>,
    pub trefle_id: Option<String>,
    pub common_name: Option<String>,
}
