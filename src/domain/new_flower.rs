use super::flower::FlowerAttributes;
use super::flower_name::FlowerName;

/// Insert draft for a flower; `id` and `created_at` are assigned by the
/// database, `color` is recorded as NULL.
#[derive(Debug, Clone)]
pub struct NewFlower {
    pub name: FlowerName,
    pub image_url: String,
    pub attributes: FlowerAttributes,
}
