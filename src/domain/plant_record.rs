use serde::Deserialize;

/// Raw plant data as returned by the Trefle API.
///
/// Trefle populates records unevenly, so every field is optional. Summary
/// records (from the list endpoint) and detail records share this shape; the
/// detail endpoint just fills in more of it.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PlantRecord {
    pub id: Option<i64>,
    pub common_name: Option<String>,
    pub scientific_name: Option<String>,
    pub image_url: Option<String>,

    /// Lifecycle description, e.g. `"perennial"` or `"annual, biennial"`.
    pub duration: Option<String>,
    pub edible_part: Option<Vec<String>>,

    pub specifications: Option<Specifications>,
    pub growth: Option<Growth>,
    pub flower: Option<FlowerTraits>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Specifications {
    pub toxicity: Option<Toxicity>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Toxicity {
    None,
    Low,
    Moderate,
    High,
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Growth {
    /// Light requirement on a 0-10 scale.
    pub light: Option<f64>,
    pub atmospheric_humidity: Option<f64>,
    pub minimum_temperature: Option<MinimumTemperature>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MinimumTemperature {
    pub deg_c: Option<f64>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FlowerTraits {
    pub color: Option<Vec<String>>,
}
