use crate::domain::PlantRecord;
use rand::seq::SliceRandom;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

/// Client for the Trefle plant API, reached through a public CORS relay.
///
/// Every request targets the relay with the real Trefle URL passed in the
/// `url` query parameter, mirroring how a browser client would sidestep CORS.
pub struct TrefleClient {
    http: reqwest::Client,
    base_url: String,
    relay_url: String,
    token: Option<Secret<String>>,
    page_size: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum TrefleError {
    #[error("Trefle API token is required. Get one from trefle.io and add it to the configuration.")]
    MissingToken,
    #[error("Failed to fetch plants: {0}")]
    Unavailable(StatusCode),
    #[error("No plants with images found")]
    NoResults,
    #[error("Failed to reach the plant API: {0}")]
    Request(#[from] reqwest::Error),
}

impl TrefleClient {
    pub fn new(
        base_url: String,
        relay_url: String,
        token: Option<Secret<String>>,
        page_size: u32,
        timeout: Duration,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build the HTTP client.");
        Self {
            http,
            base_url,
            relay_url,
            token,
            page_size,
        }
    }

    /// Whether a Trefle token is configured. Without one the create flow is
    /// disabled rather than failing at request time.
    pub fn is_configured(&self) -> bool {
        self.token.is_some()
    }

    /// One page of plant summaries, filtered to records carrying an image.
    pub async fn list_candidate_plants(&self) -> Result<Vec<PlantRecord>, TrefleError> {
        let token = self.token()?;
        let target = format!(
            "{}/api/v1/plants?token={}&filter[complete_data]=true&page_size={}",
            self.base_url, token, self.page_size
        );
        let response = self
            .http
            .get(&self.relay_url)
            .query(&[("url", target.as_str())])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(TrefleError::Unavailable(response.status()));
        }

        let page: PlantPage = response.json().await?;
        let candidates = filter_candidates(page.data);
        if candidates.is_empty() {
            return Err(TrefleError::NoResults);
        }
        Ok(candidates)
    }

    /// A candidate chosen uniformly at random from the current page.
    pub async fn random_candidate(&self) -> Result<PlantRecord, TrefleError> {
        let candidates = self.list_candidate_plants().await?;
        let mut rng = rand::thread_rng();
        candidates
            .choose(&mut rng)
            .cloned()
            .ok_or(TrefleError::NoResults)
    }

    /// The full record for one plant. Failures here are soft: the caller is
    /// expected to fall back to the summary record and random attributes.
    pub async fn fetch_plant_detail(&self, id: i64) -> Result<PlantRecord, TrefleError> {
        let token = self.token()?;
        let target = format!("{}/api/v1/plants/{}?token={}", self.base_url, id, token);
        let response = self
            .http
            .get(&self.relay_url)
            .query(&[("url", target.as_str())])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(TrefleError::Unavailable(response.status()));
        }

        let envelope: PlantEnvelope = response.json().await?;
        Ok(envelope.data)
    }

    fn token(&self) -> Result<&str, TrefleError> {
        self.token
            .as_ref()
            .map(|token| token.expose_secret().as_str())
            .ok_or(TrefleError::MissingToken)
    }
}

#[derive(Deserialize)]
struct PlantPage {
    #[serde(default)]
    data: Vec<PlantRecord>,
}

#[derive(Deserialize)]
struct PlantEnvelope {
    data: PlantRecord,
}

fn filter_candidates(records: Vec<PlantRecord>) -> Vec<PlantRecord> {
    records
        .into_iter()
        .filter(|record| {
            record
                .image_url
                .as_deref()
                .is_some_and(|url| !url.is_empty())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{PlantPage, filter_candidates};
    use serde_json::json;

    #[test]
    fn candidates_without_an_image_are_dropped() {
        let page: PlantPage = serde_json::from_value(json!({
            "data": [
                { "id": 1, "common_name": "No image" },
                { "id": 2, "common_name": "Empty image", "image_url": "" },
                { "id": 3, "common_name": "Pictured", "image_url": "https://img.example/3.jpg" }
            ]
        }))
        .expect("plant page");

        let candidates = filter_candidates(page.data);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, Some(3));
    }

    #[test]
    fn a_page_without_a_data_field_parses_as_empty() {
        let page: PlantPage = serde_json::from_value(json!({})).expect("empty page");
        assert!(filter_candidates(page.data).is_empty());
    }
}
