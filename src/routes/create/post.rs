use crate::domain::{PlantRecord, derive_attributes, random_attributes};
use crate::routes::pages::{CreatePage, CreateState, FlowerDraft};
use crate::trefle::TrefleClient;
use actix_web::{HttpResponse, web};
use askama_actix::TemplateToResponse;
use tracing::{error, warn};

/// Draws a random plant: one page of candidates, one picked at random, then
/// the detail record for it. A failed detail fetch degrades to the summary
/// record with random attributes instead of surfacing an error.
pub async fn draw_plant(trefle: web::Data<TrefleClient>) -> HttpResponse {
    if !trefle.is_configured() {
        return CreatePage {
            state: CreateState::MissingToken,
            error: None,
        }
        .to_response();
    }

    let summary = match trefle.random_candidate().await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Failed to draw a plant: {e}");
            return CreatePage {
                state: CreateState::Idle,
                error: Some(e.to_string()),
            }
            .to_response();
        }
    };

    let (plant, attributes) = match summary.id {
        Some(id) => match trefle.fetch_plant_detail(id).await {
            Ok(detail) => {
                let attributes = derive_attributes(&detail);
                (detail, attributes)
            }
            Err(e) => {
                warn!("Plant detail unavailable, falling back to the summary record: {e}");
                (summary, random_attributes())
            }
        },
        None => (summary, random_attributes()),
    };

    CreatePage {
        state: CreateState::Preview(draft_from(plant, attributes)),
        error: None,
    }
    .to_response()
}

fn draft_from(plant: PlantRecord, attributes: Vec<&'static str>) -> FlowerDraft {
    FlowerDraft {
        name: plant
            .common_name
            .clone()
            .unwrap_or_else(|| "Unknown Plant".to_string()),
        image_url: plant.image_url.unwrap_or_default(),
        scientific_name: plant.scientific_name,
        trefle_id: plant.id.map(|id| id.to_string()),
        common_name: plant.common_name,
        attributes: attributes.into_iter().map(String::from).collect(),
    }
}
