use crate::routes::pages::{FlowerCard, GardenPage, GardenState};
use crate::store::FlowerStore;
use actix_web::{HttpResponse, web};
use askama_actix::TemplateToResponse;
use tracing::error;

pub async fn garden(store: web::Data<FlowerStore>) -> HttpResponse {
    let state = match store.list_flowers().await {
        Ok(flowers) if flowers.is_empty() => GardenState::Empty,
        Ok(flowers) => GardenState::Flowers(flowers.iter().map(FlowerCard::from).collect()),
        Err(e) => {
            error!("Failed to load flowers: {e}");
            GardenState::Error(format!("Failed to load flowers: {e}"))
        }
    };

    GardenPage { state }.to_response()
}
