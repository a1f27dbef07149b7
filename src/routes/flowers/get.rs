use super::{not_found_page, parse_flower_id};
use crate::routes::common::render_with_status;
use crate::routes::pages::{DetailPage, DetailState, FlowerView};
use crate::store::{FlowerStore, StoreError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use askama_actix::TemplateToResponse;
use tracing::error;

pub async fn flower_detail(
    store: web::Data<FlowerStore>,
    path: web::Path<(String,)>,
) -> HttpResponse {
    let Some(id) = parse_flower_id(&path.into_inner().0) else {
        return not_found_page();
    };

    match store.get_flower(id).await {
        Ok(flower) => DetailPage {
            state: DetailState::Flower(FlowerView::new(&flower)),
        }
        .to_response(),
        Err(StoreError::NotFound) => not_found_page(),
        Err(e) => {
            error!("Failed to load flower {id}: {e}");
            render_with_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                &DetailPage {
                    state: DetailState::Error(format!("Failed to load flower: {e}")),
                },
            )
        }
    }
}
