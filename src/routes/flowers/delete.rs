use super::{not_found_page, parse_flower_id};
use crate::routes::common::{render_with_status, see_other};
use crate::routes::pages::{DetailPage, DetailState, FlowerView};
use crate::store::FlowerStore;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use askama_actix::TemplateToResponse;
use tracing::{error, info};

pub async fn delete_flower(
    store: web::Data<FlowerStore>,
    path: web::Path<(String,)>,
) -> HttpResponse {
    let Some(id) = parse_flower_id(&path.into_inner().0) else {
        return not_found_page();
    };

    match store.delete_flower(id).await {
        Ok(()) => {
            info!("Flower {id} deleted");
            see_other("/home")
        }
        Err(e) => {
            error!("Failed to delete flower {id}: {e}");
            // Stay on the detail screen with the failure inline.
            match store.get_flower(id).await {
                Ok(flower) => {
                    let mut view = FlowerView::new(&flower);
                    view.error = Some(format!("Failed to delete flower: {e}"));
                    DetailPage {
                        state: DetailState::Flower(view),
                    }
                    .to_response()
                }
                Err(_) => render_with_status(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &DetailPage {
                        state: DetailState::Error(format!("Failed to delete flower: {e}")),
                    },
                ),
            }
        }
    }
}
