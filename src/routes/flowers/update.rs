use super::{not_found_page, parse_flower_id};
use crate::domain::FlowerName;
use crate::routes::common::render_with_status;
use crate::routes::pages::{DetailPage, DetailState, FlowerView};
use crate::store::{FlowerStore, StoreError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use askama_actix::TemplateToResponse;
use tracing::{error, info};

#[derive(serde::Deserialize)]
pub struct RenameFlowerForm {
    name: String,
}

pub async fn rename_flower(
    store: web::Data<FlowerStore>,
    path: web::Path<(String,)>,
    form: web::Form<RenameFlowerForm>,
) -> HttpResponse {
    let Some(id) = parse_flower_id(&path.into_inner().0) else {
        return not_found_page();
    };

    let flower = match store.get_flower(id).await {
        Ok(flower) => flower,
        Err(StoreError::NotFound) => return not_found_page(),
        Err(e) => {
            error!("Failed to load flower {id}: {e}");
            return render_with_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                &DetailPage {
                    state: DetailState::Error(format!("Failed to load flower: {e}")),
                },
            );
        }
    };

    let submitted = form.into_inner().name;
    let name = match FlowerName::parse(&submitted) {
        Ok(name) => name,
        Err(_) => {
            let mut view = FlowerView::new(&flower);
            view.name_input = submitted;
            view.error = Some("Flower name cannot be empty".to_string());
            return DetailPage {
                state: DetailState::Flower(view),
            }
            .to_response();
        }
    };

    match store.rename_flower(id, &name).await {
        Ok(()) => {
            info!("Flower {id} renamed to {:?}", name.as_str());
            // Re-render from the row already in hand; no refetch.
            let mut view = FlowerView::new(&flower);
            view.name = name.as_str().to_string();
            view.name_input = name.as_str().to_string();
            DetailPage {
                state: DetailState::Flower(view),
            }
            .to_response()
        }
        Err(StoreError::NotFound) => not_found_page(),
        Err(e) => {
            error!("Failed to rename flower {id}: {e}");
            let mut view = FlowerView::new(&flower);
            view.name_input = submitted;
            view.error = Some(format!("Failed to update flower: {e}"));
            DetailPage {
                state: DetailState::Flower(view),
            }
            .to_response()
        }
    }
}
