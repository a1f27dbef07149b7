mod delete;
mod get;
mod post;
mod update;

pub use delete::delete_flower;
pub use get::flower_detail;
pub use post::save_flower;
pub use update::rename_flower;

use crate::routes::common::render_with_status;
use crate::routes::pages::{DetailPage, DetailState};
use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use uuid::Uuid;

fn parse_flower_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

fn not_found_page() -> HttpResponse {
    render_with_status(
        StatusCode::NOT_FOUND,
        &DetailPage {
            state: DetailState::NotFound,
        },
    )
}
