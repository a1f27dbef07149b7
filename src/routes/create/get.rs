use crate::routes::pages::{CreatePage, CreateState};
use crate::trefle::TrefleClient;
use actix_web::{HttpResponse, web};
use askama_actix::TemplateToResponse;

pub async fn create_screen(trefle: web::Data<TrefleClient>) -> HttpResponse {
    let state = if trefle.is_configured() {
        CreateState::Idle
    } else {
        CreateState::MissingToken
    };

    CreatePage { state, error: None }.to_response()
}
