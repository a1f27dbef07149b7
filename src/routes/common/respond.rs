use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::{ContentType, LOCATION};
use askama_actix::Template;
use tracing::error;

pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

/// Renders a template with an explicit status code; `to_response()` covers
/// the plain 200 case.
pub fn render_with_status<T: Template>(status: StatusCode, template: &T) -> HttpResponse {
    match template.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(body),
        Err(e) => {
            error!("Failed to render template: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
