use crate::domain::{FlowerAttributes, FlowerName, NewFlower};
use crate::routes::common::see_other;
use crate::routes::pages::{CreatePage, CreateState, FlowerDraft};
use crate::store::FlowerStore;
use actix_web::{HttpResponse, web};
use askama_actix::TemplateToResponse;
use tracing::{error, info};

#[derive(serde::Deserialize)]
pub struct SaveFlowerForm {
    name: String,
    image_url: String,
    #[serde(default)]
    scientific_name: String,
    #[serde(default)]
    trefle_id: String,
    #[serde(default)]
    common_name: String,
    #[serde(default)]
    attributes: String,
}

pub async fn save_flower(
    store: web::Data<FlowerStore>,
    form: web::Form<SaveFlowerForm>,
) -> HttpResponse {
    let form = form.into_inner();

    // Validation happens before any store call.
    let name = match FlowerName::parse(&form.name) {
        Ok(name) => name,
        Err(_) => {
            return CreatePage {
                state: CreateState::Preview(form.into_draft()),
                error: Some("Please give your flower a name".to_string()),
            }
            .to_response();
        }
    };

    let new_flower = NewFlower {
        name,
        image_url: form.image_url.clone(),
        attributes: FlowerAttributes {
            botanical_attributes: form.attribute_list(),
            scientific_name: none_if_empty(&form.scientific_name),
            trefle_id: none_if_empty(&form.trefle_id),
            common_name: none_if_empty(&form.common_name),
        },
    };

    match store.insert_flower(&new_flower).await {
        Ok(saved) => {
            info!("Flower {} saved as {:?}", saved.id, saved.name);
            see_other("/home")
        }
        Err(e) => {
            error!("Failed to save flower: {e}");
            CreatePage {
                state: CreateState::Preview(form.into_draft()),
                error: Some(format!("Failed to save flower: {e}")),
            }
            .to_response()
        }
    }
}

impl SaveFlowerForm {
    fn attribute_list(&self) -> Vec<String> {
        self.attributes
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect()
    }

    fn into_draft(self) -> FlowerDraft {
        let attributes = self.attribute_list();
        FlowerDraft {
            scientific_name: none_if_empty(&self.scientific_name),
            trefle_id: none_if_empty(&self.trefle_id),
            common_name: none_if_empty(&self.common_name),
            name: self.name,
            image_url: self.image_url,
            attributes,
        }
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
