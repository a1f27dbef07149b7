use crate::domain::SavedFlower;
use askama_actix::Template;

#[derive(Template)]
#[template(path = "create.html")]
pub struct CreatePage {
    pub state: CreateState,
    pub error: Option<String>,
}

/// What the create screen is showing. One variant per screen state keeps
/// impossible combinations (a preview without a draft, say) unrepresentable.
pub enum CreateState {
    /// No Trefle token configured; the flow is disabled with instructions.
    MissingToken,
    Idle,
    Preview(FlowerDraft),
}

/// A drawn plant awaiting a name and a save. Carried through the save form
/// as hidden fields so a failed save can re-render it unchanged.
pub struct FlowerDraft {
    pub name: String,
    pub image_url: String,
    pub scientific_name: Option<String>,
    pub trefle_id: Option<String>,
    pub common_name: Option<String>,
    pub attributes: Vec<String>,
}

impl FlowerDraft {
    pub fn attributes_line(&self) -> String {
        self.attributes.join(", ")
    }

    pub fn attributes_field(&self) -> String {
        self.attributes.join(",")
    }

    pub fn scientific_name_field(&self) -> &str {
        self.scientific_name.as_deref().unwrap_or("")
    }

    pub fn trefle_id_field(&self) -> &str {
        self.trefle_id.as_deref().unwrap_or("")
    }

    pub fn common_name_field(&self) -> &str {
        self.common_name.as_deref().unwrap_or("")
    }
}

#[derive(Template)]
#[template(path = "garden.html")]
pub struct GardenPage {
    pub state: GardenState,
}

pub enum GardenState {
    Error(String),
    /// Zero rows renders its own state, not an empty grid.
    Empty,
    Flowers(Vec<FlowerCard>),
}

pub struct FlowerCard {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub attributes_line: String,
}

impl From<&SavedFlower> for FlowerCard {
    fn from(flower: &SavedFlower) -> Self {
        FlowerCard {
            id: flower.id.to_string(),
            name: flower.name.clone(),
            image_url: flower.image_url.clone(),
            attributes_line: flower.attributes.botanical_attributes.join(", "),
        }
    }
}

#[derive(Template)]
#[template(path = "flower_detail.html")]
pub struct DetailPage {
    pub state: DetailState,
}

pub enum DetailState {
    NotFound,
    Error(String),
    Flower(FlowerView),
}

pub struct FlowerView {
    pub id: String,
    /// The stored name; the template compares the input against it to keep
    /// the update control disabled on a no-op rename.
    pub name: String,
    pub name_input: String,
    pub image_url: String,
    pub scientific_name: Option<String>,
    pub attributes: Vec<String>,
    pub created_at: String,
    pub error: Option<String>,
}

impl FlowerView {
    pub fn new(flower: &SavedFlower) -> Self {
        FlowerView {
            id: flower.id.to_string(),
            name: flower.name.clone(),
            name_input: flower.name.clone(),
            image_url: flower.image_url.clone(),
            scientific_name: flower.attributes.scientific_name.clone(),
            attributes: flower.attributes.botanical_attributes.clone(),
            created_at: flower.created_at.format("%B %e, %Y").to_string(),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CreatePage, CreateState, DetailPage, DetailState, FlowerCard, FlowerDraft, FlowerView,
        GardenPage, GardenState,
    };
    use askama_actix::Template;

    fn draft() -> FlowerDraft {
        FlowerDraft {
            name: "Evening primrose".to_string(),
            image_url: "https://img.example/primrose.jpg".to_string(),
            scientific_name: Some("Oenothera biennis".to_string()),
            trefle_id: Some("153826".to_string()),
            common_name: Some("Evening primrose".to_string()),
            attributes: vec!["Colorful".to_string(), "Annual".to_string()],
        }
    }

    #[test]
    fn empty_garden_renders_the_empty_state_not_a_grid() {
        let html = GardenPage {
            state: GardenState::Empty,
        }
        .render()
        .expect("garden page");

        assert!(html.contains("No flowers yet!"));
        assert!(!html.contains(r#"class="card-grid""#));
    }

    #[test]
    fn populated_garden_renders_a_card_per_flower() {
        let html = GardenPage {
            state: GardenState::Flowers(vec![FlowerCard {
                id: "5f2b7f3e-0000-0000-0000-000000000000".to_string(),
                name: "Dahlia".to_string(),
                image_url: "https://img.example/dahlia.jpg".to_string(),
                attributes_line: "Colorful, Perennial, Ornamental".to_string(),
            }]),
        }
        .render()
        .expect("garden page");

        assert!(html.contains(r#"class="card-grid""#));
        assert!(html.contains("Dahlia"));
        assert!(html.contains("/flower/5f2b7f3e-0000-0000-0000-000000000000"));
    }

    #[test]
    fn missing_token_screen_explains_how_to_configure_one() {
        let html = CreatePage {
            state: CreateState::MissingToken,
            error: None,
        }
        .render()
        .expect("create page");

        assert!(html.contains("trefle.io"));
        assert!(html.contains("APP_TREFLE__TOKEN"));
    }

    #[test]
    fn preview_carries_the_draft_through_hidden_fields() {
        let html = CreatePage {
            state: CreateState::Preview(draft()),
            error: None,
        }
        .render()
        .expect("create page");

        assert!(html.contains(r#"value="Colorful,Annual""#));
        assert!(html.contains(r#"value="153826""#));
        assert!(html.contains("Colorful, Annual"));
    }

    #[test]
    fn create_error_message_is_rendered_inline() {
        let html = CreatePage {
            state: CreateState::Idle,
            error: Some("No plants with images found".to_string()),
        }
        .render()
        .expect("create page");

        assert!(html.contains("No plants with images found"));
    }

    #[test]
    fn detail_page_exposes_the_stored_name_for_the_no_op_rename_guard() {
        let view = FlowerView {
            id: "5f2b7f3e-0000-0000-0000-000000000000".to_string(),
            name: "Dahlia".to_string(),
            name_input: "Dahlia".to_string(),
            image_url: "https://img.example/dahlia.jpg".to_string(),
            scientific_name: None,
            attributes: vec!["Colorful".to_string()],
            created_at: "August  1, 2025".to_string(),
            error: None,
        };
        let html = DetailPage {
            state: DetailState::Flower(view),
        }
        .render()
        .expect("detail page");

        assert!(html.contains(r#"data-saved-name="Dahlia""#));
        assert!(html.contains(r#"value="Dahlia""#));
    }

    #[test]
    fn missing_flower_renders_the_not_found_message() {
        let html = DetailPage {
            state: DetailState::NotFound,
        }
        .render()
        .expect("detail page");

        assert!(html.contains("Flower not found"));
    }
}
