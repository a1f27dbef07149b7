mod attributes;
mod flower;
mod flower_name;
mod new_flower;
mod plant_record;

pub use attributes::{derive_attributes, random_attributes};
pub use flower::{FlowerAttributes, SavedFlower};
pub use flower_name::{FlowerName, InvalidFlowerName};
pub use new_flower::NewFlower;
pub use plant_record::PlantRecord;
