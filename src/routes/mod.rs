mod common;
mod create;
mod flowers;
mod garden;
pub mod pages;

pub use create::{create_screen, draw_plant};
pub use flowers::{delete_flower, flower_detail, rename_flower, save_flower};
pub use garden::garden;
