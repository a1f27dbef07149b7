mod respond;

pub use respond::{render_with_status, see_other};
