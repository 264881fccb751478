pub mod catalog;
pub mod health;
pub mod resolve;
pub mod types;

pub use catalog::{catalog_handler, tool_demo_handler};
pub use health::{health_handler, ready_handler};
pub use resolve::{embed_handler, resolve_handler};
pub use types::{type_handler, types_handler};

use crate::resolver::Language;
use serde::Deserialize;

/// `?lang=` query parameter shared by read endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<Language>,
}
