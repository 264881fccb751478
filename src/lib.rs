//! Slotwise - tool-type field resolver for AI tool catalog demos
//!
//! This library exposes the resolver and the components built on it, so the
//! HTTP service, integration tests and other front ends share one
//! implementation of "which fields does this tool type show, and how".

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod record;
pub mod render;
pub mod resolver;
pub mod routes;
pub mod selection;
pub mod state;

// Re-export key types for convenience
pub use catalog::Catalog;
pub use config::Config;
pub use error::{AppError, Result};
pub use record::{project, ProjectedRecord, RecordShape};
pub use render::{DemoPlan, Media, RenderedField};
pub use resolver::{
    form_label, has_content, label, render_kind, resolve_embed_url, visible_slots,
    EmbedResolution, FieldSlot, Language, RenderKind, SlotValues, ToolType, VisibleSlots,
};
pub use routes::router;
pub use selection::{FieldVisibility, SelectionWatcher, TypeSelection};
pub use state::AppState;
