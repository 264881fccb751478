use super::LangQuery;
use crate::resolver::{
    form_label, label, type_description, type_name, FieldSlot, Language, RenderKind, ToolType,
    VisibleSlots,
};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct SlotDescriptor {
    pub slot: FieldSlot,
    pub label: &'static str,
    pub form_label: &'static str,
    pub kind: RenderKind,
}

/// A tool type with its labelled input and output slots.
#[derive(Debug, Serialize)]
pub struct TypeDescriptor {
    pub tool_type: ToolType,
    pub name: &'static str,
    pub description: &'static str,
    pub inputs: Vec<SlotDescriptor>,
    pub outputs: Vec<SlotDescriptor>,
}

impl TypeDescriptor {
    pub fn new(tool_type: ToolType, language: Language) -> Self {
        let visible = VisibleSlots::for_type(tool_type);
        let describe = |slots: &[FieldSlot]| -> Vec<SlotDescriptor> {
            slots
                .iter()
                .map(|&slot| SlotDescriptor {
                    slot,
                    label: label(tool_type, slot, language),
                    form_label: form_label(tool_type, slot, language),
                    kind: slot.render_kind(),
                })
                .collect()
        };

        Self {
            tool_type,
            name: type_name(tool_type, language),
            description: type_description(tool_type, language),
            inputs: describe(visible.inputs),
            outputs: describe(visible.outputs),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TypesResponse {
    pub types: Vec<TypeDescriptor>,
}

/// GET /types - Every tool type with its slots and labels.
pub async fn types_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangQuery>,
) -> Json<TypesResponse> {
    let language = state.language(query.lang);
    let types = ToolType::ALL
        .into_iter()
        .map(|tool_type| TypeDescriptor::new(tool_type, language))
        .collect();

    Json(TypesResponse { types })
}

/// GET /types/:tool_type - One type's slots. Unknown tags describe `other`.
pub async fn type_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_type): Path<String>,
    Query(query): Query<LangQuery>,
) -> Json<TypeDescriptor> {
    let language = state.language(query.lang);
    Json(TypeDescriptor::new(ToolType::parse(&raw_type), language))
}
