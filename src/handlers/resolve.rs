use crate::error::{AppError, Result};
use crate::record::{project, RecordShape};
use crate::render::DemoPlan;
use crate::resolver::{resolve_embed_url, EmbedResolution, Language, ToolType, VisibleSlots};
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    /// A tool or demo record as stored by the catalog backend
    pub record: Value,
    /// Naming scheme of `record` (default: `tool`)
    #[serde(default)]
    pub shape: RecordShape,
    #[serde(default)]
    pub lang: Option<Language>,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub tool_type: ToolType,
    pub visible: VisibleSlots,
    /// Absent when no visible field has content
    pub plan: Option<DemoPlan>,
}

/// POST /resolve - Build the demo plan for a raw record.
///
/// # Flow
/// 1. Validate the record is a JSON object
/// 2. Project it into canonical slots for the requested shape and language
/// 3. Build the plan from the type's visible slots that have content
pub async fn resolve_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResolveRequest>,
) -> Result<Json<ResolveResponse>> {
    if !request.record.is_object() {
        return Err(AppError::ValidationError(
            "record must be a JSON object".to_string(),
        ));
    }

    let language = state.language(request.lang);
    let projected = project(&request.record, request.shape, language);
    let plan = projected.plan(language);

    let fields = plan
        .as_ref()
        .map_or(0, |plan| plan.inputs.len() + plan.outputs.len());

    tracing::debug!(
        tool_type = %projected.tool_type,
        shape = ?request.shape,
        fields,
        "Resolve completed"
    );

    metrics::counter!("resolve_requests_total").increment(1);
    metrics::histogram!("resolve_visible_fields").record(fields as f64);

    Ok(Json(ResolveResponse {
        tool_type: projected.tool_type,
        visible: VisibleSlots::for_type(projected.tool_type),
        plan,
    }))
}

#[derive(Debug, Deserialize)]
pub struct EmbedRequest {
    pub url: String,
}

/// POST /embed - Rewrite a video URL into its provider embed form.
pub async fn embed_handler(Json(request): Json<EmbedRequest>) -> Json<EmbedResolution> {
    let resolved = resolve_embed_url(&request.url);

    tracing::debug!(embeddable = resolved.is_embeddable, "Embed resolved");
    metrics::counter!("embed_requests_total").increment(1);

    Json(resolved)
}
