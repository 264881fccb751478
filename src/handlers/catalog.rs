use super::LangQuery;
use crate::catalog::{CatalogSummary, DemoView};
use crate::error::{AppError, Result};
use crate::render::DemoPlan;
use crate::resolver::ToolType;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    /// Catalog fingerprint, changes whenever the underlying file does
    pub version: String,
    pub tools: Vec<CatalogSummary>,
}

#[derive(Debug, Serialize)]
pub struct ToolDemoResponse {
    pub id: String,
    pub name: Option<String>,
    pub tool_type: ToolType,
    pub version: String,
    pub plan: Option<DemoPlan>,
    pub demos: Vec<DemoView>,
}

/// GET /catalog - Summaries of every catalog tool.
pub async fn catalog_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangQuery>,
) -> Json<CatalogResponse> {
    let language = state.language(query.lang);

    metrics::counter!("catalog_requests_total").increment(1);

    Json(CatalogResponse {
        version: state.catalog.fingerprint().to_string(),
        tools: state.catalog.summaries(language),
    })
}

/// GET /catalog/:id/demo - Demo plans for one stored tool and its demo records.
pub async fn tool_demo_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<LangQuery>,
) -> Result<Json<ToolDemoResponse>> {
    let entry = state
        .catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Tool '{}' is not in the catalog", id)))?;

    let language = state.language(query.lang);
    let projected = entry.project(language);
    let demos = entry.demo_views(language);

    tracing::debug!(
        id = %entry.id,
        tool_type = %projected.tool_type,
        demos = demos.len(),
        "Catalog demo resolved"
    );
    metrics::counter!("catalog_requests_total").increment(1);

    Ok(Json(ToolDemoResponse {
        id: entry.id.clone(),
        name: entry.name(language),
        tool_type: projected.tool_type,
        version: state.catalog.fingerprint().to_string(),
        plan: projected.plan(language),
        demos,
    }))
}
