//! Read-only snapshot of tool records loaded from a JSON file.
//!
//! The file holds either a bare array of tool records or an object with a
//! `tools` array. Malformed entries are logged and skipped (partial success);
//! the load only fails when nothing usable remains.

use crate::error::{AppError, Result};
use crate::record::{localized_text, project, ProjectedRecord, RecordShape};
use crate::render::DemoPlan;
use crate::resolver::{Language, ToolType};
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One tool record and its per-demo records, ordered by `order`.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub id: String,
    pub record: Value,
    pub demos: Vec<Value>,
}

impl CatalogEntry {
    pub fn name(&self, language: Language) -> Option<String> {
        localized_text(&self.record, "name", language)
    }

    pub fn project(&self, language: Language) -> ProjectedRecord {
        project(&self.record, RecordShape::Tool, language)
    }

    pub fn summary(&self, language: Language) -> CatalogSummary {
        CatalogSummary {
            id: self.id.clone(),
            name: self.name(language),
            tool_type: self.project(language).tool_type,
            demos: self.demos.len(),
        }
    }

    pub fn demo_views(&self, language: Language) -> Vec<DemoView> {
        self.demos
            .iter()
            .map(|demo| {
                let projected = project(demo, RecordShape::Demo, language);
                DemoView {
                    title: localized_text(demo, "title", language),
                    description: localized_text(demo, "description", language),
                    tool_type: projected.tool_type,
                    plan: projected.plan(language),
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub id: String,
    pub name: Option<String>,
    pub tool_type: ToolType,
    pub demos: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoView {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tool_type: ToolType,
    pub plan: Option<DemoPlan>,
}

pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
    fingerprint: String,
}

impl Catalog {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            fingerprint: compute_fingerprint(&[]),
        }
    }

    /// Load a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            AppError::CatalogError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let json: Value = serde_json::from_str(&text)?;
        let catalog = Self::from_json(&json)?;

        tracing::info!(
            path = %path.display(),
            tools = catalog.len(),
            version = %catalog.fingerprint(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    pub fn from_json(json: &Value) -> Result<Self> {
        let items = extract_entries(json)?;

        let mut entries = Vec::with_capacity(items.len());
        let mut index = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            let entry = match normalize_entry(item) {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(index = position, error = %e, "Skipping malformed catalog entry");
                    continue;
                }
            };

            if index.contains_key(&entry.id) {
                tracing::warn!(index = position, id = %entry.id, "Skipping duplicate catalog id");
                continue;
            }

            index.insert(entry.id.clone(), entries.len());
            entries.push(entry);
        }

        if entries.is_empty() && !items.is_empty() {
            return Err(AppError::CatalogError(
                "All catalog entries failed to parse".into(),
            ));
        }

        let fingerprint = compute_fingerprint(&entries);
        Ok(Self {
            entries,
            index,
            fingerprint,
        })
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    pub fn summaries(&self, language: Language) -> Vec<CatalogSummary> {
        self.entries
            .iter()
            .map(|entry| entry.summary(language))
            .collect()
    }

    /// SHA-256 over every entry, hex encoded. Changes whenever any record changes.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn extract_entries(json: &Value) -> Result<&Vec<Value>> {
    json.as_array()
        .or_else(|| json.get("tools").and_then(Value::as_array))
        .ok_or_else(|| {
            AppError::CatalogError("Expected an array or a 'tools' array".into())
        })
}

fn normalize_entry(item: &Value) -> Result<CatalogEntry> {
    if !item.is_object() {
        return Err(AppError::CatalogError("Entry is not an object".into()));
    }

    let id = match item.get("id") {
        Some(Value::String(id)) if !id.trim().is_empty() => id.trim().to_string(),
        Some(Value::Number(id)) if id.is_u64() || id.is_i64() => id.to_string(),
        other => {
            return Err(AppError::CatalogError(format!(
                "Entry missing usable 'id' field: {:?}",
                other
            )))
        }
    };

    let mut demos: Vec<Value> = item
        .get("demos")
        .and_then(Value::as_array)
        .map(|demos| demos.iter().filter(|d| d.is_object()).cloned().collect())
        .unwrap_or_default();
    demos.sort_by_key(|demo| demo.get("order").and_then(Value::as_u64).unwrap_or(0));

    Ok(CatalogEntry {
        id,
        record: item.clone(),
        demos,
    })
}

fn compute_fingerprint(entries: &[CatalogEntry]) -> String {
    let mut hasher = Sha256::new();

    for entry in entries {
        hasher.update(entry.id.as_bytes());
        hasher.update(b"|");
        hasher.update(entry.record.to_string().as_bytes());
        hasher.update(b"\n");
    }

    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}
