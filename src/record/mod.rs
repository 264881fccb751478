//! Projection of stored records into the canonical slot-keyed shape.
//!
//! Tools carry their demo fields under the slot names directly, while
//! per-demo records use an `input_*`/`output_*` naming scheme with separate
//! file and URL columns. Both end up as a [`ProjectedRecord`].

use crate::render::DemoPlan;
use crate::resolver::{has_text, FieldSlot, Language, SlotValues, ToolType};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Suffix of the Georgian variant of a localized field.
const GEORGIAN_SUFFIX: &str = "_ge";

/// Which naming scheme a record uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordShape {
    #[default]
    Tool,
    Demo,
}

type SlotSources = &'static [(FieldSlot, &'static [&'static str])];

const TOOL_TYPE_KEYS: &[&str] = &["type"];
const DEMO_TYPE_KEYS: &[&str] = &["demo_type", "type"];

const TOOL_SOURCES: SlotSources = &[
    (FieldSlot::Prompt, &["prompt"]),
    (FieldSlot::PromptImage, &["prompt_image"]),
    (FieldSlot::ResultText, &["result_text"]),
    (FieldSlot::ResultImage, &["result_image"]),
    (FieldSlot::ResultVideoUrl, &["result_video_url"]),
    (FieldSlot::ResultAudioUrl, &["result_audio_url"]),
];

// Demo records have no canonical slot for video or audio inputs.
const DEMO_SOURCES: SlotSources = &[
    (FieldSlot::Prompt, &["input_prompt"]),
    (
        FieldSlot::PromptImage,
        &["input_image", "input_image_url", "input_image_file"],
    ),
    (FieldSlot::ResultText, &["output_text"]),
    (
        FieldSlot::ResultImage,
        &["output_image", "output_image_url", "output_image_file"],
    ),
    (
        FieldSlot::ResultVideoUrl,
        &["output_video", "output_video_url", "output_video_file"],
    ),
    (
        FieldSlot::ResultAudioUrl,
        &["output_audio", "output_audio_url", "output_audio_file"],
    ),
];

impl RecordShape {
    fn type_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Tool => TOOL_TYPE_KEYS,
            Self::Demo => DEMO_TYPE_KEYS,
        }
    }

    fn sources(&self) -> SlotSources {
        match self {
            Self::Tool => TOOL_SOURCES,
            Self::Demo => DEMO_SOURCES,
        }
    }
}

/// A record reduced to what the resolver needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectedRecord {
    pub tool_type: ToolType,
    pub slots: SlotValues,
}

impl ProjectedRecord {
    /// Demo plan for this record, `None` when nothing would be shown.
    pub fn plan(&self, language: Language) -> Option<DemoPlan> {
        DemoPlan::build(self.tool_type, &self.slots, language)
    }
}

/// Project a JSON record of the given shape.
///
/// Non-object input yields an empty `other` record. Null and non-string
/// values count as absent. For Georgian, a populated `<key>_ge` wins over
/// `<key>`; when a slot has several candidate keys the first populated one
/// is used.
pub fn project(record: &Value, shape: RecordShape, language: Language) -> ProjectedRecord {
    let Some(object) = record.as_object() else {
        return ProjectedRecord::default();
    };

    let tool_type = shape
        .type_keys()
        .iter()
        .find_map(|key| text_field(object, key))
        .map(ToolType::parse)
        .unwrap_or_default();

    let slots = shape
        .sources()
        .iter()
        .filter_map(|(slot, keys)| {
            keys.iter()
                .find_map(|key| localized_field(object, key, language))
                .map(|value| (*slot, value))
        })
        .collect();

    ProjectedRecord { tool_type, slots }
}

/// Localized value of a free-text field such as `title` or `description`.
pub fn localized_text(record: &Value, field: &str, language: Language) -> Option<String> {
    localized_field(record.as_object()?, field, language).map(str::to_string)
}

fn localized_field<'a>(object: &'a Map<String, Value>, key: &str, language: Language) -> Option<&'a str> {
    let localized = match language {
        Language::Ka => text_field(object, &format!("{key}{GEORGIAN_SUFFIX}")),
        Language::En => None,
    };
    localized.or_else(|| text_field(object, key))
}

fn text_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| has_text(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_tool_record() {
        let record = json!({
            "name": "Imagen",
            "type": "text-to-image",
            "prompt": "A lighthouse at dusk",
            "result_image": "https://cdn.example.com/lighthouse.png",
            "result_text": null,
            "rating": 4.5
        });

        let projected = project(&record, RecordShape::Tool, Language::En);

        assert_eq!(projected.tool_type, ToolType::TextToImage);
        assert_eq!(projected.slots.len(), 2);
        assert_eq!(projected.slots.get(FieldSlot::Prompt), Some("A lighthouse at dusk"));
        assert_eq!(projected.slots.get(FieldSlot::ResultText), None);
    }

    #[test]
    fn test_project_demo_record() {
        let record = json!({
            "demo_type": "image-to-video",
            "title": "Animate a photo",
            "input_image": "",
            "input_image_url": "https://img.example.com/cat.jpg",
            "input_video_url": "https://img.example.com/ignored.mp4",
            "output_video_url": "https://youtu.be/abc123"
        });

        let projected = project(&record, RecordShape::Demo, Language::En);

        assert_eq!(projected.tool_type, ToolType::ImageToVideo);
        assert_eq!(
            projected.slots.get(FieldSlot::PromptImage),
            Some("https://img.example.com/cat.jpg")
        );
        assert_eq!(
            projected.slots.get(FieldSlot::ResultVideoUrl),
            Some("https://youtu.be/abc123")
        );
        assert_eq!(projected.slots.len(), 2);
    }

    #[test]
    fn test_demo_falls_back_to_type_key() {
        let record = json!({ "type": "text-to-text", "input_prompt": "hi" });
        let projected = project(&record, RecordShape::Demo, Language::En);
        assert_eq!(projected.tool_type, ToolType::TextToText);
    }

    #[test]
    fn test_georgian_variant_wins_when_present() {
        let record = json!({
            "type": "text-to-text",
            "prompt": "Summarize this",
            "prompt_ge": "შეაჯამე ეს",
            "result_text": "Summary",
            "result_text_ge": "  "
        });

        let projected = project(&record, RecordShape::Tool, Language::Ka);
        assert_eq!(projected.slots.get(FieldSlot::Prompt), Some("შეაჯამე ეს"));
        assert_eq!(projected.slots.get(FieldSlot::ResultText), Some("Summary"));

        let english = project(&record, RecordShape::Tool, Language::En);
        assert_eq!(english.slots.get(FieldSlot::Prompt), Some("Summarize this"));
    }

    #[test]
    fn test_missing_or_unknown_type_is_other() {
        let projected = project(&json!({ "prompt": "x" }), RecordShape::Tool, Language::En);
        assert_eq!(projected.tool_type, ToolType::Other);

        let projected = project(&json!({ "type": 7 }), RecordShape::Tool, Language::En);
        assert_eq!(projected.tool_type, ToolType::Other);
    }

    #[test]
    fn test_non_object_projects_to_empty() {
        for value in [json!(null), json!("text"), json!([1, 2])] {
            let projected = project(&value, RecordShape::Tool, Language::En);
            assert_eq!(projected, ProjectedRecord::default());
        }
    }

    #[test]
    fn test_localized_text() {
        let demo = json!({ "title": "Creative Writing", "title_ge": "შემოქმედებითი წერა" });
        assert_eq!(
            localized_text(&demo, "title", Language::Ka).as_deref(),
            Some("შემოქმედებითი წერა")
        );
        assert_eq!(
            localized_text(&demo, "title", Language::En).as_deref(),
            Some("Creative Writing")
        );
        assert_eq!(localized_text(&demo, "description", Language::En), None);
    }
}
