//! Tool-type field resolution.
//!
//! Decides, for a tool's type and raw field values, which slots are relevant,
//! what they are called and how they render. Every function here is pure and
//! total: unknown types collapse to `other`, missing labels fall back to
//! generic ones and unparsable URLs are played directly. Nothing here logs.

pub mod embed;
pub mod labels;
pub mod types;
pub mod values;

pub use embed::{resolve_embed_url, EmbedResolution};
pub use labels::{type_description, type_name};
pub use types::{FieldSlot, Language, RenderKind, SlotDirection, ToolType};
pub use values::SlotValues;

use serde::Serialize;

const TEXT_INPUT: &[FieldSlot] = &[FieldSlot::Prompt];
const IMAGE_INPUT: &[FieldSlot] = &[FieldSlot::PromptImage];
const ALL_INPUTS: &[FieldSlot] = &[FieldSlot::Prompt, FieldSlot::PromptImage];

const TEXT_OUTPUT: &[FieldSlot] = &[FieldSlot::ResultText];
const IMAGE_OUTPUT: &[FieldSlot] = &[FieldSlot::ResultImage];
const VIDEO_OUTPUT: &[FieldSlot] = &[FieldSlot::ResultVideoUrl];
const AUDIO_OUTPUT: &[FieldSlot] = &[FieldSlot::ResultAudioUrl];
const ALL_OUTPUTS: &[FieldSlot] = &[
    FieldSlot::ResultText,
    FieldSlot::ResultImage,
    FieldSlot::ResultVideoUrl,
    FieldSlot::ResultAudioUrl,
];

/// The slots relevant to one tool type, inputs and outputs in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleSlots {
    pub tool_type: ToolType,
    pub inputs: &'static [FieldSlot],
    pub outputs: &'static [FieldSlot],
}

impl VisibleSlots {
    pub fn for_type(tool_type: ToolType) -> Self {
        let (inputs, outputs) = match tool_type {
            ToolType::TextToText => (TEXT_INPUT, TEXT_OUTPUT),
            ToolType::TextToImage => (TEXT_INPUT, IMAGE_OUTPUT),
            ToolType::TextToVideo => (TEXT_INPUT, VIDEO_OUTPUT),
            ToolType::TextToAudio => (TEXT_INPUT, AUDIO_OUTPUT),
            ToolType::ImageToImage => (IMAGE_INPUT, IMAGE_OUTPUT),
            ToolType::ImageToVideo => (IMAGE_INPUT, VIDEO_OUTPUT),
            ToolType::Other => (ALL_INPUTS, ALL_OUTPUTS),
        };

        Self {
            tool_type,
            inputs,
            outputs,
        }
    }

    pub fn contains(&self, slot: FieldSlot) -> bool {
        self.inputs.contains(&slot) || self.outputs.contains(&slot)
    }

    /// Inputs followed by outputs.
    pub fn iter(&self) -> impl Iterator<Item = FieldSlot> {
        let (inputs, outputs) = (self.inputs, self.outputs);
        inputs.iter().chain(outputs.iter()).copied()
    }

    pub fn len(&self) -> usize {
        self.inputs.len() + self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Slots relevant to a raw type tag. Unknown or empty tags get `other`'s full set.
pub fn visible_slots(raw_type: &str) -> VisibleSlots {
    VisibleSlots::for_type(ToolType::parse(raw_type))
}

/// The one visibility predicate: non-empty after trimming.
pub fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Whether `slot` carries displayable content in `values`.
pub fn has_content(values: &SlotValues, slot: FieldSlot) -> bool {
    values.get(slot).is_some_and(has_text)
}

/// Demo-panel label for a slot, never empty.
pub fn label(tool_type: ToolType, slot: FieldSlot, language: Language) -> &'static str {
    labels::DEMO_LABELS.resolve(tool_type, slot, language)
}

/// Admin-form label for a slot, never empty.
pub fn form_label(tool_type: ToolType, slot: FieldSlot, language: Language) -> &'static str {
    labels::FORM_LABELS.resolve(tool_type, slot, language)
}

pub fn render_kind(slot: FieldSlot) -> RenderKind {
    slot.render_kind()
}
