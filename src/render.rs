//! Framework-neutral description of a tool's live demo panel.
//!
//! A [`DemoPlan`] says which fields to show, under which labels and as what
//! kind of media. Presentation (markup, components, styling) stays with the
//! caller.

use crate::resolver::{
    has_content, label, resolve_embed_url, type_description, type_name, FieldSlot, Language,
    RenderKind, SlotValues, ToolType, VisibleSlots,
};
use serde::Serialize;

/// A field value ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Media {
    Text {
        body: String,
    },
    Image {
        src: String,
    },
    /// `embed_url` goes in an iframe when `embeddable`, otherwise `src` is played natively.
    Video {
        src: String,
        embed_url: String,
        embeddable: bool,
    },
    Audio {
        src: String,
    },
}

impl Media {
    fn for_slot(slot: FieldSlot, value: &str) -> Self {
        match slot.render_kind() {
            RenderKind::Text => Self::Text {
                body: value.to_string(),
            },
            RenderKind::Image => Self::Image {
                src: value.trim().to_string(),
            },
            RenderKind::Video => {
                let resolved = resolve_embed_url(value.trim());
                Self::Video {
                    src: value.trim().to_string(),
                    embed_url: resolved.embed_url,
                    embeddable: resolved.is_embeddable,
                }
            }
            RenderKind::Audio => Self::Audio {
                src: value.trim().to_string(),
            },
        }
    }

    pub fn kind(&self) -> RenderKind {
        match self {
            Self::Text { .. } => RenderKind::Text,
            Self::Image { .. } => RenderKind::Image,
            Self::Video { .. } => RenderKind::Video,
            Self::Audio { .. } => RenderKind::Audio,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedField {
    pub slot: FieldSlot,
    pub label: &'static str,
    #[serde(flatten)]
    pub media: Media,
}

/// Everything the demo panel needs for one tool or demo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoPlan {
    pub tool_type: ToolType,
    pub type_name: &'static str,
    pub description: &'static str,
    pub inputs: Vec<RenderedField>,
    pub outputs: Vec<RenderedField>,
    /// Both sides have content, so the input → output arrow is drawn.
    pub show_divider: bool,
}

impl DemoPlan {
    /// Build the plan, or `None` when no visible slot has content.
    pub fn build(tool_type: ToolType, values: &SlotValues, language: Language) -> Option<Self> {
        let visible = VisibleSlots::for_type(tool_type);
        let render = |slots: &[FieldSlot]| -> Vec<RenderedField> {
            slots
                .iter()
                .copied()
                .filter(|slot| has_content(values, *slot))
                .filter_map(|slot| {
                    values.get(slot).map(|value| RenderedField {
                        slot,
                        label: label(tool_type, slot, language),
                        media: Media::for_slot(slot, value),
                    })
                })
                .collect()
        };

        let inputs = render(visible.inputs);
        let outputs = render(visible.outputs);
        if inputs.is_empty() && outputs.is_empty() {
            return None;
        }

        Some(Self {
            tool_type,
            type_name: type_name(tool_type, language),
            description: type_description(tool_type, language),
            show_divider: !inputs.is_empty() && !outputs.is_empty(),
            inputs,
            outputs,
        })
    }

    /// Inputs then outputs.
    pub fn fields(&self) -> impl Iterator<Item = &RenderedField> {
        self.inputs.iter().chain(self.outputs.iter())
    }

    pub fn field(&self, slot: FieldSlot) -> Option<&RenderedField> {
        self.fields().find(|field| field.slot == slot)
    }
}
