//! Closed vocabularies shared by every resolver operation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The transformation a tool performs.
///
/// Produced only through [`ToolType::parse`], so an unrecognized tag is
/// represented once, as `Other`, instead of being re-guessed by each caller.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum ToolType {
    TextToText,
    TextToImage,
    TextToVideo,
    TextToAudio,
    ImageToImage,
    ImageToVideo,
    #[default]
    Other,
}

impl ToolType {
    pub const ALL: [ToolType; 7] = [
        ToolType::TextToText,
        ToolType::TextToImage,
        ToolType::TextToVideo,
        ToolType::TextToAudio,
        ToolType::ImageToImage,
        ToolType::ImageToVideo,
        ToolType::Other,
    ];

    /// Normalize a raw type tag. Matching is exact; anything else is `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "text-to-text" => Self::TextToText,
            "text-to-image" => Self::TextToImage,
            "text-to-video" => Self::TextToVideo,
            "text-to-audio" => Self::TextToAudio,
            "image-to-image" => Self::ImageToImage,
            "image-to-video" => Self::ImageToVideo,
            _ => Self::Other,
        }
    }

    /// Types whose admin form offers the inline examples editor.
    pub fn supports_examples(&self) -> bool {
        matches!(
            self,
            Self::TextToText
                | Self::TextToImage
                | Self::TextToVideo
                | Self::TextToAudio
                | Self::ImageToImage
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextToText => "text-to-text",
            Self::TextToImage => "text-to-image",
            Self::TextToVideo => "text-to-video",
            Self::TextToAudio => "text-to-audio",
            Self::ImageToImage => "image-to-image",
            Self::ImageToVideo => "image-to-video",
            Self::Other => "other",
        }
    }
}

impl From<&str> for ToolType {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for ToolType {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a slot's value is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderKind {
    Text,
    Image,
    Video,
    Audio,
}

/// Whether a slot is something the user supplies or something the tool produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotDirection {
    Input,
    Output,
}

/// A semantic field a tool record may populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSlot {
    Prompt,
    PromptImage,
    ResultText,
    ResultImage,
    ResultVideoUrl,
    ResultAudioUrl,
}

impl FieldSlot {
    /// All slots in form order: inputs first, then outputs.
    pub const ALL: [FieldSlot; 6] = [
        FieldSlot::Prompt,
        FieldSlot::PromptImage,
        FieldSlot::ResultText,
        FieldSlot::ResultImage,
        FieldSlot::ResultVideoUrl,
        FieldSlot::ResultAudioUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::PromptImage => "prompt_image",
            Self::ResultText => "result_text",
            Self::ResultImage => "result_image",
            Self::ResultVideoUrl => "result_video_url",
            Self::ResultAudioUrl => "result_audio_url",
        }
    }

    /// Look up a slot by its record field name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.as_str() == name)
    }

    pub fn render_kind(&self) -> RenderKind {
        match self {
            Self::Prompt | Self::ResultText => RenderKind::Text,
            Self::PromptImage | Self::ResultImage => RenderKind::Image,
            Self::ResultVideoUrl => RenderKind::Video,
            Self::ResultAudioUrl => RenderKind::Audio,
        }
    }

    pub fn direction(&self) -> SlotDirection {
        match self {
            Self::Prompt | Self::PromptImage => SlotDirection::Input,
            _ => SlotDirection::Output,
        }
    }
}

impl fmt::Display for FieldSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display language. Only English and Georgian carry label tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Language {
    #[default]
    En,
    Ka,
}

impl Language {
    /// Parse a language tag such as `ka` or `ka-GE`. Anything unrecognized is English.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase();
        if tag == "ka" || tag.starts_with("ka-") {
            Self::Ka
        } else {
            Self::En
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ka => "ka",
        }
    }
}

impl From<String> for Language {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}
