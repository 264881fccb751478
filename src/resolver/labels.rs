//! Static label tables.
//!
//! Lookups walk `(type, slot, language)` → `(type, slot, en)` → generic slot
//! label, so every resolution yields a non-empty string.

use super::types::{FieldSlot, Language, ToolType};

type LabelEntry = (ToolType, FieldSlot, Language, &'static str);

/// A sparse `(type, slot, language)` table with the fallback chain applied on lookup.
pub struct LabelTable {
    entries: &'static [LabelEntry],
}

impl LabelTable {
    const fn new(entries: &'static [LabelEntry]) -> Self {
        Self { entries }
    }

    fn find(&self, tool_type: ToolType, slot: FieldSlot, language: Language) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(t, s, l, _)| *t == tool_type && *s == slot && *l == language)
            .map(|(_, _, _, text)| *text)
            .filter(|text| !text.trim().is_empty())
    }

    pub fn resolve(&self, tool_type: ToolType, slot: FieldSlot, language: Language) -> &'static str {
        self.find(tool_type, slot, language)
            .or_else(|| self.find(tool_type, slot, Language::En))
            .unwrap_or_else(|| generic_label(slot, language))
    }
}

use FieldSlot::*;
use Language::{En, Ka};
use ToolType::*;

/// Labels shown on the public demo panel.
pub static DEMO_LABELS: LabelTable = LabelTable::new(&[
    (TextToText, Prompt, En, "Input Prompt"),
    (TextToText, Prompt, Ka, "შეყვანის მოთხოვნა"),
    (TextToText, ResultText, En, "Output Result"),
    (TextToText, ResultText, Ka, "მიღებული შედეგი"),
    (TextToImage, Prompt, En, "Text Prompt"),
    (TextToImage, Prompt, Ka, "ტექსტური მოთხოვნა"),
    (TextToImage, ResultImage, En, "Generated Image"),
    (TextToImage, ResultImage, Ka, "გენერირებული სურათი"),
    (TextToVideo, Prompt, En, "Text Prompt"),
    (TextToVideo, Prompt, Ka, "ტექსტური მოთხოვნა"),
    (TextToVideo, ResultVideoUrl, En, "Generated Video"),
    (TextToVideo, ResultVideoUrl, Ka, "გენერირებული ვიდეო"),
    (TextToAudio, Prompt, En, "Text Prompt"),
    (TextToAudio, Prompt, Ka, "ტექსტური მოთხოვნა"),
    (TextToAudio, ResultAudioUrl, En, "Generated Audio"),
    (TextToAudio, ResultAudioUrl, Ka, "გენერირებული აუდიო"),
    (ImageToImage, PromptImage, En, "Input Image"),
    (ImageToImage, PromptImage, Ka, "შემავალი სურათი"),
    (ImageToImage, ResultImage, En, "Output Image"),
    (ImageToImage, ResultImage, Ka, "მიღებული სურათი"),
    (ImageToVideo, PromptImage, En, "Input Image"),
    (ImageToVideo, PromptImage, Ka, "შემავალი სურათი"),
    (ImageToVideo, ResultVideoUrl, En, "Generated Video"),
    (ImageToVideo, ResultVideoUrl, Ka, "გენერირებული ვიდეო"),
    (Other, Prompt, En, "Input"),
    (Other, Prompt, Ka, "შეყვანა"),
    (Other, PromptImage, En, "Input"),
    (Other, PromptImage, Ka, "შეყვანა"),
    (Other, ResultText, En, "Output"),
    (Other, ResultText, Ka, "შედეგი"),
    (Other, ResultImage, En, "Output"),
    (Other, ResultImage, Ka, "შედეგი"),
    (Other, ResultVideoUrl, En, "Output"),
    (Other, ResultVideoUrl, Ka, "შედეგი"),
    (Other, ResultAudioUrl, En, "Output"),
    (Other, ResultAudioUrl, Ka, "შედეგი"),
]);

/// Labels for the admin edit form. English only; Georgian falls through to these.
pub static FORM_LABELS: LabelTable = LabelTable::new(&[
    (TextToText, Prompt, En, "Prompt (Text)"),
    (TextToText, ResultText, En, "Output (Text)"),
    (TextToText, ResultImage, En, "Output (Visual)"),
    (TextToImage, Prompt, En, "Prompt (Text Input)"),
    (TextToImage, ResultText, En, "Output Description"),
    (TextToImage, ResultImage, En, "Generated Image"),
    (TextToVideo, Prompt, En, "Prompt (Video Description)"),
    (TextToVideo, ResultText, En, "Video Description"),
    (TextToVideo, ResultImage, En, "Video Thumbnail"),
    (TextToAudio, Prompt, En, "Prompt (Audio Description)"),
    (TextToAudio, ResultText, En, "Audio Transcript"),
    (TextToAudio, ResultImage, En, "Waveform/Preview"),
    (ImageToImage, Prompt, En, "Input Image Description"),
    (ImageToImage, ResultText, En, "Processing Notes"),
    (ImageToImage, ResultImage, En, "Output Image"),
    (Other, Prompt, En, "Input Prompt"),
    (Other, ResultText, En, "Output (Text)"),
    (Other, ResultImage, En, "Output (Image)"),
]);

/// Last-resort label for a slot, independent of tool type.
pub fn generic_label(slot: FieldSlot, language: Language) -> &'static str {
    match (slot, language) {
        (Prompt, En) => "Prompt",
        (Prompt, Ka) => "მოთხოვნა",
        (PromptImage, En) => "Image",
        (PromptImage, Ka) => "სურათი",
        (ResultText, En) => "Result",
        (ResultText, Ka) => "შედეგი",
        (ResultImage, En) => "Result Image",
        (ResultImage, Ka) => "შედეგის სურათი",
        (ResultVideoUrl, En) => "Result Video",
        (ResultVideoUrl, Ka) => "შედეგის ვიდეო",
        (ResultAudioUrl, En) => "Result Audio",
        (ResultAudioUrl, Ka) => "შედეგის აუდიო",
    }
}

/// Human-readable name of a tool type.
pub fn type_name(tool_type: ToolType, language: Language) -> &'static str {
    match (tool_type, language) {
        (TextToText, En) => "Text to Text",
        (TextToText, Ka) => "ტექსტიდან ტექსტში",
        (TextToImage, En) => "Text to Image",
        (TextToImage, Ka) => "ტექსტიდან სურათში",
        (TextToVideo, En) => "Text to Video",
        (TextToVideo, Ka) => "ტექსტიდან ვიდეოში",
        (TextToAudio, En) => "Text to Audio",
        (TextToAudio, Ka) => "ტექსტიდან აუდიოში",
        (ImageToImage, En) => "Image to Image",
        (ImageToImage, Ka) => "სურათიდან სურათში",
        (ImageToVideo, En) => "Image to Video",
        (ImageToVideo, Ka) => "სურათიდან ვიდეოში",
        (Other, En) => "AI Tool",
        (Other, Ka) => "AI ხელსაწყო",
    }
}

/// One-line description shown under the demo heading.
pub fn type_description(tool_type: ToolType, language: Language) -> &'static str {
    match (tool_type, language) {
        (TextToText, En) => "Text input and text output",
        (TextToText, Ka) => "ტექსტური შეყვანა და ტექსტური შედეგი",
        (TextToImage, En) => "Text input produces image output",
        (TextToImage, Ka) => "ტექსტური შეყვანა ქმნის სურათს",
        (TextToVideo, En) => "Text input produces video output",
        (TextToVideo, Ka) => "ტექსტური შეყვანა ქმნის ვიდეოს",
        (TextToAudio, En) => "Text input produces audio output",
        (TextToAudio, Ka) => "ტექსტური შეყვანა ქმნის აუდიოს",
        (ImageToImage, En) => "Image input produces transformed image",
        (ImageToImage, Ka) => "შემავალი სურათი გარდაიქმნება ახალ სურათად",
        (ImageToVideo, En) => "Image input produces video output",
        (ImageToVideo, Ka) => "შემავალი სურათი ქმნის ვიდეოს",
        (Other, En) => "Interactive demo",
        (Other, Ka) => "ინტერაქტიული დემო",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_entry_wins() {
        assert_eq!(DEMO_LABELS.resolve(TextToImage, ResultImage, Ka), "გენერირებული სურათი");
        assert_eq!(DEMO_LABELS.resolve(TextToImage, ResultImage, En), "Generated Image");
    }

    #[test]
    fn test_missing_language_falls_back_to_english() {
        assert_eq!(FORM_LABELS.resolve(TextToAudio, ResultText, Ka), "Audio Transcript");
    }

    #[test]
    fn test_missing_pair_falls_back_to_generic() {
        assert_eq!(DEMO_LABELS.resolve(TextToText, ResultVideoUrl, En), "Result Video");
        assert_eq!(DEMO_LABELS.resolve(TextToText, ResultVideoUrl, Ka), "შედეგის ვიდეო");
        assert_eq!(FORM_LABELS.resolve(ImageToVideo, PromptImage, En), "Image");
    }

    #[test]
    fn test_every_lookup_is_non_empty() {
        for table in [&DEMO_LABELS, &FORM_LABELS] {
            for tool_type in ToolType::ALL {
                for slot in FieldSlot::ALL {
                    for language in [En, Ka] {
                        assert!(!table.resolve(tool_type, slot, language).is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn test_type_names_cover_both_languages() {
        for tool_type in ToolType::ALL {
            assert!(!type_name(tool_type, En).is_empty());
            assert!(!type_name(tool_type, Ka).is_empty());
            assert!(!type_description(tool_type, Ka).is_empty());
        }
        assert_eq!(type_name(Other, En), "AI Tool");
    }
}
