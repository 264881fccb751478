//! Observable tool-type selection for the admin edit form.
//!
//! The form holds a [`TypeSelection`]; every view that depends on the type
//! subscribes and receives the new [`FieldVisibility`] whenever it changes.

use crate::resolver::{form_label, FieldSlot, Language, ToolType, VisibleSlots};
use serde::Serialize;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldState {
    pub slot: FieldSlot,
    pub visible: bool,
    pub label: &'static str,
}

/// Visibility and label of every form slot for one tool type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldVisibility {
    pub tool_type: ToolType,
    pub fields: Vec<FieldState>,
    /// Whether the inline examples editor is shown.
    pub examples_section: bool,
}

impl FieldVisibility {
    pub fn for_type(tool_type: ToolType, language: Language) -> Self {
        let visible = VisibleSlots::for_type(tool_type);
        let fields = FieldSlot::ALL
            .into_iter()
            .map(|slot| FieldState {
                slot,
                visible: visible.contains(slot),
                label: form_label(tool_type, slot, language),
            })
            .collect();

        Self {
            tool_type,
            fields,
            examples_section: tool_type.supports_examples(),
        }
    }

    pub fn is_visible(&self, slot: FieldSlot) -> bool {
        self.fields
            .iter()
            .any(|field| field.slot == slot && field.visible)
    }

    pub fn visible(&self) -> impl Iterator<Item = FieldSlot> + '_ {
        self.fields
            .iter()
            .filter(|field| field.visible)
            .map(|field| field.slot)
    }

    pub fn hidden(&self) -> impl Iterator<Item = FieldSlot> + '_ {
        self.fields
            .iter()
            .filter(|field| !field.visible)
            .map(|field| field.slot)
    }
}

/// The currently selected tool type. Single writer, any number of watchers.
pub struct TypeSelection {
    sender: watch::Sender<ToolType>,
    language: Language,
}

impl TypeSelection {
    pub fn new(raw_type: &str) -> Self {
        let (sender, _) = watch::channel(ToolType::parse(raw_type));
        Self {
            sender,
            language: Language::En,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Select a new type. Returns `true` only if the normalized type changed;
    /// watchers are notified only in that case.
    pub fn select(&self, raw_type: &str) -> bool {
        let next = ToolType::parse(raw_type);
        self.sender.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        })
    }

    pub fn current(&self) -> ToolType {
        *self.sender.borrow()
    }

    pub fn visibility(&self) -> FieldVisibility {
        FieldVisibility::for_type(self.current(), self.language)
    }

    pub fn subscribe(&self) -> SelectionWatcher {
        SelectionWatcher {
            receiver: self.sender.subscribe(),
            language: self.language,
        }
    }
}

pub struct SelectionWatcher {
    receiver: watch::Receiver<ToolType>,
    language: Language,
}

impl SelectionWatcher {
    /// Wait for the next change. `None` once the selection has been dropped.
    pub async fn changed(&mut self) -> Option<FieldVisibility> {
        self.receiver.changed().await.ok()?;
        let tool_type = *self.receiver.borrow_and_update();
        Some(FieldVisibility::for_type(tool_type, self.language))
    }

    pub fn visibility(&self) -> FieldVisibility {
        FieldVisibility::for_type(*self.receiver.borrow(), self.language)
    }
}
