use super::types::FieldSlot;
use serde::Serialize;
use std::collections::BTreeMap;

/// Raw field values keyed by canonical slot.
///
/// Callers project whatever record shape they hold into this map before
/// asking the resolver anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SlotValues(BTreeMap<FieldSlot, String>);

impl SlotValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, slot: FieldSlot, value: impl Into<String>) -> Option<String> {
        self.0.insert(slot, value.into())
    }

    pub fn get(&self, slot: FieldSlot) -> Option<&str> {
        self.0.get(&slot).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(FieldSlot, S)> for SlotValues {
    fn from_iter<I: IntoIterator<Item = (FieldSlot, S)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(slot, value)| (slot, value.into()))
                .collect(),
        )
    }
}
