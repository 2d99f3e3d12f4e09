//! The fixed-schema row handed to the predictor.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::FeatureValue;

/// One named column of a [`FeatureRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSlot {
    pub name: &'static str,
    pub value: FeatureValue,
}

/// A fully populated feature row in schema order.
///
/// Only the assembler builds records; once built they are read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRecord {
    slots: Vec<FeatureSlot>,
}

impl FeatureRecord {
    pub(crate) fn from_slots(slots: Vec<FeatureSlot>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[FeatureSlot] {
        &self.slots
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.iter().map(|slot| slot.name)
    }

    pub fn get(&self, name: &str) -> Option<FeatureValue> {
        self.slots
            .iter()
            .find(|slot| slot.name == name)
            .map(|slot| slot.value)
    }
}

/// Serializes as a JSON object whose keys keep schema order.
impl Serialize for FeatureRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for slot in &self.slots {
            map.serialize_entry(slot.name, &slot.value)?;
        }
        map.end()
    }
}
