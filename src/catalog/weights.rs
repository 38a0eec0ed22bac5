//! Relative importance of slots, used to rank them against partition areas

use crate::io::configuration::DEFAULT_SLOT_WEIGHT;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lookup from slot identifier to a positive weight
///
/// Slots missing from the table weigh [`DEFAULT_SLOT_WEIGHT`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotWeights {
    weights: HashMap<String, f64>,
}

impl SlotWeights {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight of a slot, replacing any previous value
    pub fn insert(&mut self, slot: impl Into<String>, weight: f64) {
        self.weights.insert(slot.into(), weight);
    }

    /// Weight of a slot, falling back to the default for unlisted slots
    pub fn weight_of(&self, slot: &str) -> f64 {
        self.weights
            .get(slot)
            .copied()
            .unwrap_or(DEFAULT_SLOT_WEIGHT)
    }

    /// Number of listed slots
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether no slot is listed
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate over listed slots and their weights in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(slot, &weight)| (slot.as_str(), weight))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for SlotWeights {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            weights: iter
                .into_iter()
                .map(|(slot, weight)| (slot.into(), weight))
                .collect(),
        }
    }
}
