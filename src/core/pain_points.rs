use crate::models::PainPointKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Multi-select set of pain point tags
///
/// Backed by an ordered set so iteration and serialization always follow the
/// vocabulary order, regardless of the order keys were toggled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PainPointSet {
    keys: BTreeSet<PainPointKey>,
}

impl PainPointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `key` if present, otherwise insert it.
    ///
    /// Returns whether the key is selected after the call.
    pub fn toggle(&mut self, key: PainPointKey) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    pub fn contains(&self, key: PainPointKey) -> bool {
        self.keys.contains(&key)
    }

    /// Selected keys in vocabulary order
    pub fn to_array(&self) -> Vec<PainPointKey> {
        self.keys.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<PainPointKey> for PainPointSet {
    fn from_iter<I: IntoIterator<Item = PainPointKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}
