use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::SensoButtonId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SequenceError {
    #[error("target sequence cannot be empty")]
    Empty,
}

/// The ordered pattern a player must reproduce for one level.
///
/// Always holds at least one button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SensoButtonId>", into = "Vec<SensoButtonId>")]
pub struct TargetSequence(Vec<SensoButtonId>);

impl TargetSequence {
    /// # Errors
    ///
    /// Returns `SequenceError::Empty` when `ids` is empty.
    pub fn new(ids: Vec<SensoButtonId>) -> Result<Self, SequenceError> {
        if ids.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self(ids))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    // A target sequence is never empty; provided for clippy's len_without_is_empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<SensoButtonId> {
        self.0.get(index).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[SensoButtonId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = SensoButtonId> + '_ {
        self.0.iter().copied()
    }

    /// Returns a copy of this sequence with `next` appended.
    #[must_use]
    pub fn extended_with(&self, next: SensoButtonId) -> Self {
        let mut ids = self.0.clone();
        ids.push(next);
        Self(ids)
    }
}

impl TryFrom<Vec<SensoButtonId>> for TargetSequence {
    type Error = SequenceError;

    fn try_from(ids: Vec<SensoButtonId>) -> Result<Self, Self::Error> {
        Self::new(ids)
    }
}

impl From<TargetSequence> for Vec<SensoButtonId> {
    fn from(sequence: TargetSequence) -> Self {
        sequence.0
    }
}
