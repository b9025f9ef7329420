use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameSettingsError {
    #[error("initial sequence length must be > 0")]
    InvalidInitialLength,

    #[error("length step must be > 0")]
    InvalidLengthStep,

    #[error("sequence length {length} exceeds the limit of {limit}")]
    LengthTooLarge { length: u32, limit: u32 },

    #[error("maximum length ({max}) must be >= initial length ({initial})")]
    InvalidLengthBounds { initial: u32, max: u32 },

    #[error("flash duration must be between 50 and 5000 ms")]
    InvalidFlashMs,

    #[error("pause duration must be between 50 and 5000 ms")]
    InvalidPauseMs,
}

//
// ─── POLICIES ──────────────────────────────────────────────────────────────────
//

/// What an incorrect press does to the player's progress in the current level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MistakePolicy {
    /// Start reproducing the same sequence from its first button.
    #[default]
    #[serde(alias = "reset")]
    ResetProgress,
    /// Keep the progress; the player retries the expected button.
    #[serde(alias = "keep")]
    KeepProgress,
}

/// How the next level's sequence is derived from the current one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SequenceEscalation {
    /// Append one random button to the current sequence.
    #[default]
    Extend,
    /// Draw a completely new sequence of the next length.
    Regenerate,
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

const TIMING_RANGE_MS: std::ops::RangeInclusive<u32> = 50..=5000;

/// Longest sequence a game may ask for.
pub const MAX_SEQUENCE_LENGTH: u32 = 100;

/// Validated game configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSettings {
    initial_length: u32,
    length_step: u32,
    max_length: u32,
    mistake_policy: MistakePolicy,
    max_mistakes: Option<u32>,
    escalation: SequenceEscalation,
    flash_ms: u32,
    pause_ms: u32,
}

impl Default for GameSettings {
    /// Classic rules: start with one button, add one per level, win at 31.
    fn default() -> Self {
        Self {
            initial_length: 1,
            length_step: 1,
            max_length: 31,
            mistake_policy: MistakePolicy::ResetProgress,
            max_mistakes: None,
            escalation: SequenceEscalation::Extend,
            flash_ms: 600,
            pause_ms: 250,
        }
    }
}

impl GameSettings {
    #[must_use]
    pub fn initial_length(&self) -> u32 {
        self.initial_length
    }

    #[must_use]
    pub fn length_step(&self) -> u32 {
        self.length_step
    }

    #[must_use]
    pub fn max_length(&self) -> u32 {
        self.max_length
    }

    #[must_use]
    pub fn mistake_policy(&self) -> MistakePolicy {
        self.mistake_policy
    }

    #[must_use]
    pub fn max_mistakes(&self) -> Option<u32> {
        self.max_mistakes
    }

    #[must_use]
    pub fn escalation(&self) -> SequenceEscalation {
        self.escalation
    }

    #[must_use]
    pub fn flash_ms(&self) -> u32 {
        self.flash_ms
    }

    #[must_use]
    pub fn pause_ms(&self) -> u32 {
        self.pause_ms
    }

    /// Sequence length for a 1-based level number, capped at `max_length`.
    #[must_use]
    pub fn length_for_level(&self, level: u32) -> u32 {
        let steps = level.saturating_sub(1);
        self.initial_length
            .saturating_add(steps.saturating_mul(self.length_step))
            .min(self.max_length)
    }
}

/// Unvalidated settings, e.g. read from a config file. Missing fields fall back
/// to `GameSettings::default()`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameSettingsDraft {
    pub initial_length: Option<u32>,
    pub length_step: Option<u32>,
    pub max_length: Option<u32>,
    pub mistake_policy: Option<MistakePolicy>,
    pub max_mistakes: Option<u32>,
    pub escalation: Option<SequenceEscalation>,
    pub flash_ms: Option<u32>,
    pub pause_ms: Option<u32>,
}

impl GameSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlays every field set in `other` on top of `self`.
    #[must_use]
    pub fn merged_with(self, other: GameSettingsDraft) -> Self {
        Self {
            initial_length: other.initial_length.or(self.initial_length),
            length_step: other.length_step.or(self.length_step),
            max_length: other.max_length.or(self.max_length),
            mistake_policy: other.mistake_policy.or(self.mistake_policy),
            max_mistakes: other.max_mistakes.or(self.max_mistakes),
            escalation: other.escalation.or(self.escalation),
            flash_ms: other.flash_ms.or(self.flash_ms),
            pause_ms: other.pause_ms.or(self.pause_ms),
        }
    }

    /// Validate the draft into settings.
    ///
    /// # Errors
    ///
    /// Returns `GameSettingsError` for the first rule the draft violates.
    pub fn validate(self) -> Result<GameSettings, GameSettingsError> {
        let defaults = GameSettings::default();
        let initial_length = self.initial_length.unwrap_or(defaults.initial_length);
        let length_step = self.length_step.unwrap_or(defaults.length_step);
        let max_length = self
            .max_length
            .unwrap_or_else(|| defaults.max_length.max(initial_length));
        let flash_ms = self.flash_ms.unwrap_or(defaults.flash_ms);
        let pause_ms = self.pause_ms.unwrap_or(defaults.pause_ms);

        if initial_length == 0 {
            return Err(GameSettingsError::InvalidInitialLength);
        }
        if let Some(length) = [initial_length, max_length]
            .into_iter()
            .find(|length| *length > MAX_SEQUENCE_LENGTH)
        {
            return Err(GameSettingsError::LengthTooLarge {
                length,
                limit: MAX_SEQUENCE_LENGTH,
            });
        }
        if length_step == 0 {
            return Err(GameSettingsError::InvalidLengthStep);
        }
        if max_length < initial_length {
            return Err(GameSettingsError::InvalidLengthBounds {
                initial: initial_length,
                max: max_length,
            });
        }
        if !TIMING_RANGE_MS.contains(&flash_ms) {
            return Err(GameSettingsError::InvalidFlashMs);
        }
        if !TIMING_RANGE_MS.contains(&pause_ms) {
            return Err(GameSettingsError::InvalidPauseMs);
        }

        Ok(GameSettings {
            initial_length,
            length_step,
            max_length,
            mistake_policy: self.mistake_policy.unwrap_or(defaults.mistake_policy),
            max_mistakes: self.max_mistakes,
            escalation: self.escalation.unwrap_or(defaults.escalation),
            flash_ms,
            pause_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_validates_to_defaults() {
        assert_eq!(GameSettingsDraft::new().validate(), Ok(GameSettings::default()));
    }

    #[test]
    fn rejects_zero_lengths_and_inverted_bounds() {
        let zero = GameSettingsDraft {
            initial_length: Some(0),
            ..GameSettingsDraft::default()
        };
        assert_eq!(zero.validate(), Err(GameSettingsError::InvalidInitialLength));

        let step = GameSettingsDraft {
            length_step: Some(0),
            ..GameSettingsDraft::default()
        };
        assert_eq!(step.validate(), Err(GameSettingsError::InvalidLengthStep));

        let bounds = GameSettingsDraft {
            initial_length: Some(5),
            max_length: Some(4),
            ..GameSettingsDraft::default()
        };
        assert_eq!(
            bounds.validate(),
            Err(GameSettingsError::InvalidLengthBounds { initial: 5, max: 4 })
        );
    }

    #[test]
    fn rejects_lengths_above_the_ceiling() {
        let initial = GameSettingsDraft {
            initial_length: Some(4_000_000_000),
            ..GameSettingsDraft::default()
        };
        assert_eq!(
            initial.validate(),
            Err(GameSettingsError::LengthTooLarge {
                length: 4_000_000_000,
                limit: MAX_SEQUENCE_LENGTH,
            })
        );

        let max = GameSettingsDraft {
            max_length: Some(MAX_SEQUENCE_LENGTH + 1),
            ..GameSettingsDraft::default()
        };
        assert!(matches!(
            max.validate(),
            Err(GameSettingsError::LengthTooLarge { .. })
        ));

        let at_limit = GameSettingsDraft {
            initial_length: Some(MAX_SEQUENCE_LENGTH),
            ..GameSettingsDraft::default()
        };
        assert_eq!(at_limit.validate().unwrap().max_length(), MAX_SEQUENCE_LENGTH);
    }

    #[test]
    fn rejects_out_of_range_timing() {
        let draft = GameSettingsDraft {
            flash_ms: Some(10),
            ..GameSettingsDraft::default()
        };
        assert_eq!(draft.validate(), Err(GameSettingsError::InvalidFlashMs));

        let draft = GameSettingsDraft {
            pause_ms: Some(6000),
            ..GameSettingsDraft::default()
        };
        assert_eq!(draft.validate(), Err(GameSettingsError::InvalidPauseMs));
    }

    #[test]
    fn large_initial_length_lifts_default_max() {
        let draft = GameSettingsDraft {
            initial_length: Some(40),
            ..GameSettingsDraft::default()
        };
        let settings = draft.validate().unwrap();
        assert_eq!(settings.max_length(), 40);
    }

    #[test]
    fn level_length_escalates_and_caps() {
        let settings = GameSettingsDraft {
            initial_length: Some(3),
            length_step: Some(2),
            max_length: Some(8),
            ..GameSettingsDraft::default()
        }
        .validate()
        .unwrap();

        assert_eq!(settings.length_for_level(1), 3);
        assert_eq!(settings.length_for_level(2), 5);
        assert_eq!(settings.length_for_level(3), 7);
        assert_eq!(settings.length_for_level(4), 8);
        assert_eq!(settings.length_for_level(0), 3);
    }

    #[test]
    fn merge_prefers_later_fields() {
        let file = GameSettingsDraft {
            initial_length: Some(2),
            max_length: Some(10),
            ..GameSettingsDraft::default()
        };
        let cli = GameSettingsDraft {
            max_length: Some(12),
            mistake_policy: Some(MistakePolicy::KeepProgress),
            ..GameSettingsDraft::default()
        };
        let merged = file.merged_with(cli).validate().unwrap();

        assert_eq!(merged.initial_length(), 2);
        assert_eq!(merged.max_length(), 12);
        assert_eq!(merged.mistake_policy(), MistakePolicy::KeepProgress);
    }
}
