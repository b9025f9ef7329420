use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameSummaryError {
    #[error("finished_at is before started_at")]
    InvalidTimeRange,

    #[error("longest sequence ({longest}) is shorter than levels completed ({levels})")]
    InconsistentLevels { levels: u32, longest: u32 },
}

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    /// Completed a level of the maximum length.
    Won,
    /// Exceeded the allowed number of mistakes.
    Lost,
    /// Stopped by the player.
    Abandoned,
}

/// Aggregate of one finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
    outcome: GameOutcome,
    levels_completed: u32,
    longest_sequence: u32,
    total_presses: u32,
    mistakes: u32,
}

impl GameSummary {
    /// # Errors
    ///
    /// Returns `GameSummaryError::InvalidTimeRange` if `finished_at` is before `started_at`.
    /// Returns `GameSummaryError::InconsistentLevels` if more levels were completed than
    /// the longest completed sequence allows (every level adds at least one button).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        outcome: GameOutcome,
        levels_completed: u32,
        longest_sequence: u32,
        total_presses: u32,
        mistakes: u32,
    ) -> Result<Self, GameSummaryError> {
        if finished_at < started_at {
            return Err(GameSummaryError::InvalidTimeRange);
        }
        if longest_sequence < levels_completed {
            return Err(GameSummaryError::InconsistentLevels {
                levels: levels_completed,
                longest: longest_sequence,
            });
        }

        Ok(Self {
            started_at,
            finished_at,
            outcome,
            levels_completed,
            longest_sequence,
            total_presses,
            mistakes,
        })
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    #[must_use]
    pub fn levels_completed(&self) -> u32 {
        self.levels_completed
    }

    /// Length of the longest sequence reproduced in full.
    #[must_use]
    pub fn longest_sequence(&self) -> u32 {
        self.longest_sequence
    }

    #[must_use]
    pub fn total_presses(&self) -> u32 {
        self.total_presses
    }

    #[must_use]
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    #[must_use]
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}
