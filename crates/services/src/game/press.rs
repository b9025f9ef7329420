use senso_core::model::{SelectionFeedback, SelectionOutcome};

/// Lifecycle of a game across levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    /// The current level accepts input.
    Playing,
    /// The current level is done; waiting for `advance_level`.
    LevelCompleted,
    Won,
    Lost,
    Abandoned,
}

impl GameStatus {
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost | GameStatus::Abandoned)
    }

    #[must_use]
    pub fn accepts_input(self) -> bool {
        self == GameStatus::Playing
    }
}

/// Everything a view needs after a single press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressResult {
    pub outcome: SelectionOutcome,
    /// Status text to show, if any.
    pub feedback: Option<SelectionFeedback>,
    pub level_completed: bool,
    pub status: GameStatus,
}

impl PressResult {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.outcome.is_correct()
    }
}
