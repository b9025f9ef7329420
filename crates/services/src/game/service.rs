use chrono::{DateTime, Utc};
use senso_core::Clock;
use senso_core::model::{
    GameOutcome, GameSession, GameSettings, GameSummary, SelectionFeedback, SelectionOutcome,
    SensoButtonId, SequenceEscalation, TargetSequence,
};

use crate::error::GameError;
use crate::sequence::SequenceGenerator;

use super::press::{GameStatus, PressResult};
use super::progress::GameProgress;

//
// ─── GAME ──────────────────────────────────────────────────────────────────────
//

/// Runs a Senso game level by level.
///
/// Owns the single live `GameSession`. Advancing replaces the session with a new
/// one for a longer sequence instead of mutating the finished one.
#[derive(Debug, Clone)]
pub struct GameService {
    clock: Clock,
    settings: GameSettings,
    generator: SequenceGenerator,
    session: GameSession,
    status: GameStatus,
    level: u32,
    levels_completed: u32,
    longest_sequence: u32,
    total_presses: u32,
    mistakes: u32,
    started_at: Option<DateTime<Utc>>,
    summary: Option<GameSummary>,
}

impl GameService {
    #[must_use]
    pub fn new(settings: GameSettings, generator: SequenceGenerator) -> Self {
        let session = GameSession::new(settings.mistake_policy());
        Self {
            clock: Clock::default(),
            settings,
            generator,
            session,
            status: GameStatus::NotStarted,
            level: 0,
            levels_completed: 0,
            longest_sequence: 0,
            total_presses: 0,
            mistakes: 0,
            started_at: None,
            summary: None,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// 1-based level number; 0 before the first game starts.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Mistakes across the whole game.
    #[must_use]
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    #[must_use]
    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn current_sequence(&self) -> Option<&TargetSequence> {
        self.session.target_sequence()
    }

    #[must_use]
    pub fn progress(&self) -> GameProgress {
        let level = self.session.progress();
        GameProgress {
            level: self.level,
            sequence_length: level.total,
            entered: level.entered,
            remaining: level.remaining,
            mistakes: self.mistakes,
            status: self.status,
        }
    }

    /// Starts a new game at level 1, discarding any previous one.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sequence` if no sequence can be generated.
    pub fn start_game(&mut self) -> Result<&TargetSequence, GameError> {
        let len = self.length_for(1);
        let sequence = self.generator.fresh(len)?;

        self.level = 1;
        self.levels_completed = 0;
        self.longest_sequence = 0;
        self.total_presses = 0;
        self.mistakes = 0;
        self.started_at = Some(self.clock.now());
        self.summary = None;
        self.status = GameStatus::Playing;
        self.session = GameSession::for_level(sequence, self.settings.mistake_policy());

        tracing::info!(
            seed = ?self.generator.seed(),
            length = len,
            "senso game started"
        );
        self.expect_sequence()
    }

    /// Feeds one press into the current level.
    ///
    /// Presses after the level is completed are ignored and reported with
    /// `SelectionOutcome::Ignored`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotStarted` before `start_game` and
    /// `GameError::Finished` once the game is won, lost or abandoned.
    pub fn press(&mut self, id: SensoButtonId) -> Result<PressResult, GameError> {
        self.ensure_running()?;

        let outcome = self.session.select(id);
        match outcome {
            SelectionOutcome::Ignored => {}
            SelectionOutcome::Correct { progress } => {
                self.total_presses = self.total_presses.saturating_add(1);
                tracing::debug!(button = %id, progress, "correct press");
            }
            SelectionOutcome::Incorrect { expected } => {
                self.total_presses = self.total_presses.saturating_add(1);
                self.mistakes = self.mistakes.saturating_add(1);
                tracing::debug!(
                    button = %id,
                    %expected,
                    mistakes = self.mistakes,
                    "incorrect press"
                );
                if self
                    .settings
                    .max_mistakes()
                    .is_some_and(|allowed| self.mistakes > allowed)
                {
                    self.finish(GameOutcome::Lost)?;
                }
            }
            SelectionOutcome::LevelCompleted => {
                self.total_presses = self.total_presses.saturating_add(1);
                self.complete_level()?;
            }
        }

        let level_completed = self.session.is_level_completed();
        Ok(PressResult {
            outcome,
            feedback: SelectionFeedback::for_press(outcome, level_completed),
            level_completed,
            status: self.status,
        })
    }

    /// Replaces the completed level's session with the next, longer one.
    ///
    /// # Errors
    ///
    /// Returns `GameError::LevelInProgress` while the current level is open,
    /// `GameError::NotStarted` / `GameError::Finished` outside a running game.
    pub fn advance_level(&mut self) -> Result<&TargetSequence, GameError> {
        match self.status {
            GameStatus::LevelCompleted => {}
            GameStatus::Playing => return Err(GameError::LevelInProgress),
            GameStatus::NotStarted => return Err(GameError::NotStarted),
            GameStatus::Won | GameStatus::Lost | GameStatus::Abandoned => {
                return Err(GameError::Finished);
            }
        }

        let next_level = self.level.saturating_add(1);
        let len = self.length_for(next_level);
        let sequence = match (self.settings.escalation(), self.session.target_sequence()) {
            (SequenceEscalation::Extend, Some(current)) => {
                let mut sequence = current.clone();
                while sequence.len() < len {
                    sequence = self.generator.extend(&sequence);
                }
                sequence
            }
            _ => self.generator.fresh(len)?,
        };

        self.level = next_level;
        self.status = GameStatus::Playing;
        self.session = GameSession::for_level(sequence, self.settings.mistake_policy());

        tracing::info!(level = self.level, length = len, "senso level started");
        self.expect_sequence()
    }

    /// Replays the current sequence from its first button.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotStarted` / `GameError::Finished` outside a running game.
    pub fn restart_level(&mut self) -> Result<&TargetSequence, GameError> {
        self.ensure_running()?;
        let sequence = self.expect_sequence()?.clone();
        self.session.start_level(sequence);
        self.status = GameStatus::Playing;
        tracing::debug!(level = self.level, "senso level restarted");
        self.expect_sequence()
    }

    /// Ends the running game early.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotStarted` / `GameError::Finished` outside a running game.
    pub fn abandon(&mut self) -> Result<&GameSummary, GameError> {
        self.ensure_running()?;
        self.finish(GameOutcome::Abandoned)?;
        self.summary.as_ref().ok_or(GameError::NotStarted)
    }

    fn complete_level(&mut self) -> Result<(), GameError> {
        let len = self.session.progress().total;
        let len = u32::try_from(len).unwrap_or(u32::MAX);
        self.levels_completed = self.level;
        self.longest_sequence = self.longest_sequence.max(len);

        if len >= self.settings.max_length() {
            return self.finish(GameOutcome::Won);
        }

        self.status = GameStatus::LevelCompleted;
        tracing::info!(level = self.level, length = len, "senso level completed");
        Ok(())
    }

    fn finish(&mut self, outcome: GameOutcome) -> Result<(), GameError> {
        let now = self.clock.now();
        let started_at = self.started_at.unwrap_or(now);
        // A wall clock stepping backwards must not leave the game unfinishable.
        let finished_at = now.max(started_at);
        let summary = GameSummary::new(
            started_at,
            finished_at,
            outcome,
            self.levels_completed,
            self.longest_sequence,
            self.total_presses,
            self.mistakes,
        )?;

        self.status = match outcome {
            GameOutcome::Won => GameStatus::Won,
            GameOutcome::Lost => GameStatus::Lost,
            GameOutcome::Abandoned => GameStatus::Abandoned,
        };
        tracing::info!(
            ?outcome,
            levels = self.levels_completed,
            mistakes = self.mistakes,
            "senso game finished"
        );
        self.summary = Some(summary);
        Ok(())
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::NotStarted => Err(GameError::NotStarted),
            status if status.is_finished() => Err(GameError::Finished),
            _ => Ok(()),
        }
    }

    fn expect_sequence(&self) -> Result<&TargetSequence, GameError> {
        self.session.target_sequence().ok_or(GameError::NotStarted)
    }

    fn length_for(&self, level: u32) -> usize {
        usize::try_from(self.settings.length_for_level(level)).unwrap_or(usize::MAX)
    }
}
