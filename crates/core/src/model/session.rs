use crate::model::ids::SensoButtonId;
use crate::model::sequence::TargetSequence;
use crate::model::settings::MistakePolicy;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Result of a single press against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Matched the expected button; `progress` presses of the level are done.
    Correct { progress: usize },
    /// Matched the last expected button; the level is now complete.
    LevelCompleted,
    /// Did not match `expected`.
    Incorrect { expected: SensoButtonId },
    /// Input arrived while no input is accepted (level completed or not started).
    Ignored,
}

impl SelectionOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(
            self,
            SelectionOutcome::Correct { .. } | SelectionOutcome::LevelCompleted
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No level has been started yet.
    Idle,
    AwaitingInput,
    LevelCompleted,
}

/// Snapshot of level progress for views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub total: usize,
    pub entered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Live state of one level: the target sequence and how far the player got.
///
/// Invariants:
/// - `progress <= target.len()`
/// - the phase is `LevelCompleted` exactly when `progress == target.len()`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    target: Option<TargetSequence>,
    progress: usize,
    phase: SessionPhase,
    mistake_policy: MistakePolicy,
    mistakes: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(MistakePolicy::default())
    }
}

impl GameSession {
    /// Creates an idle session; call `start_level` before accepting input.
    #[must_use]
    pub fn new(mistake_policy: MistakePolicy) -> Self {
        Self {
            target: None,
            progress: 0,
            phase: SessionPhase::Idle,
            mistake_policy,
            mistakes: 0,
        }
    }

    /// Creates a session that is already awaiting input for `sequence`.
    #[must_use]
    pub fn for_level(sequence: TargetSequence, mistake_policy: MistakePolicy) -> Self {
        let mut session = Self::new(mistake_policy);
        session.start_level(sequence);
        session
    }

    /// Stores `sequence` and resets progress, regardless of the previous state.
    pub fn start_level(&mut self, sequence: TargetSequence) {
        self.target = Some(sequence);
        self.progress = 0;
        self.mistakes = 0;
        self.phase = SessionPhase::AwaitingInput;
    }

    /// Returns `true` iff `id` is the expected button and the level is still open.
    ///
    /// A correct press advances the progress; an incorrect one applies the
    /// mistake policy. Once the level is complete this returns `false` and
    /// leaves the session untouched.
    pub fn is_correct_selection(&mut self, id: SensoButtonId) -> bool {
        self.select(id).is_correct()
    }

    /// Applies a press and reports what happened.
    pub fn select(&mut self, id: SensoButtonId) -> SelectionOutcome {
        let expected = match self.phase {
            SessionPhase::LevelCompleted => return SelectionOutcome::Ignored,
            SessionPhase::Idle => {
                debug_assert!(false, "selection on a session without a target sequence");
                tracing::warn!(button = %id, "selection ignored: no level started");
                return SelectionOutcome::Ignored;
            }
            SessionPhase::AwaitingInput => match self.current_expected_id() {
                Some(expected) => expected,
                None => return SelectionOutcome::Ignored,
            },
        };

        if id != expected {
            self.mistakes = self.mistakes.saturating_add(1);
            if self.mistake_policy == MistakePolicy::ResetProgress {
                self.progress = 0;
            }
            return SelectionOutcome::Incorrect { expected };
        }

        self.progress += 1;
        if self.progress == self.total() {
            self.phase = SessionPhase::LevelCompleted;
            SelectionOutcome::LevelCompleted
        } else {
            SelectionOutcome::Correct {
                progress: self.progress,
            }
        }
    }

    #[must_use]
    pub fn is_level_completed(&self) -> bool {
        self.phase == SessionPhase::LevelCompleted
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn player_progress(&self) -> usize {
        self.progress
    }

    /// The button the player has to press next, if any.
    #[must_use]
    pub fn current_expected_id(&self) -> Option<SensoButtonId> {
        if self.phase != SessionPhase::AwaitingInput {
            return None;
        }
        self.target.as_ref().and_then(|seq| seq.get(self.progress))
    }

    #[must_use]
    pub fn target_sequence(&self) -> Option<&TargetSequence> {
        self.target.as_ref()
    }

    #[must_use]
    pub fn mistake_policy(&self) -> MistakePolicy {
        self.mistake_policy
    }

    /// Incorrect presses since the level started.
    #[must_use]
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    #[must_use]
    pub fn progress(&self) -> LevelProgress {
        let total = self.total();
        LevelProgress {
            total,
            entered: self.progress,
            remaining: total.saturating_sub(self.progress),
            is_complete: self.is_level_completed(),
        }
    }

    fn total(&self) -> usize {
        self.target.as_ref().map_or(0, TargetSequence::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SensoButtonId::{BottomLeft, BottomRight, TopLeft, TopRight};

    fn sequence(ids: &[SensoButtonId]) -> TargetSequence {
        TargetSequence::new(ids.to_vec()).unwrap()
    }

    #[test]
    fn completes_exactly_on_last_press() {
        let ids = [TopLeft, BottomRight, TopRight, BottomLeft, TopLeft];
        let mut session = GameSession::for_level(sequence(&ids), MistakePolicy::ResetProgress);

        for (index, id) in ids.iter().enumerate() {
            assert!(!session.is_level_completed());
            assert!(session.is_correct_selection(*id));
            assert_eq!(session.player_progress(), index + 1);
        }
        assert!(session.is_level_completed());
        assert_eq!(session.phase(), SessionPhase::LevelCompleted);
        assert_eq!(session.current_expected_id(), None);
    }

    #[test]
    fn wrong_second_press_resets_three_button_level() {
        let mut session = GameSession::for_level(
            sequence(&[TopLeft, BottomRight, TopRight]),
            MistakePolicy::ResetProgress,
        );

        assert_eq!(session.select(TopLeft), SelectionOutcome::Correct { progress: 1 });
        assert!(!session.is_level_completed());

        assert_eq!(
            session.select(TopRight),
            SelectionOutcome::Incorrect {
                expected: BottomRight
            }
        );
        assert_eq!(session.player_progress(), 0);
        assert_eq!(session.mistakes(), 1);

        assert!(session.is_correct_selection(TopLeft));
        assert!(session.is_correct_selection(BottomRight));
        assert!(!session.is_level_completed());
        assert_eq!(session.select(TopRight), SelectionOutcome::LevelCompleted);
        assert!(session.is_level_completed());
    }

    #[test]
    fn keep_policy_preserves_progress_on_mistake() {
        let mut session = GameSession::for_level(
            sequence(&[TopLeft, BottomRight, TopRight]),
            MistakePolicy::KeepProgress,
        );

        assert!(session.is_correct_selection(TopLeft));
        assert!(!session.is_correct_selection(TopRight));
        assert_eq!(session.player_progress(), 1);
        assert_eq!(session.current_expected_id(), Some(BottomRight));
    }

    #[test]
    fn presses_after_completion_are_ignored_without_mutation() {
        let mut session = GameSession::for_level(sequence(&[BottomLeft]), MistakePolicy::default());
        assert!(session.is_correct_selection(BottomLeft));
        let before = session.clone();

        for id in SensoButtonId::ALL {
            assert!(!session.is_correct_selection(id));
            assert_eq!(session.select(id), SelectionOutcome::Ignored);
        }
        assert_eq!(session, before);
        assert_eq!(session.mistakes(), 0);
    }

    #[test]
    fn start_level_resets_from_any_state() {
        let mut session =
            GameSession::for_level(sequence(&[TopLeft, TopRight]), MistakePolicy::KeepProgress);
        assert!(session.is_correct_selection(TopLeft));
        assert!(!session.is_correct_selection(BottomLeft));

        session.start_level(sequence(&[BottomRight, BottomLeft, TopLeft]));
        assert_eq!(session.player_progress(), 0);
        assert_eq!(session.mistakes(), 0);
        assert!(!session.is_level_completed());
        assert_eq!(session.current_expected_id(), Some(BottomRight));

        assert!(session.is_correct_selection(BottomRight));
        assert!(session.is_correct_selection(BottomLeft));
        assert!(session.is_correct_selection(TopLeft));
        session.start_level(sequence(&[TopRight]));
        assert!(!session.is_level_completed());
        assert_eq!(session.progress().remaining, 1);
    }

    #[test]
    fn read_only_queries_do_not_mutate() {
        let session =
            GameSession::for_level(sequence(&[TopLeft, TopRight]), MistakePolicy::default());
        let before = session.clone();
        for _ in 0..3 {
            let _ = session.is_level_completed();
            let _ = session.current_expected_id();
            let _ = session.progress();
        }
        assert_eq!(session, before);
    }

    #[test]
    fn progress_snapshot_tracks_entries() {
        let mut session = GameSession::for_level(
            sequence(&[TopLeft, TopRight, BottomLeft]),
            MistakePolicy::default(),
        );
        assert!(session.is_correct_selection(TopLeft));

        assert_eq!(
            session.progress(),
            LevelProgress {
                total: 3,
                entered: 1,
                remaining: 2,
                is_complete: false,
            }
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "without a target sequence")]
    fn selecting_on_idle_session_is_a_contract_violation() {
        let mut session = GameSession::default();
        let _ = session.select(TopLeft);
    }

    #[test]
    fn idle_session_reports_no_expectation() {
        let session = GameSession::default();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.current_expected_id(), None);
        assert!(!session.is_level_completed());
        assert_eq!(session.progress().total, 0);
    }
}
