use std::fmt;

use crate::model::session::SelectionOutcome;

/// Status line shown after a press while the level is still running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionFeedback {
    Correct,
    Incorrect,
}

impl SelectionFeedback {
    /// Picks the status text for a press.
    ///
    /// Nothing is shown once the level is completed after the press, which
    /// includes the press that completes it and every ignored press.
    #[must_use]
    pub fn for_press(outcome: SelectionOutcome, level_completed: bool) -> Option<Self> {
        if level_completed {
            return None;
        }
        match outcome {
            SelectionOutcome::Correct { .. } | SelectionOutcome::LevelCompleted => {
                Some(Self::Correct)
            }
            SelectionOutcome::Incorrect { .. } => Some(Self::Incorrect),
            SelectionOutcome::Ignored => None,
        }
    }

    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            SelectionFeedback::Correct => "Richtig",
            SelectionFeedback::Incorrect => "Falsch",
        }
    }
}

impl fmt::Display for SelectionFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SensoButtonId;

    #[test]
    fn running_level_shows_literal_texts() {
        let correct =
            SelectionFeedback::for_press(SelectionOutcome::Correct { progress: 1 }, false);
        assert_eq!(correct.map(SelectionFeedback::text), Some("Richtig"));

        let wrong = SelectionFeedback::for_press(
            SelectionOutcome::Incorrect {
                expected: SensoButtonId::TopLeft,
            },
            false,
        );
        assert_eq!(wrong.map(SelectionFeedback::text), Some("Falsch"));
    }

    #[test]
    fn completed_level_shows_nothing() {
        assert_eq!(
            SelectionFeedback::for_press(SelectionOutcome::LevelCompleted, true),
            None
        );
        assert_eq!(SelectionFeedback::for_press(SelectionOutcome::Ignored, true), None);
        assert_eq!(SelectionFeedback::for_press(SelectionOutcome::Ignored, false), None);
    }
}
