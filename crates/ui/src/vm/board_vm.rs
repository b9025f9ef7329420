use std::time::Duration;

use senso_core::model::{
    GameOutcome, GameSettings, SelectionFeedback, SensoButtonConfig, SensoButtonId, TargetSequence,
};
use services::{GameService, GameStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SensoButtonVm {
    pub id: SensoButtonId,
    pub dom_id: &'static str,
    pub class: String,
    pub style: String,
    pub icon: String,
    pub aria_label: String,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SensoBoardVm {
    pub buttons: Vec<SensoButtonVm>,
    /// Text of the `#subtitle` line: the last press feedback, if any.
    pub subtitle: String,
    pub status_line: String,
    pub level_label: Option<String>,
    pub can_start: bool,
    pub can_advance: bool,
    pub can_restart: bool,
}

/// Per-render inputs that live in the view, not in the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardUiState {
    pub highlighted: Option<SensoButtonId>,
    pub playing_back: bool,
    pub feedback: Option<SelectionFeedback>,
}

#[must_use]
pub fn map_board(
    game: &GameService,
    board: &[SensoButtonConfig],
    ui: BoardUiState,
) -> SensoBoardVm {
    let status = game.status();
    let input_open = status.accepts_input() && !ui.playing_back;

    let buttons = board
        .iter()
        .map(|config| map_button(config, ui.highlighted == Some(config.id), input_open))
        .collect();

    let level_label = (game.level() > 0).then(|| {
        let progress = game.progress();
        format!(
            "Level {} · {}/{}",
            progress.level, progress.entered, progress.sequence_length
        )
    });

    SensoBoardVm {
        buttons,
        subtitle: ui
            .feedback
            .map(|feedback| feedback.text().to_string())
            .unwrap_or_default(),
        status_line: status_line(game, ui.playing_back),
        level_label,
        can_start: !ui.playing_back && !matches!(status, GameStatus::Playing),
        can_advance: !ui.playing_back && status == GameStatus::LevelCompleted,
        can_restart: !ui.playing_back && matches!(status, GameStatus::Playing),
    }
}

fn map_button(config: &SensoButtonConfig, highlighted: bool, input_open: bool) -> SensoButtonVm {
    let palette = config.palette();
    let class = if highlighted {
        "senso-button clipped selected".to_string()
    } else {
        "senso-button clipped".to_string()
    };
    let style = format!(
        "--senso-color: {}; --senso-hover: {}; --senso-selected: {};",
        palette.base, palette.hover, palette.selected
    );

    SensoButtonVm {
        id: config.id,
        dom_id: config.id.dom_id(),
        class,
        style,
        icon: config.icon.clone(),
        aria_label: config.title.clone(),
        disabled: config.disabled || !input_open,
    }
}

fn status_line(game: &GameService, playing_back: bool) -> String {
    if playing_back {
        return "Merke dir die Folge".to_string();
    }
    match game.status() {
        GameStatus::NotStarted => "Drücke Start".to_string(),
        GameStatus::Playing => "Wiederhole die Folge".to_string(),
        GameStatus::LevelCompleted => format!("Level {} geschafft", game.level()),
        GameStatus::Won | GameStatus::Lost | GameStatus::Abandoned => game
            .summary()
            .map_or_else(String::new, |summary| match summary.outcome() {
                GameOutcome::Won => format!("Gewonnen nach {} Leveln", summary.levels_completed()),
                GameOutcome::Lost => format!(
                    "Verloren in Level {} ({} Fehler)",
                    game.level(),
                    summary.mistakes()
                ),
                GameOutcome::Abandoned => "Spiel beendet".to_string(),
            }),
    }
}

/// Timing of the sequence demonstration before the player may press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackPlan {
    pub steps: Vec<SensoButtonId>,
    pub flash: Duration,
    pub pause: Duration,
}

impl PlaybackPlan {
    #[must_use]
    pub fn new(sequence: &TargetSequence, settings: &GameSettings) -> Self {
        Self {
            steps: sequence.iter().collect(),
            flash: Duration::from_millis(u64::from(settings.flash_ms())),
            pause: Duration::from_millis(u64::from(settings.pause_ms())),
        }
    }

    #[must_use]
    pub fn total(&self) -> Duration {
        let per_step = self.flash + self.pause;
        per_step * u32::try_from(self.steps.len()).unwrap_or(u32::MAX)
    }
}
