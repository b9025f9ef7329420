mod accessibility;
mod color;
pub mod components;
mod feedback;
mod ids;
mod sequence;
mod session;
mod settings;
mod summary;

pub use accessibility::{AccessibilityCategory, AccessibilityMenu, MenuScreen};
pub use color::{ColorError, HexColor, Hsl};
pub use components::{
    ButtonPalette, CategoryButtonConfig, SensoButtonConfig, TooltipConfig, category_buttons,
    default_board,
};
pub use feedback::SelectionFeedback;
pub use ids::{ParseButtonIdError, SensoButtonId};
pub use sequence::{SequenceError, TargetSequence};
pub use session::{GameSession, LevelProgress, SelectionOutcome, SessionPhase};
pub use settings::{
    GameSettings, GameSettingsDraft, GameSettingsError, MAX_SEQUENCE_LENGTH, MistakePolicy,
    SequenceEscalation,
};
pub use summary::{GameOutcome, GameSummary, GameSummaryError};
