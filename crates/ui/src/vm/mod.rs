mod accessibility_vm;
mod board_vm;

pub use accessibility_vm::{CategoryPanelVm, map_category_panel, map_overview};
pub use board_vm::{BoardUiState, PlaybackPlan, SensoBoardVm, SensoButtonVm, map_board};
