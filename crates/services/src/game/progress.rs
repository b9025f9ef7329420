use super::press::GameStatus;

/// Aggregated view of game progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameProgress {
    pub level: u32,
    pub sequence_length: usize,
    pub entered: usize,
    pub remaining: usize,
    pub mistakes: u32,
    pub status: GameStatus,
}
