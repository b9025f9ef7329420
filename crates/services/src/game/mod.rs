mod press;
mod progress;
mod service;

// Public API of the game subsystem.
pub use crate::error::GameError;
pub use press::{GameStatus, PressResult};
pub use progress::GameProgress;
pub use service::GameService;
