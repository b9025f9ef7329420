#![forbid(unsafe_code)]

pub mod error;
pub mod game;
pub mod sequence;

pub use senso_core::Clock;

pub use error::GameError;
pub use game::{GameProgress, GameService, GameStatus, PressResult};
pub use sequence::SequenceGenerator;
