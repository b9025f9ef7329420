mod board;
mod button;

pub use board::SensoView;
pub use button::SensoButton;
