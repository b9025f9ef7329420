use std::sync::Arc;

use senso_core::Clock;
use senso_core::model::{GameSettings, SensoButtonConfig};
use services::{GameService, SequenceGenerator};

/// What the composition root (e.g. `crates/app`) hands to the UI.
pub trait UiApp: Send + Sync {
    fn game_settings(&self) -> GameSettings;
    /// Fixed RNG seed for reproducible games; `None` draws from the OS.
    fn seed(&self) -> Option<u64>;
    fn board(&self) -> Vec<SensoButtonConfig>;
    fn clock(&self) -> Clock {
        Clock::system()
    }
}

#[derive(Clone)]
pub struct AppContext {
    settings: GameSettings,
    seed: Option<u64>,
    board: Arc<[SensoButtonConfig]>,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            settings: app.game_settings(),
            seed: app.seed(),
            board: app.board().into(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn game_settings(&self) -> &GameSettings {
        &self.settings
    }

    #[must_use]
    pub fn board(&self) -> Arc<[SensoButtonConfig]> {
        Arc::clone(&self.board)
    }

    /// A fresh, not yet started game using the configured rules.
    #[must_use]
    pub fn new_game(&self) -> GameService {
        GameService::new(self.settings.clone(), SequenceGenerator::new(self.seed))
            .with_clock(self.clock)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
