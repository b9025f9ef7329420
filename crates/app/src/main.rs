mod config;

use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use senso_core::model::{GameSettings, SensoButtonConfig, default_board};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

use crate::config::{Cli, ConfigError, ResolvedConfig};

struct DesktopApp {
    settings: GameSettings,
    seed: Option<u64>,
}

impl UiApp for DesktopApp {
    fn game_settings(&self) -> GameSettings {
        self.settings.clone()
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn board(&self) -> Vec<SensoButtonConfig> {
        default_board()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> Result<(), ConfigError> {
    let ResolvedConfig { settings, seed } = config::resolve(cli)?;
    tracing::info!(
        initial_length = settings.initial_length(),
        max_length = settings.max_length(),
        mistake_policy = ?settings.mistake_policy(),
        escalation = ?settings.escalation(),
        seeded = seed.is_some(),
        "starting senso"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { settings, seed });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Senso")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
