use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use thiserror::Error;

use senso_core::model::{
    GameSettings, GameSettingsDraft, GameSettingsError, MistakePolicy, SequenceEscalation,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Settings(#[from] GameSettingsError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Reset,
    Keep,
}

impl From<PolicyArg> for MistakePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Reset => MistakePolicy::ResetProgress,
            PolicyArg::Keep => MistakePolicy::KeepProgress,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EscalationArg {
    Extend,
    Regenerate,
}

impl From<EscalationArg> for SequenceEscalation {
    fn from(arg: EscalationArg) -> Self {
        match arg {
            EscalationArg::Extend => SequenceEscalation::Extend,
            EscalationArg::Regenerate => SequenceEscalation::Regenerate,
        }
    }
}

#[derive(Parser, Debug, Default)]
#[command(name = "senso", about = "Senso memory game with accessibility menu")]
pub struct Cli {
    /// TOML file with game settings
    #[arg(short, long, value_name = "FILE", env = "SENSO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Fixed RNG seed for reproducible sequences
    #[arg(long, env = "SENSO_SEED")]
    pub seed: Option<u64>,

    /// Length of the first level's sequence
    #[arg(long)]
    pub initial_length: Option<u32>,

    /// Completing a sequence of this length wins the game
    #[arg(long)]
    pub max_length: Option<u32>,

    /// Total mistakes allowed before the game is lost
    #[arg(long)]
    pub max_mistakes: Option<u32>,

    /// What a wrong press does to the current progress
    #[arg(long, value_enum)]
    pub mistake_policy: Option<PolicyArg>,

    /// How the next level's sequence is built
    #[arg(long, value_enum)]
    pub escalation: Option<EscalationArg>,
}

impl Cli {
    fn settings_overrides(&self) -> GameSettingsDraft {
        GameSettingsDraft {
            initial_length: self.initial_length,
            max_length: self.max_length,
            max_mistakes: self.max_mistakes,
            mistake_policy: self.mistake_policy.map(Into::into),
            escalation: self.escalation.map(Into::into),
            ..GameSettingsDraft::default()
        }
    }
}

/// On-disk configuration.
///
/// ```toml
/// seed = 42
///
/// [game]
/// initial_length = 3
/// mistake_policy = "keep-progress"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub seed: Option<u64>,
    pub game: GameSettingsDraft,
}

impl ConfigFile {
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, path)
    }

    fn parse(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Effective configuration after layering defaults, file and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub settings: GameSettings,
    pub seed: Option<u64>,
}

/// # Errors
///
/// Returns `ConfigError` for unreadable files or invalid settings.
pub fn resolve(cli: &Cli) -> Result<ResolvedConfig, ConfigError> {
    let file = match cli.config.as_deref() {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    resolve_with_file(cli, file)
}

fn resolve_with_file(cli: &Cli, file: ConfigFile) -> Result<ResolvedConfig, ConfigError> {
    let settings = file.game.merged_with(cli.settings_overrides()).validate()?;
    Ok(ResolvedConfig {
        settings,
        seed: cli.seed.or(file.seed),
    })
}
