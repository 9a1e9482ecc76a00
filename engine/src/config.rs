use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{env, fs, iter};

use thiserror::Error;

use loka_core::ledger::DEFAULT_STARTING_BALANCE;
use loka_types::ui::UiOptions;
use loka_types::{AiService, RewardKind};

/// Spend cost for any AI service the config does not price.
pub const DEFAULT_SERVICE_COST: u64 = 5;

#[derive(Debug, Default, Deserialize)]
pub struct LokaConfig {
    pub app: Option<AppConfig>,
    pub tokens: Option<TokensConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs. Falls back to `LOKA_ASCII=1` when unset.
    pub ascii_only: Option<bool>,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

/// Token economy overrides.
///
/// ```toml
/// [tokens]
/// starting_balance = 100
///
/// [tokens.costs]
/// rd_help = 5
///
/// [tokens.rewards]
/// founder_type = 10
/// pitch_deck = 50
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct TokensConfig {
    pub starting_balance: Option<u64>,
    #[serde(default)]
    pub costs: CostsConfig,
    /// Keyed by reward name (`founder_type`, `pitch_deck`, ...).
    #[serde(default)]
    pub rewards: HashMap<String, u64>,
}

/// Per-service spend costs.
#[derive(Debug, Default, Deserialize)]
pub struct CostsConfig {
    pub rd_help: Option<u64>,
    pub cold_calling: Option<u64>,
    pub pitch_deck_help: Option<u64>,
    pub prototype_creation: Option<u64>,
}

impl CostsConfig {
    fn get(&self, service: AiService) -> Option<u64> {
        match service {
            AiService::RdHelp => self.rd_help,
            AiService::ColdCalling => self.cold_calling,
            AiService::PitchDeckHelp => self.pitch_deck_help,
            AiService::PrototypeCreation => self.prototype_creation,
        }
    }
}

/// Resolved token amounts. Every reward and cost has a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSchedule {
    starting_balance: u64,
    rewards: HashMap<RewardKind, u64>,
    costs: HashMap<AiService, u64>,
}

impl Default for TokenSchedule {
    fn default() -> Self {
        Self::from_config(None)
    }
}

impl TokenSchedule {
    #[must_use]
    pub fn from_config(config: Option<&TokensConfig>) -> Self {
        let mut rewards: HashMap<RewardKind, u64> = RewardKind::ALL
            .into_iter()
            .map(|kind| (kind, kind.default_amount()))
            .collect();
        for (name, amount) in config.iter().flat_map(|cfg| cfg.rewards.iter()) {
            match RewardKind::parse(name) {
                Some(kind) => {
                    rewards.insert(kind, *amount);
                }
                None => tracing::warn!("Unknown reward in config: {}", name),
            }
        }
        let costs = AiService::ALL
            .into_iter()
            .map(|service| {
                let cost = config
                    .and_then(|cfg| cfg.costs.get(service))
                    .unwrap_or(DEFAULT_SERVICE_COST);
                (service, cost)
            })
            .collect();
        Self {
            starting_balance: config
                .and_then(|cfg| cfg.starting_balance)
                .unwrap_or(DEFAULT_STARTING_BALANCE),
            rewards,
            costs,
        }
    }

    #[must_use]
    pub fn starting_balance(&self) -> u64 {
        self.starting_balance
    }

    #[must_use]
    pub fn reward(&self, kind: RewardKind) -> u64 {
        self.rewards
            .get(&kind)
            .copied()
            .unwrap_or(kind.default_amount())
    }

    #[must_use]
    pub fn cost(&self, service: AiService) -> u64 {
        self.costs
            .get(&service)
            .copied()
            .unwrap_or(DEFAULT_SERVICE_COST)
    }
}

impl LokaConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(config: Option<&Self>) -> UiOptions {
        let app = config.and_then(|cfg| cfg.app.as_ref());
        let ascii_only = app
            .and_then(|app| app.ascii_only)
            .unwrap_or_else(|| env::var("LOKA_ASCII").is_ok_and(|value| value.trim() == "1"));
        UiOptions {
            ascii_only,
            high_contrast: app.is_some_and(|app| app.high_contrast),
        }
    }

    #[must_use]
    pub fn token_schedule(config: Option<&Self>) -> TokenSchedule {
        TokenSchedule::from_config(config.and_then(|cfg| cfg.tokens.as_ref()))
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".loka").join("config.toml"))
}

const LOG_FILE: &str = "loka.log";

/// `~/.loka/logs/loka.log`, next to the config file.
pub fn log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".loka").join("logs").join(LOG_FILE))
}

/// Log files to try, in order: [`log_path`], then `./.loka/logs/loka.log`
/// for environments without a writable home directory.
#[must_use]
pub fn log_file_candidates() -> Vec<PathBuf> {
    log_path()
        .into_iter()
        .chain(iter::once(PathBuf::from(".loka").join("logs").join(LOG_FILE)))
        .collect()
}
