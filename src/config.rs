use serde::{Deserialize, Serialize};

use crate::dispatching::SeekEngine;
use crate::models::policy::{DEFAULT_SSTF_TIE_BREAK, DEFAULT_SWEEP_DIRECTION};
use crate::models::{SstfTieBreak, SweepDirection};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

// ── Server ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

// ── Request limits ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum number of cylinder requests per simulation.
    /// SSTF is quadratic in this number.
    #[serde(default = "default_max_requests")]
    pub max_requests: usize,
}

// ── Engine policies ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Initial sweep direction for SCAN, C-SCAN, LOOK and C-LOOK.
    #[serde(default = "default_direction")]
    pub direction: SweepDirection,
    /// How SSTF breaks distance ties.
    #[serde(default = "default_tie_break")]
    pub tie_break: SstfTieBreak,
}

// ── Logging ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON log lines instead of human-readable ones.
    #[serde(default)]
    pub json: bool,
}

// ── Defaults ───────────────────────────────────────────────────────

fn default_port() -> u16 {
    5000
}
fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_max_requests() -> usize {
    10_000
}
fn default_direction() -> SweepDirection {
    DEFAULT_SWEEP_DIRECTION
}
fn default_tie_break() -> SstfTieBreak {
    DEFAULT_SSTF_TIE_BREAK
}
fn default_log_filter() -> String {
    "disk_scheduling=info,tower_http=info".into()
}

// ── Default impls ──────────────────────────────────────────────────

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            direction: default_direction(),
            tie_break: default_tie_break(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl EngineConfig {
    /// Engine configured with these policies.
    pub fn build(&self) -> SeekEngine {
        SeekEngine::new()
            .with_direction(self.direction)
            .with_tie_break(self.tie_break)
    }
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults for missing keys.
    pub fn load(path: &str) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from file if it exists, otherwise return defaults.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!(path, error = %e, "using default configuration");
                Self::default()
            }
        }
    }
}
