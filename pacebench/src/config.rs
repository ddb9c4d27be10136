//! Configuration loading from pace.toml
//!
//! Harness settings can be specified in a `pace.toml` file in the project
//! root. The configuration is discovered by walking up from the current
//! directory; everything has a default, so the file is optional.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// PaceBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HarnessConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Settle delay before the first suite runs (e.g., "1s", "250ms").
    /// May be "0s" in environments without a warm-up concern.
    #[serde(default = "default_warmup")]
    pub warmup: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            warmup: default_warmup(),
        }
    }
}

fn default_warmup() -> String {
    "1s".to_string()
}

impl HarnessConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the
    /// current directory.
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("pace.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// The configured settle delay, falling back to the default on a
    /// malformed duration string.
    pub fn warmup_delay(&self) -> Duration {
        parse_duration(&self.runner.warmup).unwrap_or(Duration::from_secs(1))
    }
}

/// Parse a duration string (e.g., "1s", "500ms", "2m").
pub fn parse_duration(s: &str) -> anyhow::Result<Duration> {
    let s = s.trim();
    if s.is_empty() {
        return Err(anyhow::anyhow!("Empty duration string"));
    }

    // Find where the number ends and unit begins
    let (num_part, unit_part) = s
        .char_indices()
        .find(|(_, c)| c.is_alphabetic())
        .map(|(i, _)| s.split_at(i))
        .unwrap_or((s, "s"));

    let value: f64 = num_part
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid duration number: {}", num_part))?;
    if value < 0.0 {
        return Err(anyhow::anyhow!("Negative duration: {}", s));
    }

    let multiplier: f64 = match unit_part.to_lowercase().as_str() {
        "ns" => 1.0,
        "us" | "µs" => 1e3,
        "ms" => 1e6,
        "s" | "" => 1e9,
        "m" | "min" => 60e9,
        _ => return Err(anyhow::anyhow!("Unknown duration unit: {}", unit_part)),
    };

    Ok(Duration::from_nanos((value * multiplier) as u64))
}
