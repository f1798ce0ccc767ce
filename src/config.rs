//! Trainer configuration loaded from TOML.
//!
//! Every section is optional; a missing file or section falls back to the
//! defaults below. Expected schema:
//!
//! ```toml
//! [exam]
//! question_count = 10
//! duration_minutes = 20      # 0 for an untimed exam
//! difficulty = "Medium"
//! language = "tr"
//!
//! [policy]
//! triangle_max_attempts = 20
//! distractor_max_attempts = 50
//!
//! [tutor]
//! enabled = false
//! base_url = "https://api.openai.com/v1"
//! model = "gpt-4o-mini"
//! timeout_secs = 10
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::puzzle_engine::models::{Difficulty, Language};

/// Environment variable naming the TOML file read by [`TrainerConfig::load_from_env`].
pub const CONFIG_PATH_ENV: &str = "TRAINER_CONFIG_PATH";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    pub exam: ExamConfig,
    pub policy: GenerationPolicy,
    pub tutor: TutorConfig,
}

/// One exam run: how many puzzles, how long, how hard, which language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExamConfig {
    pub question_count: u32,
    /// `Some(0)` or `None` means untimed.
    pub duration_minutes: Option<u32>,
    pub difficulty: Difficulty,
    pub language: Language,
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            question_count: 10,
            duration_minutes: Some(20),
            difficulty: Difficulty::Medium,
            language: Language::Tr,
        }
    }
}

impl ExamConfig {
    pub const QUESTION_COUNT_RANGE: std::ops::RangeInclusive<u32> = 5..=50;
    pub const MAX_DURATION_MINUTES: u32 = 120;

    pub fn time_limit(&self) -> Option<Duration> {
        match self.duration_minutes {
            Some(0) | None => None,
            Some(m)        => Some(Duration::from_secs(u64::from(m) * 60)),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !Self::QUESTION_COUNT_RANGE.contains(&self.question_count) {
            return Err(ConfigError::Invalid(format!(
                "exam.question_count must be within 5..=50, got {}",
                self.question_count
            )));
        }
        if let Some(m) = self.duration_minutes {
            if m > Self::MAX_DURATION_MINUTES {
                return Err(ConfigError::Invalid(format!(
                    "exam.duration_minutes must be at most {}, got {m}",
                    Self::MAX_DURATION_MINUTES
                )));
            }
        }
        Ok(())
    }
}

/// Retry caps for the bounded loops inside the generators.
///
/// Exhausting a cap is never an error: the triangle sampler keeps its last
/// draw and distractor lists are padded with synthetic distinct values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationPolicy {
    /// Draws allowed while looking for a triangle center inside 1..=999.
    pub triangle_max_attempts: u32,
    /// Random candidates tried before distractor padding kicks in.
    pub distractor_max_attempts: u32,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self { triangle_max_attempts: 20, distractor_max_attempts: 50 }
    }
}

impl GenerationPolicy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.triangle_max_attempts == 0 {
            return Err(ConfigError::Invalid("policy.triangle_max_attempts must be at least 1".into()));
        }
        Ok(())
    }
}

/// Settings for the optional explanation tutor. The API key is never read
/// from the file, only from `TUTOR_API_KEY`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    pub enabled: bool,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "https://api.openai.com/v1".into(),
            model: "gpt-4o-mini".into(),
            timeout_secs: 10,
        }
    }
}

impl TutorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl TrainerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: TrainerConfig = toml::from_str(s)?;
        cfg.exam.validate()?;
        cfg.policy.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load from `TRAINER_CONFIG_PATH`. Falls back to defaults when the
    /// variable is unset or the file cannot be used.
    pub fn load_from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_PATH_ENV) else {
            return Self::default();
        };
        match Self::from_path(&path) {
            Ok(cfg) => {
                info!(%path, "Loaded trainer config (TOML)");
                cfg
            }
            Err(e) => {
                error!(%path, error = %e, "Failed to load trainer config; using defaults");
                Self::default()
            }
        }
    }
}
