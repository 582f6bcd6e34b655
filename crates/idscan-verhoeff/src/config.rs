//! OCR recognizer configuration
//!
//! Defaults can be overridden by environment variables, and the CLI tools
//! override both with explicit flags.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable for the Tesseract executable
pub const ENV_TESSERACT_BIN: &str = "IDSCAN_TESSERACT_BIN";

/// Environment variable for the OCR language(s), e.g. `eng` or `eng+hin`
pub const ENV_OCR_LANG: &str = "IDSCAN_OCR_LANG";

/// Environment variable for the OCR timeout in seconds
pub const ENV_OCR_TIMEOUT_SECS: &str = "IDSCAN_OCR_TIMEOUT_SECS";

/// Default OCR timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings for the external OCR program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Executable to run
    pub program: PathBuf,
    /// Language pack passed as `-l`
    pub language: String,
    /// Upper bound for a single recognition
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Additional arguments appended after the language
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("tesseract"),
            language: "eng".to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            extra_args: Vec::new(),
        }
    }
}

impl RecognizerConfig {
    /// Defaults overlaid with the `IDSCAN_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Overlay values returned by `lookup`; empty values are ignored
    pub fn with_env_lookup(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(program) = get(ENV_TESSERACT_BIN) {
            self.program = PathBuf::from(program);
        }
        if let Some(language) = get(ENV_OCR_LANG) {
            self.language = language.trim().to_string();
        }
        if let Some(raw) = get(ENV_OCR_TIMEOUT_SECS) {
            self.timeout = parse_timeout_secs(ENV_OCR_TIMEOUT_SECS, &raw)?;
        }
        Ok(self)
    }

    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }
}

fn parse_timeout_secs(key: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
        reason: reason.to_string(),
    };
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| invalid("expected a whole number of seconds"))?;
    if secs == 0 {
        return Err(invalid("timeout must be at least 1 second"));
    }
    Ok(Duration::from_secs(secs))
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}
