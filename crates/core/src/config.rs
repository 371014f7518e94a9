use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

pub const DEFAULT_SENTIMENT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";
pub const DEFAULT_EMOTION_MODEL: &str = "j-hartmann/emotion-english-distilroberta-base";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const ENV_HF_API_TOKEN: &str = "HF_API_TOKEN";
pub const ENV_SENTIMENT_MODEL: &str = "MOOD_MIRROR_SENTIMENT_MODEL";
pub const ENV_EMOTION_MODEL: &str = "MOOD_MIRROR_EMOTION_MODEL";

/// Hugging Face model identifier, e.g. `j-hartmann/emotion-english-distilroberta-base`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelId(pub String);

impl ModelId {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, ConfigError> {
        let v = value.into();
        if v.trim().is_empty() {
            return Err(ConfigError::EmptyModelId);
        }
        Ok(Self(v))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, ConfigError> {
        let v = value.into();
        if v.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(v))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(**redacted**)")
    }
}

/// Wall-clock budget for one collaborator call. Applies only to the external
/// classifier and extractor calls, never to the core's arithmetic.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifierTimeout {
    pub target_ms: u64,
}

impl ClassifierTimeout {
    pub fn new(target_ms: u64) -> Result<Self, ConfigError> {
        if target_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(Self { target_ms })
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.target_ms)
    }
}

impl Default for ClassifierTimeout {
    fn default() -> Self {
        Self {
            target_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub sentiment_model: ModelId,
    pub emotion_model: ModelId,
    pub api_token: Option<ApiKey>,
    pub timeout: ClassifierTimeout,
    /// Force the deterministic lexicon classifiers, never calling out.
    pub offline: bool,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("model id must not be empty")]
    EmptyModelId,
    #[error("api key must not be empty")]
    EmptyApiKey,
    #[error("timeout must be > 0 ms")]
    ZeroTimeout,
}

pub trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

#[derive(Clone, Debug, Default)]
pub struct StdEnv;

impl Env for StdEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: std::collections::BTreeMap<String, String>,
}

impl MapEnv {
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl Env for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

pub fn resolve_api_key(
    cli_value: Option<String>,
    env_key: &str,
    env: &impl Env,
) -> Result<Option<ApiKey>, ConfigError> {
    match cli_value {
        Some(v) => Ok(Some(ApiKey::new(v)?)),
        None => match env.var(env_key) {
            Some(v) => Ok(Some(ApiKey::new(v)?)),
            None => Ok(None),
        },
    }
}

pub fn resolve_model(
    cli_value: Option<String>,
    env_key: &str,
    env: &impl Env,
    default: &str,
) -> Result<ModelId, ConfigError> {
    match cli_value {
        Some(v) => ModelId::new(v),
        None => match env.var(env_key) {
            Some(v) => ModelId::new(v),
            None => ModelId::new(default),
        },
    }
}
