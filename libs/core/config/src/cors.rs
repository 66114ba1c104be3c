use crate::{ConfigError, FromEnv};
use std::env;

const CORS_ALLOWED_ORIGIN: &str = "CORS_ALLOWED_ORIGIN";

/// Cross-origin policy for browser clients.
///
/// `allowed_origins` is `None` when `CORS_ALLOWED_ORIGIN` is unset, which
/// means any origin is accepted. When the variable is set it must contain at
/// least one comma separated origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Option<Vec<String>>,
}

impl CorsConfig {
    pub fn permissive() -> Self {
        Self::default()
    }

    pub fn with_origins<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: Some(origins.into_iter().map(Into::into).collect()),
        }
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let Ok(raw) = env::var(CORS_ALLOWED_ORIGIN) else {
            return Ok(Self::permissive());
        };

        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        if origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: CORS_ALLOWED_ORIGIN.to_string(),
                details: "expected at least one origin".to_string(),
            });
        }

        Ok(Self::with_origins(origins))
    }
}
