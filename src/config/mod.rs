use std::time::Duration;

use url::Url;

use crate::error::{AppError, Result};
use crate::fetch::{DEFAULT_API_URL, DEFAULT_QUOTE_SUFFIX};

pub const API_URL_VAR: &str = "BCTOOL_API_URL";
pub const QUOTE_SUFFIX_VAR: &str = "BCTOOL_QUOTE_SUFFIX";
pub const TIMEOUT_SECS_VAR: &str = "BCTOOL_TIMEOUT_SECS";

/// Fixed settings shared by every price lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub quote_suffix: String,
    /// Per-request timeout. `None` waits on the upstream indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn builtin() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            quote_suffix: DEFAULT_QUOTE_SUFFIX.to_string(),
            request_timeout: None,
        }
    }

    /// Built-in settings overridden by the `BCTOOL_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::builtin();
        let mut issues = Vec::new();

        if let Some(url) = lookup(API_URL_VAR) {
            config.api_url = url.trim().to_string();
        }
        if let Some(suffix) = lookup(QUOTE_SUFFIX_VAR) {
            config.quote_suffix = suffix.trim().to_string();
        }
        if let Some(raw) = lookup(TIMEOUT_SECS_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout = Some(Duration::from_secs(secs)),
                _ => issues.push(format!(
                    "{TIMEOUT_SECS_VAR} must be a positive number of seconds, got `{raw}`"
                )),
            }
        }

        config.collect_issues(&mut issues);
        if !issues.is_empty() {
            return Err(AppError::Config(issues.join("; ")));
        }

        Ok(config)
    }

    fn collect_issues(&self, issues: &mut Vec<String>) {
        if self.api_url.is_empty() {
            issues.push("api url must not be empty".to_string());
        } else {
            match Url::parse(&self.api_url) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                Ok(url) => issues.push(format!(
                    "api url must use http or https, got `{}`",
                    url.scheme()
                )),
                Err(err) => issues.push(format!("api url `{}` is invalid: {err}", self.api_url)),
            }
        }

        if self.quote_suffix.is_empty() {
            issues.push("quote suffix must not be empty".to_string());
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::builtin()
    }
}
