use std::fmt;
use std::time::Duration;

use crate::livingapps::{is_record_id, ApiLocation, AppIds, DEFAULT_BASE_URL};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { var: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(var) => write!(f, "Environment variable {var} is not set"),
            ConfigError::Invalid { var, reason } => write!(f, "Environment variable {var} is invalid: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime settings, read from the environment (and `.env` via dotenvy in `main`).
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub location: ApiLocation,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &'static str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let app_id = |var: &'static str| -> Result<String, ConfigError> {
            let value = get(var).ok_or(ConfigError::Missing(var))?;
            if !is_record_id(&value) {
                return Err(ConfigError::Invalid {
                    var,
                    reason: "expected 24 hexadecimal characters".to_string(),
                });
            }
            Ok(value)
        };

        let app_ids = AppIds {
            instructors: app_id("LIVINGAPPS_APP_DOZENTEN")?,
            rooms: app_id("LIVINGAPPS_APP_RAEUME")?,
            participants: app_id("LIVINGAPPS_APP_TEILNEHMER")?,
            courses: app_id("LIVINGAPPS_APP_KURSE")?,
            registrations: app_id("LIVINGAPPS_APP_ANMELDUNGEN")?,
        };

        let base_url = get("LIVINGAPPS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                var: "LIVINGAPPS_BASE_URL",
                reason: format!("'{base_url}' is not an http(s) URL"),
            });
        }

        let timeout_secs = match get("LIVINGAPPS_TIMEOUT_SECS") {
            Some(v) => v.parse::<u64>().ok().filter(|s| *s > 0).ok_or_else(|| ConfigError::Invalid {
                var: "LIVINGAPPS_TIMEOUT_SECS",
                reason: format!("'{v}' is not a positive number of seconds"),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            location: ApiLocation {
                base_url: base_url.trim_end_matches('/').to_string(),
                app_ids,
            },
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(extra: &[(&str, &str)]) -> HashMap<String, String> {
        let mut vars: HashMap<String, String> = [
            ("LIVINGAPPS_APP_DOZENTEN", "aaaaaaaaaaaaaaaaaaaaaaaa"),
            ("LIVINGAPPS_APP_RAEUME", "bbbbbbbbbbbbbbbbbbbbbbbb"),
            ("LIVINGAPPS_APP_TEILNEHMER", "cccccccccccccccccccccccc"),
            ("LIVINGAPPS_APP_KURSE", "dddddddddddddddddddddddd"),
            ("LIVINGAPPS_APP_ANMELDUNGEN", "eeeeeeeeeeeeeeeeeeeeeeee"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        for (k, v) in extra {
            vars.insert(k.to_string(), v.to_string());
        }
        vars
    }

    #[test]
    fn defaults() {
        let vars = env(&[]);
        let cfg = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(cfg.location.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        assert_eq!(cfg.location.app_ids.courses, "dddddddddddddddddddddddd");
    }

    #[test]
    fn missing_app_id() {
        let mut vars = env(&[]);
        vars.remove("LIVINGAPPS_APP_KURSE");
        let err = Config::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert_eq!(err, ConfigError::Missing("LIVINGAPPS_APP_KURSE"));
    }

    #[test]
    fn rejects_bad_values() {
        let vars = env(&[("LIVINGAPPS_APP_RAEUME", "raeume")]);
        assert!(matches!(
            Config::from_lookup(|k| vars.get(k).cloned()),
            Err(ConfigError::Invalid { var: "LIVINGAPPS_APP_RAEUME", .. })
        ));

        let vars = env(&[("LIVINGAPPS_TIMEOUT_SECS", "0")]);
        assert!(Config::from_lookup(|k| vars.get(k).cloned()).is_err());

        let vars = env(&[("LIVINGAPPS_BASE_URL", "ftp://example.org")]);
        assert!(Config::from_lookup(|k| vars.get(k).cloned()).is_err());
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let vars = env(&[("LIVINGAPPS_BASE_URL", "http://localhost:9000/rest/")]);
        let cfg = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(cfg.location.base_url, "http://localhost:9000/rest");
    }
}
