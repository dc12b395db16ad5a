use std::env;
use std::time::Duration;

use crate::error::{ConfigError, EnvVarError};

pub const ENDPOINT_VAR: &str = "MATCHDAY_DATA_ENDPOINT";
pub const CONNECT_TIMEOUT_VAR: &str = "MATCHDAY_CONNECT_TIMEOUT_MS";
pub const REQUEST_TIMEOUT_VAR: &str = "MATCHDAY_REQUEST_TIMEOUT_MS";

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(5_000);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Where and how to reach the football data service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub connect_timeout: Duration,
    /// Deadline tonic applies to every request on the channel.
    pub request_timeout: Duration,
}

impl Config {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    // requires MATCHDAY_DATA_ENDPOINT env var
    // can use dotenv
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| env::var(var))
    }

    fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let endpoint =
            lookup(ENDPOINT_VAR).map_err(|e| EnvVarError::new(ENDPOINT_VAR, e))?;

        Ok(Self {
            endpoint,
            connect_timeout: millis(&lookup, CONNECT_TIMEOUT_VAR)?
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            request_timeout: millis(&lookup, REQUEST_TIMEOUT_VAR)?
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        })
    }
}

fn millis<F>(lookup: &F, var: &str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Result<String, env::VarError>,
{
    let raw = match lookup(var) {
        Ok(raw) => raw,
        Err(env::VarError::NotPresent) => return Ok(None),
        Err(e) => return Err(EnvVarError::new(var, e).into()),
    };

    raw.trim()
        .parse::<u64>()
        .map(|ms| Some(Duration::from_millis(ms)))
        .map_err(|e| ConfigError::InvalidValue {
            var: var.into(),
            value: raw.clone(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, env::VarError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned().ok_or(env::VarError::NotPresent)
    }

    #[test]
    fn endpoint_is_required() {
        let err = Config::from_vars(vars(&[])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "environment variable not found (MATCHDAY_DATA_ENDPOINT)"
        );
    }

    #[test]
    fn timeouts_default_when_unset() {
        let config = Config::from_vars(vars(&[(ENDPOINT_VAR, "http://localhost:50051")])).unwrap();
        assert_eq!(config, Config::new("http://localhost:50051"));
    }

    #[test]
    fn timeouts_are_read_in_millis() {
        let config = Config::from_vars(vars(&[
            (ENDPOINT_VAR, "http://data:50051"),
            (CONNECT_TIMEOUT_VAR, "250"),
            (REQUEST_TIMEOUT_VAR, " 1500 "),
        ]))
        .unwrap();
        assert_eq!(config.connect_timeout, Duration::from_millis(250));
        assert_eq!(config.request_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let err = Config::from_vars(vars(&[
            (ENDPOINT_VAR, "http://data:50051"),
            (REQUEST_TIMEOUT_VAR, "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == REQUEST_TIMEOUT_VAR));
    }
}
