use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::BotError;

pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

#[derive(Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub practicum_endpoint: String,
    pub telegram_api_url: String,
    pub retry_period: Duration,
    pub request_timeout: Duration,
}

impl Config {
    pub fn new_from_env() -> Result<Self, BotError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    ///
    /// Empty values count as missing, and every missing required key is
    /// reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let (practicum_token, telegram_token, telegram_chat_id) = match (
            get("PRACTICUM_TOKEN"),
            get("TELEGRAM_TOKEN"),
            get("TELEGRAM_CHAT_ID"),
        ) {
            (Some(practicum), Some(telegram), Some(chat_id)) => (practicum, telegram, chat_id),
            _ => {
                let missing = REQUIRED_VARS
                    .into_iter()
                    .filter(|key| get(*key).is_none())
                    .collect();
                return Err(BotError::FatalConfigFailure(missing));
            }
        };

        let retry_period = parse_secs(
            get("RETRY_PERIOD_SECS"),
            "RETRY_PERIOD_SECS",
            DEFAULT_RETRY_PERIOD_SECS,
        )?;
        let request_timeout = parse_secs(
            get("REQUEST_TIMEOUT_SECS"),
            "REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum_endpoint: get("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_PRACTICUM_ENDPOINT.to_string()),
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_period,
            request_timeout,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_period", &self.retry_period)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn parse_secs(raw: Option<String>, key: &str, default: u64) -> Result<Duration, BotError> {
    match raw {
        None => Ok(Duration::from_secs(default)),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| {
                BotError::InvalidConfig(format!(
                    "{} must be a number of seconds, got {:?}",
                    key, value
                ))
            }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn loads_required_values_and_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("PRACTICUM_TOKEN", "p-token"),
            ("TELEGRAM_TOKEN", "t-token"),
            ("TELEGRAM_CHAT_ID", "12345"),
        ]))
        .expect("config should load");

        assert_eq!(config.practicum_token, "p-token");
        assert_eq!(config.telegram_chat_id, "12345");
        assert_eq!(config.practicum_endpoint, DEFAULT_PRACTICUM_ENDPOINT);
        assert_eq!(config.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
        assert_eq!(config.retry_period, Duration::from_secs(600));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn reports_all_missing_and_empty_values() {
        let err = Config::from_lookup(lookup_from(&[
            ("TELEGRAM_TOKEN", "t-token"),
            ("TELEGRAM_CHAT_ID", "  "),
        ]))
        .expect_err("config should fail");

        match err {
            BotError::FatalConfigFailure(missing) => {
                assert_eq!(missing, vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_retry_period() {
        let err = Config::from_lookup(lookup_from(&[
            ("PRACTICUM_TOKEN", "p-token"),
            ("TELEGRAM_TOKEN", "t-token"),
            ("TELEGRAM_CHAT_ID", "12345"),
            ("RETRY_PERIOD_SECS", "ten minutes"),
        ]))
        .expect_err("config should fail");

        assert!(matches!(err, BotError::InvalidConfig(_)));
    }

    #[test]
    fn debug_output_hides_tokens() {
        let config = Config::from_lookup(lookup_from(&[
            ("PRACTICUM_TOKEN", "p-secret"),
            ("TELEGRAM_TOKEN", "t-secret"),
            ("TELEGRAM_CHAT_ID", "12345"),
        ]))
        .expect("config should load");

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("p-secret"));
        assert!(!rendered.contains("t-secret"));
    }
}
