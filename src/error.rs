use std::fmt;

use thiserror::Error;

/// Request details attached to fetch failures. The token is never rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    pub url: String,
    pub from_date: i64,
}

impl fmt::Display for RequestParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "url = {}, headers = {{Authorization: OAuth ***}}, from_date = {}",
            self.url, self.from_date
        )
    }
}

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Practicum API request failed: {source}. Request: {request}")]
    ConnectionFailure {
        #[source]
        source: reqwest::Error,
        request: RequestParams,
    },

    #[error("Practicum API returned status {status}. Request: {request}")]
    ApiStatusFailure { status: u16, request: RequestParams },

    #[error("Practicum API reported an error: code = {code}, error = {error}, message = {message}")]
    ApiResponseFailure {
        code: String,
        error: String,
        message: String,
    },

    #[error("Unexpected API response: {0}")]
    ShapeFailure(String),

    #[error("Homework record has no \"{0}\" field")]
    MissingFieldFailure(&'static str),

    #[error("Undocumented homework status: {0}")]
    UnknownStatusFailure(String),

    #[error("Missing required environment variables: {}", .0.join(", "))]
    FatalConfigFailure(Vec<&'static str>),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build http client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("Failed to send Telegram message: {0}")]
    SendFailure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_params_hide_token() {
        let params = RequestParams {
            url: "https://example.test/api/".to_string(),
            from_date: 42,
        };
        let rendered = BotError::ApiStatusFailure {
            status: 503,
            request: params,
        }
        .to_string();

        assert!(rendered.contains("503"));
        assert!(rendered.contains("from_date = 42"));
        assert!(rendered.contains("OAuth ***"));
    }

    #[test]
    fn fatal_config_lists_every_variable() {
        let err = BotError::FatalConfigFailure(vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"]);
        assert_eq!(
            err.to_string(),
            "Missing required environment variables: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
    }
}
