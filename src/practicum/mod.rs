use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{BotError, RequestParams};

const ABSENT: &str = "Отсутствует";

#[async_trait]
pub trait PracticumClient: Send + Sync {
    /// Fetches homework statuses changed since `from_date`.
    ///
    /// The body is returned undecoded into any schema; see `services::validate`.
    async fn fetch(&self, from_date: i64) -> Result<Value, BotError>;
}

pub struct PracticumHttpClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumHttpClient {
    pub fn new(config: &Config) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(BotError::HttpClient)?;

        Ok(Self {
            client,
            endpoint: config.practicum_endpoint.clone(),
            token: config.practicum_token.clone(),
        })
    }

    fn request_url(&self, from_date: i64) -> Result<Url, BotError> {
        Url::parse_with_params(&self.endpoint, &[("from_date", from_date.to_string())])
            .map_err(|e| {
                BotError::InvalidConfig(format!("bad Practicum endpoint {}: {}", self.endpoint, e))
            })
    }
}

#[async_trait]
impl PracticumClient for PracticumHttpClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, BotError> {
        let url = self.request_url(from_date)?;
        let request = RequestParams {
            url: self.endpoint.clone(),
            from_date,
        };
        debug!("Requesting homework statuses: {}", request);

        let response = self
            .client
            .get(url)
            .header("Authorization", format!("OAuth {}", self.token))
            .send()
            .await
            .map_err(|source| BotError::ConnectionFailure {
                source,
                request: request.clone(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BotError::ApiStatusFailure {
                status: status.as_u16(),
                request,
            });
        }

        let body: Value = response.json().await.map_err(|e| {
            BotError::ShapeFailure(format!("response body is not valid JSON: {}", e))
        })?;

        check_api_error(&body)?;
        Ok(body)
    }
}

/// A 200 body may still carry an API-level error in `code` or `error`.
fn check_api_error(body: &Value) -> Result<(), BotError> {
    let Some(fields) = body.as_object() else {
        return Ok(());
    };
    if !fields.contains_key("code") && !fields.contains_key("error") {
        return Ok(());
    }

    let field = |key: &str| match fields.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => ABSENT.to_string(),
    };

    Err(BotError::ApiResponseFailure {
        code: field("code"),
        error: field("error"),
        message: field("message"),
    })
}
