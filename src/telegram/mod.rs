pub mod dto;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::error::BotError;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_message(&self, text: &str) -> Result<(), BotError>;
}

/// Sends messages to one chat through the Telegram Bot API.
pub struct TelegramNotifier {
    client: Client,
    api_url: String,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &Config) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(BotError::HttpClient)?;

        Ok(Self {
            client,
            api_url: config.telegram_api_url.trim_end_matches('/').to_string(),
            token: config.telegram_token.clone(),
            chat_id: config.telegram_chat_id.clone(),
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_message(&self, text: &str) -> Result<(), BotError> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        let request_body = dto::SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        // the url embeds the token, so reqwest errors are reported without it
        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| BotError::SendFailure(e.without_url().to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<dto::BotApiResponse>(&body).ok();

        if !status.is_success() || !parsed.as_ref().is_some_and(|r| r.ok) {
            let description = parsed
                .and_then(|r| r.description)
                .unwrap_or(body);
            return Err(BotError::SendFailure(format!(
                "Telegram API error {}: {}",
                status, description
            )));
        }

        debug!("Bot sent message: \"{}\"", text);
        Ok(())
    }
}
