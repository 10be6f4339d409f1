use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use homework_bot::config::Config;
use homework_bot::logging;
use homework_bot::practicum::PracticumHttpClient;
use homework_bot::services::StatusPoller;
use homework_bot::telegram::TelegramNotifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    logging::init_logging()?;

    let config = match Config::new_from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}. Bot stopped.", e);
            return Err(e.into());
        }
    };

    let practicum = Arc::new(PracticumHttpClient::new(&config)?);
    let notifier = Arc::new(TelegramNotifier::new(&config)?);

    info!("Homework bot started for chat {}", config.telegram_chat_id);

    let poller = StatusPoller::new(
        practicum,
        notifier,
        config.retry_period,
        Utc::now().timestamp(),
    );
    poller.start().await;

    Ok(())
}
