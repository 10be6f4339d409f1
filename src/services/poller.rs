use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::error::BotError;
use crate::practicum::PracticumClient;
use crate::services::gate::NotificationGate;
use crate::services::status::{malfunction_message, render_status};
use crate::services::validator::validate;
use crate::telegram::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Suppressed,
    SendFailed,
}

/// What one cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub message: String,
    pub delivery: Delivery,
    /// Fetch, validation and interpretation all succeeded.
    pub succeeded: bool,
    /// Cursor after the cycle.
    pub cursor: i64,
}

/// Polls the Practicum API and forwards status changes to the chat.
///
/// Owns the time cursor and the last delivered message for the whole
/// process lifetime.
pub struct StatusPoller {
    practicum: Arc<dyn PracticumClient>,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
    cursor: i64,
    gate: NotificationGate,
}

impl StatusPoller {
    pub fn new(
        practicum: Arc<dyn PracticumClient>,
        notifier: Arc<dyn Notifier>,
        interval: Duration,
        cursor: i64,
    ) -> Self {
        Self {
            practicum,
            notifier,
            interval,
            cursor,
            gate: NotificationGate::new(),
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_message(&self) -> Option<&str> {
        self.gate.last()
    }

    /// Runs cycles forever, sleeping `interval` after each one.
    pub async fn start(mut self) {
        info!(
            "Starting homework status poller (interval: {:?}, from_date: {})",
            self.interval, self.cursor
        );

        loop {
            let report = self.run_cycle().await;
            debug!(
                "Cycle finished - succeeded: {}, delivery: {:?}, cursor: {}",
                report.succeeded, report.delivery, report.cursor
            );

            tokio::time::sleep(self.interval).await;
        }
    }

    /// One fetch, validate, interpret and notify pass, without the sleep.
    pub async fn run_cycle(&mut self) -> CycleReport {
        let (message, current_date, succeeded) = match self.poll_status().await {
            Ok((message, current_date)) => (message, current_date, true),
            Err(e) => {
                let message = malfunction_message(&e);
                error!("{}", message);
                (message, None, false)
            }
        };

        let delivery = self.notify(&message).await;

        // Failed cycles and failed sends keep the window where it was.
        if succeeded && delivery != Delivery::SendFailed {
            if let Some(current_date) = current_date {
                self.cursor = current_date;
            }
        }

        CycleReport {
            message,
            delivery,
            succeeded,
            cursor: self.cursor,
        }
    }

    async fn poll_status(&self) -> Result<(String, Option<i64>), BotError> {
        let raw = self.practicum.fetch(self.cursor).await?;
        let response = validate(raw)?;
        let message = render_status(&response)?;
        Ok((message, response.current_date()))
    }

    async fn notify(&mut self, message: &str) -> Delivery {
        if !self.gate.should_send(message) {
            debug!("Message not sent (status unchanged)");
            return Delivery::Suppressed;
        }

        match self.notifier.send_message(message).await {
            Ok(()) => {
                self.gate.record_sent(message.to_string());
                Delivery::Sent
            }
            Err(e) => {
                error!("Message \"{}\" was not sent: {}", message, e);
                Delivery::SendFailed
            }
        }
    }
}
