use serde_json::Value;

use crate::error::BotError;
use crate::models::{ApiResponse, HomeworkRecord};

pub const NOT_TAKEN_MESSAGE: &str = "Домашку ещё не взяли в работу";

/// Renders the notification text for one homework entry.
pub fn interpret(record: &Value) -> Result<String, BotError> {
    let homework = HomeworkRecord::from_value(record)?;
    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework.homework_name,
        homework.verdict.description()
    ))
}

/// Message for the most recent homework, or the sentinel when there is none.
pub fn render_status(response: &ApiResponse) -> Result<String, BotError> {
    match response.homeworks().first() {
        Some(latest) => interpret(latest),
        None => Ok(NOT_TAKEN_MESSAGE.to_string()),
    }
}

pub fn malfunction_message(err: &BotError) -> String {
    format!("Сбой в работе программы: {}", err)
}
