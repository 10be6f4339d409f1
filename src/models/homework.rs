use serde_json::{Map, Value};

use crate::error::BotError;

/// Review outcomes the Practicum API documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    pub fn from_status(status: &str) -> Option<Self> {
        match status {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// A validated Practicum response.
///
/// Wraps the decoded body as-is; only `validate` can build one, so
/// `homeworks` is known to be an array.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse(Map<String, Value>);

impl ApiResponse {
    pub(crate) fn from_validated(body: Map<String, Value>) -> Self {
        Self(body)
    }

    /// Homeworks, most recent first.
    pub fn homeworks(&self) -> &[Value] {
        self.0
            .get("homeworks")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Server time of the response. Non-integer values count as absent.
    pub fn current_date(&self) -> Option<i64> {
        self.0.get("current_date").and_then(Value::as_i64)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Borrowed view of one homework entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeworkRecord<'a> {
    pub homework_name: &'a str,
    pub verdict: Verdict,
}

impl<'a> HomeworkRecord<'a> {
    pub fn from_value(value: &'a Value) -> Result<Self, BotError> {
        let record = value.as_object().ok_or_else(|| {
            BotError::ShapeFailure(format!("homework entry is not an object: {}", value))
        })?;

        let homework_name = match record.get("homework_name") {
            None | Some(Value::Null) => return Err(BotError::MissingFieldFailure("homework_name")),
            Some(Value::String(name)) => name.as_str(),
            Some(other) => {
                return Err(BotError::ShapeFailure(format!(
                    "homework_name is not a string: {}",
                    other
                )));
            }
        };

        let verdict = match record.get("status") {
            None | Some(Value::Null) => return Err(BotError::MissingFieldFailure("status")),
            Some(Value::String(status)) => Verdict::from_status(status)
                .ok_or_else(|| BotError::UnknownStatusFailure(status.clone()))?,
            Some(other) => return Err(BotError::UnknownStatusFailure(other.to_string())),
        };

        Ok(Self {
            homework_name,
            verdict,
        })
    }
}
