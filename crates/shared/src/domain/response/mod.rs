use crate::utils::AppError;
use core::fmt;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub mod auth;
pub mod user;
pub mod withdraw;

pub const STATUS_SUCCESS: i64 = 1;
pub const STATUS_FAILURE: i64 = 0;

/// `{ status, message?, data? }` envelope returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default = "failure_status", deserialize_with = "status_code")]
    pub status: i64,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: Option<T>) -> Self {
        ApiResponse {
            status: STATUS_SUCCESS,
            message: Some(message.into()),
            data,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Any status other than success is a domain failure carrying the
    /// server's message, or `fallback` when the server sent none.
    pub fn into_result(self, fallback: &str) -> Result<Self, AppError> {
        if self.is_success() {
            return Ok(self);
        }

        let message = self
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());

        Err(AppError::DomainError(message))
    }

    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl<T: fmt::Debug> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ApiResponse {{ status: {}, message: {:?}, data: {:?} }}",
            self.status, self.message, self.data
        )
    }
}

fn failure_status() -> i64 {
    STATUS_FAILURE
}

/// Accepts `1` as well as `"1"`. Anything unreadable counts as failure.
fn status_code<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let status = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .unwrap_or(STATUS_FAILURE),
        Value::String(s) => s.trim().parse().unwrap_or(STATUS_FAILURE),
        _ => STATUS_FAILURE,
    };
    Ok(status)
}

/// Money fields arrive as numbers or as decimal strings (`"2500.00"`).
pub(crate) fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("amount out of range")),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount {s:?}"))),
        Some(other) => Err(serde::de::Error::custom(format!(
            "invalid amount {other}"
        ))),
    }
}
