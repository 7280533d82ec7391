use core::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::amount;

/// Server-owned lifecycle of a withdrawal, encoded as an integer on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawStatus {
    Pending,
    Approved,
    Rejected,
    Unknown(i64),
}

impl WithdrawStatus {
    pub fn code(self) -> i64 {
        match self {
            WithdrawStatus::Pending => 1,
            WithdrawStatus::Approved => 2,
            WithdrawStatus::Rejected => 3,
            WithdrawStatus::Unknown(code) => code,
        }
    }

    pub fn from_code(code: i64) -> Self {
        match code {
            1 => WithdrawStatus::Pending,
            2 => WithdrawStatus::Approved,
            3 => WithdrawStatus::Rejected,
            other => WithdrawStatus::Unknown(other),
        }
    }

    pub fn is_pending(self) -> bool {
        self == WithdrawStatus::Pending
    }

    /// Badge text shown next to a withdrawal.
    pub fn label(self) -> &'static str {
        match self {
            WithdrawStatus::Pending => "Pending",
            WithdrawStatus::Approved => "Approved",
            WithdrawStatus::Rejected => "Rejected",
            WithdrawStatus::Unknown(_) => "Unknown",
        }
    }

    /// Verb used in notices, e.g. "Withdrawal approved successfully".
    pub fn verb(self) -> &'static str {
        match self {
            WithdrawStatus::Approved => "approved",
            WithdrawStatus::Rejected => "rejected",
            WithdrawStatus::Pending => "reset",
            WithdrawStatus::Unknown(_) => "updated",
        }
    }
}

impl fmt::Display for WithdrawStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for WithdrawStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for WithdrawStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| serde::de::Error::custom(format!("invalid status {n}")))?,
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("invalid status {s:?}")))?,
            other => {
                return Err(serde::de::Error::custom(format!("invalid status {other}")));
            }
        };
        Ok(WithdrawStatus::from_code(code))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct WithdrawalUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WithdrawalResponse {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "amount")]
    pub withdraw_amount: f64,
    #[serde(default)]
    pub upi: Option<String>,
    pub status: WithdrawStatus,
    #[serde(default)]
    pub payment_date: Option<String>,
    #[serde(default, rename = "User")]
    pub user: Option<WithdrawalUser>,
}

impl WithdrawalResponse {
    pub fn user_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.name.as_deref())
            .unwrap_or("Unknown")
    }

    pub fn user_email(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.email.as_deref())
            .unwrap_or("No email")
    }

    pub fn upi_or_placeholder(&self) -> &str {
        self.upi
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or("No UPI")
    }
}
