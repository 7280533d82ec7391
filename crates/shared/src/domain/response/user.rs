use serde::{Deserialize, Serialize};

use super::amount;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct DashboardResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub referral_code: Option<String>,
    #[serde(default, deserialize_with = "amount")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "amount")]
    pub total_withdraw_amount: f64,
}

impl DashboardResponse {
    /// Amount currently available to withdraw, as reported by the server.
    pub fn balance(&self) -> f64 {
        self.total_amount
    }
}
