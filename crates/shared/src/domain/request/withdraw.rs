use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::{
    domain::response::withdraw::WithdrawStatus,
    utils::{REQUIRED_CODE, rule_error, upi},
};

pub const WITHDRAW_STEP: i64 = 1000;
pub const MIN_WITHDRAW_AMOUNT: i64 = 1000;

/// Raw withdrawal form input, as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WithdrawForm {
    pub withdraw_amount: String,
    pub upi: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateWithdrawRequest {
    pub withdraw_amount: i64,
    pub upi: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateWithdrawStatusRequest {
    pub withdrawal_id: i64,
    pub status: WithdrawStatus,
}

impl WithdrawForm {
    /// Checks the form against `balance` and yields the request body.
    ///
    /// Amount rules run in a fixed order and stop at the first failure:
    /// required, numeric, minimum, balance, multiple of the step.
    pub fn validate(&self, balance: f64) -> Result<CreateWithdrawRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let amount = match self.check_amount(balance) {
            Ok(amount) => Some(amount),
            Err(error) => {
                errors.add("withdraw_amount", error);
                None
            }
        };

        let upi_value = self.upi.trim();
        if upi_value.is_empty() {
            errors.add(
                "upi",
                rule_error(REQUIRED_CODE, "UPI ID is required"),
            );
        } else if upi(upi_value).is_err() {
            errors.add("upi", rule_error("upi", "Please enter a valid UPI ID"));
        }

        match amount {
            Some(withdraw_amount) if errors.is_empty() => Ok(CreateWithdrawRequest {
                withdraw_amount,
                upi: upi_value.to_string(),
            }),
            _ => Err(errors),
        }
    }

    fn check_amount(&self, balance: f64) -> Result<i64, validator::ValidationError> {
        let raw = self.withdraw_amount.trim();
        if raw.is_empty() {
            return Err(rule_error(REQUIRED_CODE, "Withdrawal amount is required"));
        }

        let amount = raw
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .ok_or_else(|| rule_error("number", "Withdrawal amount must be a number"))?;

        if amount < MIN_WITHDRAW_AMOUNT as f64 {
            return Err(rule_error("min", "Minimum withdrawal amount is 1000 Rs"));
        }

        if amount > balance {
            return Err(rule_error("max", "Cannot withdraw more than your balance"));
        }

        if amount % WITHDRAW_STEP as f64 != 0.0 {
            return Err(rule_error("multiple", "Amount must be in multiples of 1000"));
        }

        // finite, positive and a multiple of the step, so integral
        Ok(amount as i64)
    }
}
