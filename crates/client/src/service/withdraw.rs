use async_trait::async_trait;
use serde_json::Value;
use shared::{
    abstract_trait::WithdrawServiceTrait,
    domain::{
        request::{CreateWithdrawRequest, UpdateWithdrawStatusRequest},
        response::{ApiResponse, withdraw::WithdrawalResponse},
    },
    utils::{AppError, Method, TracingContext},
};
use tracing::{error, info};

use super::{ApiClient, Auth, routes};

pub const WITHDRAW_FAILED: &str = "Withdrawal request failed. Please try again.";
pub const WITHDRAWALS_FAILED: &str = "Failed to fetch withdrawals";

pub const WITHDRAWALS_NETWORK: &str = "Network error while fetching withdrawals";
pub const UPDATE_STATUS_NETWORK: &str = "Network error while updating status";

#[derive(Debug, Clone)]
pub struct WithdrawService {
    client: ApiClient,
}

impl WithdrawService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WithdrawServiceTrait for WithdrawService {
    async fn create_withdraw(
        &self,
        input: &CreateWithdrawRequest,
    ) -> Result<ApiResponse<Value>, AppError> {
        info!(
            "Requesting withdrawal of {} to {}",
            input.withdraw_amount, input.upi
        );

        let tracing_ctx = TracingContext::start("CreateWithdraw", "withdraw", Method::Post);

        let result = self
            .client
            .post::<_, Value>(routes::WITHDRAW, input, Auth::Bearer)
            .await
            .map_err(|e| e.with_network_message(WITHDRAW_FAILED))
            .and_then(|resp| resp.into_result(WITHDRAW_FAILED));

        match result {
            Ok(response) => {
                info!("Withdrawal of {} requested", input.withdraw_amount);
                tracing_ctx.complete_success(&format!(
                    "Withdrawal of {} requested",
                    input.withdraw_amount
                ));
                Ok(response)
            }
            Err(err) => {
                error!("Failed to request withdrawal: {err}");
                tracing_ctx.complete_error(&format!("Failed to request withdrawal: {err}"));
                Err(err)
            }
        }
    }

    async fn get_withdrawals(&self) -> Result<ApiResponse<Vec<WithdrawalResponse>>, AppError> {
        let tracing_ctx = TracingContext::start("GetWithdrawals", "withdraw", Method::Get);

        let result = self
            .client
            .get::<Vec<WithdrawalResponse>>(routes::WITHDRAWALS_LIST, Auth::Bearer)
            .await
            .map_err(|e| e.with_network_message(WITHDRAWALS_NETWORK))
            .and_then(|resp| resp.into_result(WITHDRAWALS_FAILED));

        match result {
            Ok(response) => {
                let count = response.data.as_ref().map_or(0, Vec::len);
                info!("Withdrawals retrieved successfully ({count} items)");
                tracing_ctx.complete_success(&format!("Retrieved {count} withdrawals"));
                Ok(response)
            }
            Err(err) => {
                error!("Failed to retrieve withdrawals: {err}");
                tracing_ctx.complete_error(&format!("Failed to retrieve withdrawals: {err}"));
                Err(err)
            }
        }
    }

    async fn update_withdraw_status(
        &self,
        input: &UpdateWithdrawStatusRequest,
    ) -> Result<ApiResponse<Value>, AppError> {
        info!(
            "Updating withdrawal {} to {}",
            input.withdrawal_id, input.status
        );

        let tracing_ctx = TracingContext::start("UpdateWithdrawStatus", "withdraw", Method::Post);
        let fallback = format!("Failed to update withdrawal to {}", input.status.label());

        let result = self
            .client
            .post::<_, Value>(routes::WITHDRAW_UPDATE_STATUS, input, Auth::Bearer)
            .await
            .map_err(|e| e.with_network_message(UPDATE_STATUS_NETWORK))
            .and_then(|resp| resp.into_result(&fallback));

        match result {
            Ok(response) => {
                info!(
                    "Withdrawal {} marked {}",
                    input.withdrawal_id, input.status
                );
                tracing_ctx.complete_success(&format!(
                    "Withdrawal {} marked {}",
                    input.withdrawal_id, input.status
                ));
                Ok(response)
            }
            Err(err) => {
                error!(
                    "Failed to update withdrawal {}: {err}",
                    input.withdrawal_id
                );
                tracing_ctx.complete_error(&format!(
                    "Failed to update withdrawal {}: {err}",
                    input.withdrawal_id
                ));
                Err(err)
            }
        }
    }
}
