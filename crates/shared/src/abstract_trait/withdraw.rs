use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::{
    domain::{
        request::{CreateWithdrawRequest, UpdateWithdrawStatusRequest},
        response::{ApiResponse, withdraw::WithdrawalResponse},
    },
    utils::AppError,
};

pub type DynWithdrawService = Arc<dyn WithdrawServiceTrait + Send + Sync>;

#[async_trait]
pub trait WithdrawServiceTrait {
    async fn create_withdraw(
        &self,
        input: &CreateWithdrawRequest,
    ) -> Result<ApiResponse<Value>, AppError>;
    async fn get_withdrawals(&self) -> Result<ApiResponse<Vec<WithdrawalResponse>>, AppError>;
    async fn update_withdraw_status(
        &self,
        input: &UpdateWithdrawStatusRequest,
    ) -> Result<ApiResponse<Value>, AppError>;
}
