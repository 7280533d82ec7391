use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::{
    domain::{
        request::{LoginRequest, SignupRequest},
        response::{ApiResponse, auth::LoginResponse},
    },
    utils::AppError,
};

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn login_user(
        &self,
        input: &LoginRequest,
    ) -> Result<ApiResponse<LoginResponse>, AppError>;
    async fn signup_user(&self, input: &SignupRequest) -> Result<ApiResponse<Value>, AppError>;
}
