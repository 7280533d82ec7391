use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::response::{ApiResponse, user::DashboardResponse},
    utils::AppError,
};

pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserServiceTrait {
    async fn get_dashboard(&self) -> Result<ApiResponse<DashboardResponse>, AppError>;
}
