use async_trait::async_trait;
use shared::{
    abstract_trait::UserServiceTrait,
    domain::response::{ApiResponse, user::DashboardResponse},
    utils::{AppError, Method, TracingContext},
};
use tracing::{error, info};

use super::{ApiClient, Auth, routes};

pub const DASHBOARD_FAILED: &str = "Failed to load dashboard";

#[derive(Debug, Clone)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn get_dashboard(&self) -> Result<ApiResponse<DashboardResponse>, AppError> {
        let tracing_ctx = TracingContext::start("GetDashboard", "user", Method::Get);

        let result = self
            .client
            .get::<DashboardResponse>(routes::DASHBOARD, Auth::Bearer)
            .await
            .and_then(|resp| resp.into_result(DASHBOARD_FAILED));

        match result {
            Ok(response) => {
                info!("Dashboard retrieved successfully");
                tracing_ctx.complete_success("Dashboard retrieved");
                Ok(response)
            }
            Err(err) => {
                error!("Failed to retrieve dashboard: {err}");
                tracing_ctx.complete_error(&format!("Failed to retrieve dashboard: {err}"));
                Err(err)
            }
        }
    }
}
