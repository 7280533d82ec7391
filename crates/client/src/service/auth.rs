use async_trait::async_trait;
use serde_json::Value;
use shared::{
    abstract_trait::AuthServiceTrait,
    domain::{
        request::{LoginRequest, SignupRequest},
        response::{ApiResponse, auth::LoginResponse},
    },
    utils::{AppError, Method, TracingContext},
};
use tracing::{error, info};

use super::{ApiClient, Auth, routes};

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const SIGNUP_FAILED: &str = "Signup failed. Please try again.";

#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login_user(
        &self,
        input: &LoginRequest,
    ) -> Result<ApiResponse<LoginResponse>, AppError> {
        info!("Logging in user: {}", input.email);

        let tracing_ctx = TracingContext::start("LoginUser", "auth", Method::Post);

        let result = self
            .client
            .post::<_, LoginResponse>(routes::LOGIN, input, Auth::Anonymous)
            .await
            .and_then(|resp| resp.into_result(LOGIN_FAILED))
            .and_then(|resp| match resp.data {
                Some(_) => Ok(resp),
                None => Err(AppError::ConnectivityError(
                    "login succeeded without a token".to_string(),
                )),
            });

        match result {
            Ok(response) => {
                info!("User {} logged in successfully", input.email);
                tracing_ctx.complete_success(&format!("User {} logged in", input.email));
                Ok(response)
            }
            Err(err) => {
                error!("Failed to login user {}: {err}", input.email);
                tracing_ctx.complete_error(&format!("Login failed for {}: {err}", input.email));
                Err(err)
            }
        }
    }

    async fn signup_user(&self, input: &SignupRequest) -> Result<ApiResponse<Value>, AppError> {
        info!("Signing up user: {}", input.email);

        let tracing_ctx = TracingContext::start("SignupUser", "auth", Method::Post);

        let result = self
            .client
            .post::<_, Value>(routes::SIGNUP, input, Auth::Anonymous)
            .await
            .and_then(|resp| resp.into_result(SIGNUP_FAILED));

        match result {
            Ok(response) => {
                info!("User {} signed up successfully", input.email);
                tracing_ctx.complete_success(&format!("User {} signed up", input.email));
                Ok(response)
            }
            Err(err) => {
                error!("Failed to sign up user {}: {err}", input.email);
                tracing_ctx.complete_error(&format!("Signup failed for {}: {err}", input.email));
                Err(err)
            }
        }
    }
}
