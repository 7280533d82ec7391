mod auth;
mod user;
mod withdraw;

pub use self::auth::AuthService;
pub use self::user::UserService;
pub use self::withdraw::WithdrawService;

use reqwest::{Client, RequestBuilder, header};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use shared::{
    abstract_trait::DynSessionService, domain::response::ApiResponse, utils::AppError,
};
use std::time::Duration;
use tracing::debug;

pub mod routes {
    pub const LOGIN: &str = "/api/auth/login";
    pub const SIGNUP: &str = "/api/auth/signup";
    pub const DASHBOARD: &str = "/api/user/dashboard";
    pub const WITHDRAW: &str = "/api/user/withdraw";
    pub const WITHDRAWALS_LIST: &str = "/api/user/withdrawals-list";
    pub const WITHDRAW_UPDATE_STATUS: &str = "/api/user/withdraw-update-status";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Anonymous,
    Bearer,
}

/// JSON transport shared by every service.
///
/// Reads the bearer token from the session at call time, so a login or
/// logout is picked up by the very next request.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: DynSessionService,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &"DynSessionService")
            .finish()
    }
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        session: DynSessionService,
    ) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T>(&self, path: &str, auth: Auth) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned,
    {
        let builder = self.http.get(self.url(path));
        self.send(builder, auth).await
    }

    pub async fn post<B, T>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<ApiResponse<T>, AppError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let builder = self.http.post(self.url(path)).json(body);
        self.send(builder, auth).await
    }

    async fn send<T>(&self, builder: RequestBuilder, auth: Auth) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned,
    {
        let mut builder = builder.header(header::ACCEPT, "application/json");

        if auth == Auth::Bearer {
            if let Some(token) = self.session.load().await?.token {
                builder = builder.bearer_auth(token);
            }
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::ConnectivityError(e.to_string()))?;

        let http_status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::ConnectivityError(e.to_string()))?;

        debug!("HTTP {http_status} with {} byte body", body.len());

        let raw: ApiResponse<Value> = serde_json::from_slice(&body).map_err(|e| {
            AppError::ConnectivityError(format!("unreadable response (HTTP {http_status}): {e}"))
        })?;

        // `data` only matters once the server reports success
        let data = match raw.data {
            Some(value) if raw.is_success() && !value.is_null() => {
                Some(serde_json::from_value(value).map_err(|e| {
                    AppError::ConnectivityError(format!("unexpected response data: {e}"))
                })?)
            }
            _ => None,
        };

        Ok(ApiResponse {
            status: raw.status,
            message: raw.message,
            data,
        })
    }
}
