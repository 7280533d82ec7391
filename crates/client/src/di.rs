use crate::service::{ApiClient, AuthService, UserService, WithdrawService};
use shared::{
    abstract_trait::{
        DynAuthService, DynSessionRepository, DynSessionService, DynUserService,
        DynWithdrawService,
    },
    service::SessionService,
    utils::AppError,
};

use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct DependenciesInject {
    pub session_service: DynSessionService,
    pub auth_service: DynAuthService,
    pub user_service: DynUserService,
    pub withdraw_service: DynWithdrawService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("session_service", &"DynSessionService")
            .field("auth_service", &"DynAuthService")
            .field("user_service", &"DynUserService")
            .field("withdraw_service", &"DynWithdrawService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        session_repository: DynSessionRepository,
    ) -> Result<Self, AppError> {
        let session_service: DynSessionService =
            Arc::new(SessionService::new(session_repository));

        let client = ApiClient::new(base_url, timeout, session_service.clone())?;

        let auth_service: DynAuthService = Arc::new(AuthService::new(client.clone()));
        let user_service: DynUserService = Arc::new(UserService::new(client.clone()));
        let withdraw_service: DynWithdrawService = Arc::new(WithdrawService::new(client));

        Ok(Self {
            session_service,
            auth_service,
            user_service,
            withdraw_service,
        })
    }
}
