use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    model::{Identity, Session},
    utils::AppError,
};

pub type DynSessionRepository = Arc<dyn SessionRepositoryTrait + Send + Sync>;
pub type DynSessionService = Arc<dyn SessionServiceTrait + Send + Sync>;

/// Raw persistent key-value storage, the counterpart of browser local storage.
#[async_trait]
pub trait SessionRepositoryTrait {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    async fn remove(&self, keys: &[&str]) -> Result<(), AppError>;
}

#[async_trait]
pub trait SessionServiceTrait {
    async fn save(&self, token: &str, identity: Option<&Identity>) -> Result<(), AppError>;
    async fn load(&self) -> Result<Session, AppError>;
    async fn clear(&self) -> Result<(), AppError>;
    /// Decodes `token` for display and persists both halves.
    async fn login(&self, token: &str) -> Result<Session, AppError>;
}
