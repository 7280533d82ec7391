use anyhow::{Context, Result};
use shared::{abstract_trait::DynSessionRepository, config::Config, repository::FileSessionRepository};
use std::sync::Arc;
use tracing::info;

use crate::di::DependenciesInject;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let repository: DynSessionRepository =
            Arc::new(FileSessionRepository::new(&config.session_file));

        Self::with_repository(config, repository)
    }

    /// Same wiring with a caller-chosen session store.
    pub fn with_repository(config: Config, repository: DynSessionRepository) -> Result<Self> {
        let di_container =
            DependenciesInject::new(&config.api_base_url, config.request_timeout, repository)
                .context("Failed to initialize dependency injection container")?;

        info!(
            "Client ready for {} (session file {})",
            config.api_base_url,
            config.session_file.display()
        );

        Ok(Self {
            config,
            di_container,
        })
    }
}
