use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    abstract_trait::{DynSessionRepository, SessionServiceTrait},
    model::{Identity, Session},
    utils::{AppError, decode_identity},
};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Clone)]
pub struct SessionService {
    repository: DynSessionRepository,
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("repository", &"DynSessionRepository")
            .finish()
    }
}

impl SessionService {
    pub fn new(repository: DynSessionRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SessionServiceTrait for SessionService {
    async fn save(&self, token: &str, identity: Option<&Identity>) -> Result<(), AppError> {
        self.repository.set(TOKEN_KEY, token).await?;

        match identity {
            Some(identity) => {
                let user = serde_json::to_string(identity)?;
                self.repository.set(USER_KEY, &user).await?;
            }
            // a stale identity must not outlive the token it came from
            None => self.repository.remove(&[USER_KEY]).await?,
        }

        info!("Session saved");
        Ok(())
    }

    async fn load(&self) -> Result<Session, AppError> {
        let token = self.repository.get(TOKEN_KEY).await?;

        let user = match self.repository.get(USER_KEY).await? {
            Some(raw) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => Some(identity),
                Err(e) => {
                    warn!("Stored identity is unreadable, ignoring it: {e}");
                    None
                }
            },
            None => None,
        };

        Ok(Session { token, user })
    }

    async fn clear(&self) -> Result<(), AppError> {
        self.repository.remove(&[TOKEN_KEY, USER_KEY]).await?;
        info!("Session cleared");
        Ok(())
    }

    async fn login(&self, token: &str) -> Result<Session, AppError> {
        let user = decode_identity(token);
        if user.is_none() {
            warn!("Token payload could not be decoded; continuing without identity");
        }

        self.save(token, user.as_ref()).await?;

        Ok(Session {
            token: Some(token.to_string()),
            user,
        })
    }
}
