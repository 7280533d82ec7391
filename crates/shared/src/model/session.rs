use serde::{Deserialize, Serialize};

use super::identity::{Identity, is_admin};

/// Persisted client state. Either half may be absent independently.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<Identity>,
}

impl Session {
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.user.is_none()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        is_admin(self.user.as_ref())
    }
}
