use shared::{
    abstract_trait::DynSessionService,
    model::{Identity, Session, is_admin},
    utils::AppError,
};
use std::fmt;
use tracing::info;

use super::{Notice, Route};

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

/// Top navigation. Branches on [`is_admin`] alone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Header {
    identity: Option<Identity>,
    links: Vec<NavLink>,
}

impl Header {
    pub fn for_identity(identity: Option<&Identity>) -> Self {
        let mut links = vec![
            NavLink {
                label: "Dashboard",
                route: Route::Dashboard,
            },
            NavLink {
                label: "Payments",
                route: Route::Payments { balance: None },
            },
        ];

        if is_admin(identity) {
            links.push(NavLink {
                label: "Withdraw List",
                route: Route::WithdrawList,
            });
        }

        Self {
            identity: identity.cloned(),
            links,
        }
    }

    pub fn for_session(session: &Session) -> Self {
        Self::for_identity(session.user.as_ref())
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn shows_admin_link(&self) -> bool {
        self.links.iter().any(|l| l.route == Route::WithdrawList)
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Drops the stored session. Safe to call with nothing stored.
    pub async fn logout(session_service: &DynSessionService) -> Result<(Notice, Route), AppError> {
        session_service.clear().await?;
        info!("User logged out");
        Ok((
            Notice::Success("Logged out successfully".to_string()),
            Route::Login,
        ))
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Discovery")?;
        for link in &self.links {
            write!(f, " | {}", link.label)?;
        }
        writeln!(f, " | Logout")
    }
}
