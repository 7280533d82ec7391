pub mod auth;
pub mod session;
pub mod user;
pub mod withdraw;

pub use self::auth::{AuthServiceTrait, DynAuthService};

pub use self::session::{
    DynSessionRepository, DynSessionService, SessionRepositoryTrait, SessionServiceTrait,
};

pub use self::user::{DynUserService, UserServiceTrait};

pub use self::withdraw::{DynWithdrawService, WithdrawServiceTrait};
