mod auth;
mod user;
mod withdraw;

use crate::{state::AppState, view::Route};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use self::auth::{login_handler, logout_handler, signup_handler, whoami_handler};
pub use self::user::dashboard_handler;
pub use self::withdraw::{
    create_withdraw_handler, get_withdrawals_handler, update_withdraw_status_handler,
};

#[derive(Parser, Debug)]
#[command(
    name = "discovery",
    version,
    about = "Discovery referral payouts: sign in, check earnings, request and review withdrawals"
)]
pub struct Cli {
    /// Overrides API_BASE_URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Overrides SESSION_FILE.
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session token
    Login(LoginArgs),
    /// Create a new account
    Signup(SignupArgs),
    /// Show earnings and referral code
    Dashboard,
    /// Request a withdrawal to a UPI ID
    Withdraw(WithdrawArgs),
    /// List every withdrawal request (admin)
    Withdrawals,
    /// Approve a pending withdrawal (admin)
    Approve { withdrawal_id: i64 },
    /// Reject a pending withdrawal (admin)
    Reject { withdrawal_id: i64 },
    /// Forget the stored session
    Logout,
    /// Print the identity read from the stored token
    Whoami,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Login(_) => "login",
            Commands::Signup(_) => "signup",
            Commands::Dashboard => "dashboard",
            Commands::Withdraw(_) => "withdraw",
            Commands::Withdrawals => "withdrawals",
            Commands::Approve { .. } => "approve",
            Commands::Reject { .. } => "reject",
            Commands::Logout => "logout",
            Commands::Whoami => "whoami",
        }
    }
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "DISCOVERY_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct SignupArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "DISCOVERY_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct WithdrawArgs {
    #[arg(long)]
    pub amount: String,
    #[arg(long)]
    pub upi: String,
}

/// What a command printed and whether it achieved what was asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub screen: String,
    pub ok: bool,
}

impl Output {
    pub fn ok(screen: impl Into<String>) -> Self {
        Self {
            screen: screen.into(),
            ok: true,
        }
    }

    pub fn failed(screen: impl Into<String>) -> Self {
        Self {
            screen: screen.into(),
            ok: false,
        }
    }

    fn then(mut self, next: Output) -> Self {
        self.screen.push('\n');
        self.screen.push_str(&next.screen);
        self.ok &= next.ok;
        self
    }
}

pub struct AppRouter;

impl AppRouter {
    pub async fn dispatch(state: &AppState, command: Commands) -> Output {
        match command {
            Commands::Login(args) => login_handler(state, args).await,
            Commands::Signup(args) => signup_handler(state, args).await,
            Commands::Dashboard => dashboard_handler(state).await,
            Commands::Withdraw(args) => create_withdraw_handler(state, args).await,
            Commands::Withdrawals => get_withdrawals_handler(state).await,
            Commands::Approve { withdrawal_id } => {
                update_withdraw_status_handler(state, withdrawal_id, true).await
            }
            Commands::Reject { withdrawal_id } => {
                update_withdraw_status_handler(state, withdrawal_id, false).await
            }
            Commands::Logout => logout_handler(state).await,
            Commands::Whoami => whoami_handler(state).await,
        }
    }

    /// Renders the screen a view asked to move to.
    pub(crate) async fn follow(state: &AppState, from: Output, route: Option<&Route>) -> Output {
        match route {
            Some(Route::Dashboard) => from.then(dashboard_handler(state).await),
            Some(Route::Login) => from.then(Output::ok("Run `discovery login` to sign in.")),
            _ => from,
        }
    }
}
