pub mod auth;
pub mod withdraw;

pub use self::auth::{LoginRequest, SignupRequest};

pub use self::withdraw::{
    CreateWithdrawRequest, MIN_WITHDRAW_AMOUNT, UpdateWithdrawStatusRequest, WITHDRAW_STEP,
    WithdrawForm,
};
