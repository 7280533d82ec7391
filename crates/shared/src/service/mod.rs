mod session;

pub use self::session::{SessionService, TOKEN_KEY, USER_KEY};
