pub mod identity;
pub mod session;

pub use self::identity::{ADMIN_ROLE_ID, Identity, is_admin};
pub use self::session::Session;
