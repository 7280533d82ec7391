mod session;

pub use self::session::{FileSessionRepository, MemorySessionRepository};
