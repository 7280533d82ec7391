mod myconfig;

pub use self::myconfig::{
    Config, DEFAULT_API_BASE_URL, DEFAULT_LOG_DIR, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SESSION_FILE,
};
