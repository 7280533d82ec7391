use anyhow::{Context, Result, anyhow};
use std::{path::PathBuf, time::Duration};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_SESSION_FILE: &str = ".discovery/session.json";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub session_file: PathBuf,
    pub log_dir: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same rules as [`Config::init`], reading keys from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = base_url(
            &lookup("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        )?;

        let session_file = lookup("SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

        let log_dir = lookup("LOG_DIR").unwrap_or_else(|| DEFAULT_LOG_DIR.to_string());

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .context("REQUEST_TIMEOUT_SECS must be a valid u64 integer")?;
                if secs == 0 {
                    return Err(anyhow!("REQUEST_TIMEOUT_SECS must be greater than zero"));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            api_base_url,
            session_file,
            log_dir,
            request_timeout,
        })
    }

    /// Applies command-line flags on top of the loaded values.
    pub fn with_overrides(
        mut self,
        api_base_url: Option<&str>,
        session_file: Option<PathBuf>,
    ) -> Result<Self> {
        if let Some(url) = api_base_url {
            self.api_base_url = base_url(url)?;
        }
        if let Some(path) = session_file {
            self.session_file = path;
        }
        Ok(self)
    }
}

fn base_url(raw: &str) -> Result<String> {
    let url = raw.trim().trim_end_matches('/').to_string();

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(anyhow!(
            "API_BASE_URL must start with http:// or https://, got '{}'",
            url
        ));
    }

    Ok(url)
}
