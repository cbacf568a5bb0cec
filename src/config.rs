use std::{
    env, fmt,
    path::{Path, PathBuf},
    time::Duration,
};

use thiserror::Error;

const DEFAULT_POLL_TIMEOUT_SECS: u64 = 60;
const DEFAULT_YTDLP_PATH: &str = "yt-dlp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TELEGRAM_BOT_TOKEN is required")]
    MissingToken,
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

/// Settings read once at startup and handed to the dispatcher.
#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub poll_timeout: Duration,
    pub ytdlp_path: String,
    pub download_dir: PathBuf,
}

impl Config {
    /// Load `.env` (if there is one) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv()?;
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bot_token = get("TELEGRAM_BOT_TOKEN")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let poll_timeout = match get("POLL_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidValue {
                    name: "POLL_TIMEOUT_SECS",
                    value,
                })?,
            None => Duration::from_secs(DEFAULT_POLL_TIMEOUT_SECS),
        };

        let ytdlp_path = get("YTDLP_PATH")
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_YTDLP_PATH.to_string());

        let download_dir = get("DOWNLOAD_DIR")
            .filter(|d| !d.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(env::temp_dir);

        Ok(Self {
            bot_token,
            poll_timeout,
            ytdlp_path,
            download_dir,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("poll_timeout", &self.poll_timeout)
            .field("ytdlp_path", &self.ytdlp_path)
            .field("download_dir", &self.download_dir)
            .finish()
    }
}

fn load_dotenv() -> Result<(), ConfigError> {
    load_dotenv_from(Path::new(".env"))
}

/// A missing `.env` is fine, a broken one is not.
fn load_dotenv_from(path: &Path) -> Result<(), ConfigError> {
    match dotenvy::from_path(path) {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}
