use std::fmt;

use thiserror::Error;

/// Errors produced while turning a video reference into a local audio file.
#[derive(Debug, Error)]
pub enum FetchError {
    /// yt-dlp could not be started at all
    #[error("failed to run {command}: {source}")]
    Extractor {
        command: String,
        #[source]
        source: std::io::Error,
    },
    /// yt-dlp ran but could not resolve the video
    #[error("failed to resolve video: {0}")]
    Resolve(String),
    #[error("failed to parse extractor output: {0}")]
    Metadata(#[from] serde_json::Error),
    #[error("no audio format available for this video")]
    NoAudioFormatAvailable,
    #[error("failed to create temp file: {0}")]
    TempFile(#[source] std::io::Error),
    #[error("failed to stream audio: {0}")]
    Stream(#[from] reqwest::Error),
    #[error("failed to write temp file: {0}")]
    Write(#[source] std::io::Error),
}

/// Errors a handler can hand back to the dispatcher.
#[derive(Debug)]
pub enum BotError {
    /// Downloading the audio failed
    Fetch(FetchError),
    /// A Telegram API call failed
    TelegramError(teloxide::RequestError),
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::Fetch(e) => write!(f, "YouTube download error: {}", e),
            BotError::TelegramError(e) => write!(f, "Telegram API error: {}", e),
        }
    }
}

impl std::error::Error for BotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BotError::Fetch(e) => Some(e),
            BotError::TelegramError(e) => Some(e),
        }
    }
}

impl From<FetchError> for BotError {
    fn from(err: FetchError) -> Self {
        BotError::Fetch(err)
    }
}

impl From<teloxide::RequestError> for BotError {
    fn from(err: teloxide::RequestError) -> Self {
        BotError::TelegramError(err)
    }
}

/// Result of bot operations
pub type BotResult<T> = Result<T, BotError>;

/// Result of an update handler
pub type HandlerResult = BotResult<()>;
