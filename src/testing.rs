//! Test doubles for the handler seams.

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use async_trait::async_trait;
use teloxide::{
    ApiError, RequestError,
    types::{ChatId, MessageId},
};

use crate::{
    errors::{BotError, BotResult, FetchError},
    messenger::Messenger,
    temp_file::TempFile,
    utils::IncomingMessage,
    youtube::AudioFetcher,
};

pub const CHAT: ChatId = ChatId(42);

pub fn incoming(message_id: i32, text: &str) -> IncomingMessage {
    IncomingMessage {
        chat_id: CHAT,
        message_id: MessageId(message_id),
        text: text.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text {
        chat_id: ChatId,
        text: String,
    },
    Reply {
        chat_id: ChatId,
        reply_to: MessageId,
        text: String,
    },
    Audio {
        chat_id: ChatId,
        path: PathBuf,
        existed: bool,
    },
    Delete {
        chat_id: ChatId,
        message_id: MessageId,
    },
}

/// Records every outbound call in order. Sent messages get ids from 1000 up.
#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<Sent>>,
    fail_text: bool,
    fail_audio: bool,
    fail_delete: bool,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_text() -> Self {
        Self {
            fail_text: true,
            ..Self::default()
        }
    }

    pub fn failing_audio() -> Self {
        Self {
            fail_audio: true,
            ..Self::default()
        }
    }

    pub fn failing_delete() -> Self {
        Self {
            fail_delete: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, sent: Sent) -> MessageId {
        let mut log = self.sent.lock().unwrap();
        log.push(sent);
        MessageId(1000 + log.len() as i32)
    }
}

fn api_failure() -> BotError {
    BotError::TelegramError(RequestError::Api(ApiError::BotBlocked))
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> BotResult<MessageId> {
        if self.fail_text {
            return Err(api_failure());
        }
        Ok(self.record(Sent::Text {
            chat_id,
            text: text.to_string(),
        }))
    }

    async fn reply_text(
        &self,
        chat_id: ChatId,
        reply_to: MessageId,
        text: &str,
    ) -> BotResult<MessageId> {
        if self.fail_text {
            return Err(api_failure());
        }
        Ok(self.record(Sent::Reply {
            chat_id,
            reply_to,
            text: text.to_string(),
        }))
    }

    async fn send_audio(&self, chat_id: ChatId, path: &Path) -> BotResult<MessageId> {
        if self.fail_audio {
            return Err(api_failure());
        }
        Ok(self.record(Sent::Audio {
            chat_id,
            path: path.to_path_buf(),
            existed: path.exists(),
        }))
    }

    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> BotResult<()> {
        if self.fail_delete {
            return Err(api_failure());
        }
        self.record(Sent::Delete {
            chat_id,
            message_id,
        });
        Ok(())
    }
}

/// Writes a small file into its own temp dir, or fails with no audio formats.
pub struct StubFetcher {
    dir: tempfile::TempDir,
    succeed: bool,
    requested: Mutex<Vec<String>>,
    produced: Mutex<Vec<PathBuf>>,
}

impl StubFetcher {
    pub fn succeeding() -> Self {
        Self::new(true)
    }

    pub fn failing() -> Self {
        Self::new(false)
    }

    fn new(succeed: bool) -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            succeed,
            requested: Mutex::new(Vec::new()),
            produced: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    pub fn produced(&self) -> Vec<PathBuf> {
        self.produced.lock().unwrap().clone()
    }
}

#[async_trait]
impl AudioFetcher for StubFetcher {
    async fn fetch_audio(&self, video_ref: &str) -> Result<TempFile, FetchError> {
        self.requested.lock().unwrap().push(video_ref.to_string());
        if !self.succeed {
            return Err(FetchError::NoAudioFormatAvailable);
        }
        let (file, temp) = TempFile::create_in(self.dir.path()).map_err(FetchError::TempFile)?;
        drop(file);
        std::fs::write(temp.path(), b"audio").map_err(FetchError::Write)?;
        self.produced.lock().unwrap().push(temp.path().to_path_buf());
        Ok(temp)
    }
}
