use std::path::Path;

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{InputFile, MessageId, ReplyParameters},
};

use crate::errors::BotResult;

/// The outbound Telegram calls the handlers make.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> BotResult<MessageId>;

    async fn reply_text(
        &self,
        chat_id: ChatId,
        reply_to: MessageId,
        text: &str,
    ) -> BotResult<MessageId>;

    async fn send_audio(&self, chat_id: ChatId, path: &Path) -> BotResult<MessageId>;

    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> BotResult<()>;
}

#[async_trait]
impl Messenger for Bot {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> BotResult<MessageId> {
        let message = self.send_message(chat_id, text).await?;
        Ok(message.id)
    }

    async fn reply_text(
        &self,
        chat_id: ChatId,
        reply_to: MessageId,
        text: &str,
    ) -> BotResult<MessageId> {
        let message = self
            .send_message(chat_id, text)
            .reply_parameters(ReplyParameters::new(reply_to))
            .await?;
        Ok(message.id)
    }

    async fn send_audio(&self, chat_id: ChatId, path: &Path) -> BotResult<MessageId> {
        let message = Requester::send_audio(self, chat_id, InputFile::file(path)).await?;
        Ok(message.id)
    }

    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> BotResult<()> {
        Requester::delete_message(self, chat_id, message_id).await?;
        Ok(())
    }
}
