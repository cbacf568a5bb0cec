use crate::{errors::HandlerResult, messenger::Messenger, utils::IncomingMessage};

pub const GREETING: &str = "Hi, I'm a Youtube downloader bot. \
    Send me a link to a Youtube video and I'll send you the audio";

pub async fn start<M: Messenger + ?Sized>(bot: &M, msg: &IncomingMessage) -> HandlerResult {
    if let Err(e) = bot.send_text(msg.chat_id, GREETING).await {
        log::error!("Failed to send greeting to chat {}: {}", msg.chat_id, e);
    }
    Ok(())
}
