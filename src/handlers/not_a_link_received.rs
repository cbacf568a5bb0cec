use crate::{errors::HandlerResult, messenger::Messenger, utils::IncomingMessage};

pub const NOT_A_LINK: &str = "The link that you sent is not a Youtube link. \
    Send me a link to a Youtube video and I'll send you the audio";

pub async fn not_a_link_received<M: Messenger + ?Sized>(
    bot: &M,
    msg: &IncomingMessage,
) -> HandlerResult {
    if let Err(e) = bot
        .reply_text(msg.chat_id, msg.message_id, NOT_A_LINK)
        .await
    {
        log::error!("Failed to send rejection to chat {}: {}", msg.chat_id, e);
    }
    Ok(())
}
