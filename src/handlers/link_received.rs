use crate::{
    errors::HandlerResult, messenger::Messenger, utils::IncomingMessage, youtube::AudioFetcher,
};

pub const PROCESSING: &str = "Processing...";

/// Download the audio behind a YouTube link and send it back to the chat.
///
/// Failures are logged and never handed to the dispatcher. After a failed
/// download or upload the user keeps the "Processing..." notice and gets
/// nothing else. The downloaded file is removed as soon as the upload
/// attempt finishes, whatever its outcome.
pub async fn link_received<M: Messenger + ?Sized>(
    bot: &M,
    fetcher: &dyn AudioFetcher,
    msg: &IncomingMessage,
) -> HandlerResult {
    let notice = match bot.send_text(msg.chat_id, PROCESSING).await {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!(
                "Could not send processing notice to chat {}: {}",
                msg.chat_id,
                e
            );
            None
        }
    };

    // The whole message text goes to yt-dlp, it understands full URLs.
    let audio = match fetcher.fetch_audio(&msg.text).await {
        Ok(audio) => audio,
        Err(e) => {
            log::error!("Error downloading audio for chat {}: {}", msg.chat_id, e);
            return Ok(());
        }
    };

    log::info!(
        "Sending audio {} to chat {}",
        audio.path().display(),
        msg.chat_id
    );
    let sent = bot.send_audio(msg.chat_id, audio.path()).await;
    drop(audio);
    if let Err(e) = sent {
        log::error!("Failed to send audio to chat {}: {}", msg.chat_id, e);
        return Ok(());
    }

    if let Some(notice) = notice {
        if let Err(e) = bot.delete_message(msg.chat_id, notice).await {
            log::warn!(
                "Could not delete processing notice in chat {}: {}",
                msg.chat_id,
                e
            );
        }
    }

    Ok(())
}
