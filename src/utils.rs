use teloxide::types::{ChatId, Message, MessageId};
use url::Url;

const YOUTUBE_HOSTS: [&str; 3] = ["youtube.com", "www.youtube.com", "youtu.be"];

/// Exact host match only: `m.youtube.com`, `music.youtube.com` and links
/// buried inside longer text are not treated as YouTube links.
///
/// The host is compared as written in the text, so case and any `:port`
/// count. `Url` normalizes both away and is only used as a validity check.
pub fn is_youtube_link(text: &str) -> bool {
    if Url::parse(text).is_err() {
        return false;
    }

    raw_host(text).is_some_and(|host| YOUTUBE_HOSTS.contains(&host))
}

/// Authority of `scheme://[user@]host[:port]/...` exactly as typed.
fn raw_host(text: &str) -> Option<&str> {
    let (scheme, rest) = text.split_once("://")?;
    let mut chars = scheme.chars();
    let valid_scheme = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid_scheme {
        return None;
    }

    let authority = rest
        .split(|c| matches!(c, '/' | '?' | '#'))
        .next()
        .unwrap_or(rest);
    Some(match authority.rsplit_once('@') {
        Some((_, host)) => host,
        None => authority,
    })
}

/// Which reply an incoming text gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    YoutubeLink,
    Start,
    NotALink,
}

impl Route {
    pub fn classify(text: &str) -> Self {
        if is_youtube_link(text) {
            Route::YoutubeLink
        } else if text == "/start" {
            Route::Start
        } else {
            Route::NotALink
        }
    }
}

/// The parts of a Telegram message the handlers care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub chat_id: ChatId,
    pub message_id: MessageId,
    pub text: String,
}

impl IncomingMessage {
    /// `None` for messages without text (stickers, photos, ...) or with empty text.
    pub fn from_message(msg: &Message) -> Option<Self> {
        let text = msg.text().filter(|t| !t.is_empty())?;
        Some(Self {
            chat_id: msg.chat.id,
            message_id: msg.id,
            text: text.to_string(),
        })
    }

    pub fn route(&self) -> Route {
        Route::classify(&self.text)
    }
}
