use std::sync::Arc;

use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::{
    commands::start,
    errors::{BotError, HandlerResult},
    handlers::{link_received, not_a_link_received},
    utils::{IncomingMessage, Route},
    youtube::AudioFetcher,
};

pub fn schema() -> UpdateHandler<BotError> {
    Update::filter_message()
        // Only text messages with something in them
        .filter_map(|msg: Message| IncomingMessage::from_message(&msg))
        .branch(
            dptree::filter(|msg: IncomingMessage| msg.route() == Route::YoutubeLink)
                .endpoint(on_link),
        )
        .branch(
            dptree::filter(|msg: IncomingMessage| msg.route() == Route::Start).endpoint(on_start),
        )
        .branch(dptree::endpoint(on_other_text))
}

async fn on_link(
    bot: Bot,
    msg: IncomingMessage,
    fetcher: Arc<dyn AudioFetcher>,
) -> HandlerResult {
    link_received(&bot, fetcher.as_ref(), &msg).await
}

async fn on_start(bot: Bot, msg: IncomingMessage) -> HandlerResult {
    start(&bot, &msg).await
}

async fn on_other_text(bot: Bot, msg: IncomingMessage) -> HandlerResult {
    not_a_link_received(&bot, &msg).await
}
