mod commands;
mod config;
mod errors;
mod handlers;
mod messenger;
mod schema;
mod temp_file;
#[cfg(test)]
mod testing;
mod utils;
mod youtube;

use std::sync::Arc;

use teloxide::{prelude::*, update_listeners::Polling};

use crate::{
    config::Config,
    schema::schema,
    youtube::{AudioFetcher, YtDlpFetcher},
};

#[tokio::main]
async fn main() {
    // Read config first so RUST_LOG can come from .env
    let config = Config::from_env();
    pretty_env_logger::init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    log::info!("Starting audio bot...");
    log::debug!("{:?}", config);

    let bot = Bot::new(&config.bot_token);

    match bot.get_me().await {
        Ok(me) => log::info!("Authorized as @{}", me.username()),
        Err(e) => {
            log::error!("Failed to authorize with Telegram: {}", e);
            std::process::exit(1);
        }
    }

    let fetcher: Arc<dyn AudioFetcher> = Arc::new(YtDlpFetcher::new(&config));

    let listener = Polling::builder(bot.clone())
        .timeout(config.poll_timeout)
        .delete_webhook()
        .await
        .build();

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![fetcher])
        // One queue for every chat: updates are handled strictly one after another
        .distribution_function(|_| Some(()))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    log::info!("Bot stopped");
}
