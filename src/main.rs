use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use yen_exchange_bot::adapter::SerenityMessenger;
use yen_exchange_bot::config::BotConfig;
use yen_exchange_bot::handler::Handler;
use yen_exchange_bot::process::SystemProcess;
use yen_exchange_bot::AppState;

#[tokio::main]
async fn main() {
    // A missing .env is fine as long as the variables come from the environment.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = match Client::builder(&config.token, intents)
        .event_handler(Handler {
            allowed_guild_id: config.guild_id,
        })
        .await
    {
        Ok(client) => client,
        Err(e) => {
            error!(error = ?e, "Error creating the Discord client.");
            std::process::exit(1);
        }
    };

    {
        let messenger = Arc::new(SerenityMessenger::new(
            client.http.clone(),
            client.cache.clone(),
        ));
        let state = AppState::new(messenger, Arc::new(SystemProcess), config.actions.clone());
        let mut data = client.data.write().await;
        data.insert::<AppState>(Arc::new(state));
    }

    info!(guild_id = ?config.guild_id, "connecting");
    if let Err(why) = client.start().await {
        error!(error = ?why, "Client error");
        std::process::exit(1);
    }
}
