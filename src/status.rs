//! Online/offline notices in the status channel.
use crate::adapter::{Messenger, Outgoing};
use crate::constants::STATUS_CHANNEL_ID;
use serenity::model::id::ChannelId;
use std::fmt;
use tracing::error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotStatus {
    Online,
    Offline,
}

impl fmt::Display for BotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotStatus::Online => write!(f, "online"),
            BotStatus::Offline => write!(f, "offline"),
        }
    }
}

pub fn status_line(status: BotStatus) -> String {
    format!("Bot is currently **{}**.", status)
}

pub async fn report(messenger: &dyn Messenger, status: BotStatus) {
    announce(messenger, &status_line(status)).await;
}

/// Post free-form text to the status channel. Failures only reach the console.
pub async fn announce(messenger: &dyn Messenger, text: &str) {
    let id = ChannelId::new(STATUS_CHANNEL_ID);
    let Some(channel) = messenger.resolve_channel(id).await else {
        error!(target: "status", channel_id = %id, "Status channel with ID {} not found.", id);
        return;
    };
    if let Err(e) = messenger.send(channel, Outgoing::text(text)).await {
        error!(target: "status", channel_id = %id, error = %e, "failed to post status");
    }
}
