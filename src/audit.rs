//! Command audit trail posted to the log channel.
use crate::adapter::{Messenger, Outgoing};
use crate::commands::Invoker;
use crate::constants::LOG_CHANNEL_ID;
use chrono::{DateTime, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Tz;
use serenity::model::id::{ChannelId, UserId};
use tracing::error;

/// One audit line; `at` is rendered as US civil time, 24h clock.
pub fn format_entry(at: DateTime<Tz>, command: &str, tag: &str, user_id: UserId) -> String {
    format!(
        "**{} EST** - Command: `{}` executed by: **{}** (ID: {})",
        at.format("%-m/%-d/%Y, %H:%M:%S"),
        command,
        tag,
        user_id
    )
}

pub async fn record(messenger: &dyn Messenger, command: &str, author: &Invoker) {
    let id = ChannelId::new(LOG_CHANNEL_ID);
    let Some(channel) = messenger.resolve_channel(id).await else {
        error!(target: "audit", channel_id = %id, "Log channel with ID {} not found.", id);
        return;
    };
    let now = Utc::now().with_timezone(&New_York);
    let line = format_entry(now, command, &author.tag, author.id);
    if let Err(e) = messenger.send(channel, Outgoing::text(line)).await {
        error!(target: "audit", command, error = %e, "failed to write audit entry");
    }
}
