//! Transient confirmations: post a message, delete it again after a short delay.
use crate::adapter::{Messenger, Outgoing};
use crate::constants::CONFIRMATION_DELAY;
use crate::error::BotResult;
use serenity::model::id::{ChannelId, MessageId};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::warn;

/// The scheduled deletion of a confirmation message.
///
/// Dropping the handle leaves the deletion running; [`cancel`](Self::cancel)
/// keeps the message in place.
pub struct PendingDeletion {
    message_id: MessageId,
    task: JoinHandle<()>,
}

impl PendingDeletion {
    pub fn message_id(&self) -> MessageId {
        self.message_id
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub fn cancel(self) {
        self.task.abort();
    }

    /// Wait until the deletion has run.
    pub async fn finish(self) {
        if let Err(e) = self.task.await {
            warn!(target: "confirm", message_id = %self.message_id, error = ?e, "deferred deletion did not complete");
        }
    }
}

pub async fn send_transient(
    messenger: Arc<dyn Messenger>,
    channel: ChannelId,
    content: &str,
) -> BotResult<PendingDeletion> {
    let message_id = messenger.send(channel, Outgoing::text(content)).await?;
    let task = tokio::spawn(async move {
        tokio::time::sleep(CONFIRMATION_DELAY).await;
        if let Err(e) = messenger.delete(channel, message_id).await {
            warn!(target: "confirm", channel_id = %channel, %message_id, error = %e, "Failed to delete confirmation message");
        }
    });
    Ok(PendingDeletion { message_id, task })
}
