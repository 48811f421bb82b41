//! [`Messenger`] backed by serenity's HTTP client and cache.
use super::{InteractionHandle, Messenger, Outgoing};
use crate::constants::{BULK_DELETE_MAX, BULK_DELETE_MAX_AGE};
use crate::error::BotResult;
use serenity::async_trait;
use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage, GetMessages,
};
use serenity::cache::Cache;
use serenity::http::Http;
use serenity::model::id::{ChannelId, MessageId};
use std::sync::Arc;

/// Ids young enough for a bulk delete at unix time `now`. Older messages are
/// skipped rather than failing the whole batch.
pub fn deletable(ids: impl IntoIterator<Item = MessageId>, now: i64) -> Vec<MessageId> {
    let cutoff = now - BULK_DELETE_MAX_AGE.as_secs() as i64;
    ids.into_iter()
        .filter(|id| id.created_at().unix_timestamp() > cutoff)
        .collect()
}

/// Which endpoint a batch goes to; the bulk endpoint wants at least two ids.
#[derive(Debug, PartialEq, Eq)]
pub enum DeletePlan<'a> {
    Nothing,
    Single(MessageId),
    Bulk(&'a [MessageId]),
}

impl<'a> DeletePlan<'a> {
    pub fn for_ids(ids: &'a [MessageId]) -> Self {
        match ids {
            [] => Self::Nothing,
            [single] => Self::Single(*single),
            many => Self::Bulk(many),
        }
    }
}

pub struct SerenityMessenger {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenityMessenger {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }
}

#[async_trait]
impl Messenger for SerenityMessenger {
    async fn resolve_channel(&self, id: ChannelId) -> Option<ChannelId> {
        if self.cache.channel(id).is_some() {
            return Some(id);
        }
        match self.http.get_channel(id).await {
            Ok(_) => Some(id),
            Err(e) => {
                tracing::debug!(target: "adapter", channel_id = %id, error = ?e, "channel lookup failed");
                None
            }
        }
    }

    async fn send(&self, channel: ChannelId, message: Outgoing) -> BotResult<MessageId> {
        let components = message.components();
        let mut builder = CreateMessage::new();
        if let Some(content) = message.content {
            builder = builder.content(content);
        }
        if let Some(embed) = message.embed {
            builder = builder.embed(embed);
        }
        if !components.is_empty() {
            builder = builder.components(components);
        }
        let sent = channel.send_message(&self.http, builder).await?;
        Ok(sent.id)
    }

    async fn reply(
        &self,
        channel: ChannelId,
        to: MessageId,
        content: &str,
    ) -> BotResult<MessageId> {
        let builder = CreateMessage::new()
            .content(content)
            .reference_message((channel, to));
        let sent = channel.send_message(&self.http, builder).await?;
        Ok(sent.id)
    }

    async fn delete(&self, channel: ChannelId, message: MessageId) -> BotResult<()> {
        channel.delete_message(&self.http, message).await?;
        Ok(())
    }

    async fn bulk_delete_recent(&self, channel: ChannelId, limit: u8) -> BotResult<usize> {
        let limit = limit.clamp(1, BULK_DELETE_MAX);
        let messages = channel
            .messages(&self.http, GetMessages::new().limit(limit))
            .await?;
        let now = chrono::Utc::now().timestamp();
        let ids = deletable(messages.iter().map(|m| m.id), now);
        match DeletePlan::for_ids(&ids) {
            DeletePlan::Nothing => {}
            DeletePlan::Single(id) => channel.delete_message(&self.http, id).await?,
            DeletePlan::Bulk(many) => channel.delete_messages(&self.http, many).await?,
        }
        tracing::debug!(target: "adapter", channel_id = %channel, fetched = messages.len(), deleted = ids.len(), "bulk delete");
        Ok(ids.len())
    }

    async fn respond_private(
        &self,
        interaction: &InteractionHandle,
        message: Outgoing,
    ) -> BotResult<()> {
        let components = message.components();
        let mut builder = CreateInteractionResponseMessage::new().ephemeral(true);
        if let Some(content) = message.content {
            builder = builder.content(content);
        }
        if let Some(embed) = message.embed {
            builder = builder.embed(embed);
        }
        if !components.is_empty() {
            builder = builder.components(components);
        }
        let response = CreateInteractionResponse::Message(builder);
        self.http
            .create_interaction_response(interaction.id, &interaction.token, &response, vec![])
            .await?;
        Ok(())
    }

    async fn acknowledge(&self, interaction: &InteractionHandle) -> BotResult<()> {
        self.http
            .create_interaction_response(
                interaction.id,
                &interaction.token,
                &CreateInteractionResponse::Acknowledge,
                vec![],
            )
            .await?;
        Ok(())
    }
}
