//! The messaging capability the command handlers are written against.
//!
//! Handlers only ever talk to Discord through [`Messenger`]; the gateway side
//! (events, intents, sharding) stays in `handler.rs`. The production
//! implementation lives in [`discord`].

pub mod discord;

use crate::error::BotResult;
use crate::ui::SelectMenu;
use serenity::async_trait;
use serenity::builder::{CreateActionRow, CreateEmbed};
use serenity::model::id::{ChannelId, InteractionId, MessageId, UserId};

pub use discord::SerenityMessenger;

/// A message to post: any mix of text, one embed and one select menu.
#[derive(Clone, Debug, Default)]
pub struct Outgoing {
    pub content: Option<String>,
    pub embed: Option<CreateEmbed>,
    pub menu: Option<SelectMenu>,
}

impl Outgoing {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn embed(embed: CreateEmbed) -> Self {
        Self {
            embed: Some(embed),
            ..Self::default()
        }
    }

    pub fn with_menu(mut self, menu: SelectMenu) -> Self {
        self.menu = Some(menu);
        self
    }

    pub fn components(&self) -> Vec<CreateActionRow> {
        self.menu.iter().map(SelectMenu::to_action_row).collect()
    }
}

/// Enough of a component interaction to answer it later.
#[derive(Clone, Debug)]
pub struct InteractionHandle {
    pub id: InteractionId,
    pub token: String,
    pub channel_id: ChannelId,
    pub user_id: UserId,
}

#[async_trait]
pub trait Messenger: Send + Sync {
    /// `None` when the channel is unknown or not visible to the bot.
    async fn resolve_channel(&self, id: ChannelId) -> Option<ChannelId>;
    async fn send(&self, channel: ChannelId, message: Outgoing) -> BotResult<MessageId>;
    async fn reply(&self, channel: ChannelId, to: MessageId, content: &str)
    -> BotResult<MessageId>;
    async fn delete(&self, channel: ChannelId, message: MessageId) -> BotResult<()>;
    /// Delete up to `limit` (max 100) of the newest messages younger than the
    /// bulk-delete age ceiling. Returns how many were deleted.
    async fn bulk_delete_recent(&self, channel: ChannelId, limit: u8) -> BotResult<usize>;
    /// Ephemeral response visible only to the interacting user.
    async fn respond_private(
        &self,
        interaction: &InteractionHandle,
        message: Outgoing,
    ) -> BotResult<()>;
    /// Acknowledge a component interaction without changing anything.
    async fn acknowledge(&self, interaction: &InteractionHandle) -> BotResult<()>;
}
