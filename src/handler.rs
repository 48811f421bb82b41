use crate::adapter::InteractionHandle;
use crate::commands::auth::base_permissions;
use crate::commands::{self, Invocation, Invoker};
use crate::interactions;
use crate::model::AppState;
use crate::status::{self, BotStatus};
use serenity::all::{ComponentInteractionDataKind, ConnectionStage, ShardStageUpdateEvent};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::Interaction;
use serenity::model::id::RoleId;
use serenity::model::permissions::Permissions;
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use tracing::{info, warn};

pub struct Handler {
    /// Ignore every guild but this one, when set.
    pub allowed_guild_id: Option<GuildId>,
}

impl Handler {
    pub fn accepts_guild(&self, guild_id: Option<GuildId>) -> bool {
        match (self.allowed_guild_id, guild_id) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(allowed), Some(id)) => allowed == id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot || !self.accepts_guild(msg.guild_id) {
            return;
        }
        let Some(state) = AppState::from_ctx(&ctx).await else {
            warn!(target: "handler", "missing_app_state");
            return;
        };
        let invocation = invocation_from_message(&ctx, &msg);
        commands::dispatch(&state, &invocation).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Component(component) = interaction else {
            return;
        };
        if !self.accepts_guild(component.guild_id) {
            return;
        }
        let ComponentInteractionDataKind::StringSelect { values } = &component.data.kind else {
            return;
        };
        let Some(state) = AppState::from_ctx(&ctx).await else {
            warn!(target: "handler", "missing_app_state");
            return;
        };
        let handle = InteractionHandle {
            id: component.id,
            token: component.token.clone(),
            channel_id: component.channel_id,
            user_id: component.user.id,
        };
        interactions::route(&state, &handle, &component.data.custom_id, values).await;
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(target: "handler", user = %ready.user.name, guilds = ready.guilds.len(), "Bot is online!");
        if let Some(state) = AppState::from_ctx(&ctx).await {
            status::report(state.messenger.as_ref(), BotStatus::Online).await;
        }
    }

    async fn shard_stage_update(&self, ctx: Context, event: ShardStageUpdateEvent) {
        if event.new != ConnectionStage::Disconnected {
            return;
        }
        warn!(target: "handler", shard = ?event.shard_id, old = ?event.old, "shard disconnected");
        if let Some(state) = AppState::from_ctx(&ctx).await {
            status::report(state.messenger.as_ref(), BotStatus::Offline).await;
        }
    }
}

/// Snapshot the author, roles and guild permissions of a message.
pub fn invocation_from_message(ctx: &Context, msg: &Message) -> Invocation {
    let roles: Vec<RoleId> = msg
        .member
        .as_ref()
        .map(|m| m.roles.clone())
        .unwrap_or_default();
    let permissions = msg
        .guild_id
        .and_then(|guild_id| {
            let guild = ctx.cache.guild(guild_id)?;
            let everyone = guild
                .roles
                .get(&RoleId::new(guild_id.get()))
                .map(|r| r.permissions)
                .unwrap_or_else(Permissions::empty);
            let member_roles = roles
                .iter()
                .filter_map(|id| guild.roles.get(id).map(|r| r.permissions));
            Some(base_permissions(
                guild.owner_id,
                msg.author.id,
                everyone,
                member_roles,
            ))
        })
        .unwrap_or_else(Permissions::empty);

    Invocation {
        author: Invoker {
            id: msg.author.id,
            tag: msg.author.tag(),
            bot: msg.author.bot,
            roles,
            permissions,
        },
        channel_id: msg.channel_id,
        message_id: msg.id,
        content: msg.content.clone(),
    }
}
