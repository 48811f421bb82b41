//! Prefix command parsing and dispatch.
//!
//! Every message is reduced to an [`Invocation`]; the leading token picks a
//! [`Command`], its [`AuthLevel`] is checked once here, and the matching handler
//! runs. Unknown tokens and messages from bots are dropped without a trace.

pub mod auth;
pub mod cmds;
pub mod control;
pub mod exchange;
pub mod moderation;

use crate::constants::REQUIRED_ROLE_ID;
use crate::model::AppState;
use auth::AuthLevel;
use serenity::model::id::{ChannelId, MessageId, RoleId, UserId};
use serenity::model::permissions::Permissions;
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Cmds,
    Exchange,
    Clear,
    Purge,
    Restart,
    Sync,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "!cmds" => Ok(Command::Cmds),
            "!exchange" => Ok(Command::Exchange),
            "!clear" => Ok(Command::Clear),
            "!purge" => Ok(Command::Purge),
            "!restart" => Ok(Command::Restart),
            "!sync" => Ok(Command::Sync),
            _ => Err(()),
        }
    }
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::Cmds,
        Command::Exchange,
        Command::Clear,
        Command::Purge,
        Command::Restart,
        Command::Sync,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Command::Cmds => "!cmds",
            Command::Exchange => "!exchange",
            Command::Clear => "!clear",
            Command::Purge => "!purge",
            Command::Restart => "!restart",
            Command::Sync => "!sync",
        }
    }

    pub fn auth_level(self) -> AuthLevel {
        match self {
            Command::Exchange => AuthLevel::Public,
            Command::Cmds => AuthLevel::Role(RoleId::new(REQUIRED_ROLE_ID)),
            Command::Clear | Command::Purge => AuthLevel::ManageMessages,
            Command::Restart | Command::Sync => AuthLevel::Administrator,
        }
    }
}

/// The author of a command, with roles and guild permissions already resolved.
#[derive(Clone, Debug)]
pub struct Invoker {
    pub id: UserId,
    pub tag: String,
    pub bot: bool,
    pub roles: Vec<RoleId>,
    pub permissions: Permissions,
}

/// One inbound text message, as seen by the dispatcher.
#[derive(Clone, Debug)]
pub struct Invocation {
    pub author: Invoker,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub content: String,
}

impl Invocation {
    pub fn command_token(&self) -> Option<&str> {
        self.content.split_whitespace().next()
    }

    /// Whitespace-separated words after the command token.
    pub fn args(&self) -> Vec<&str> {
        self.content.split_whitespace().skip(1).collect()
    }
}

/// Route one message. Returns the command that was recognized, if any, whether
/// or not the author was allowed to run it.
pub async fn dispatch(state: &AppState, invocation: &Invocation) -> Option<Command> {
    if invocation.author.bot {
        return None;
    }
    let command = Command::from_str(invocation.command_token()?).ok()?;
    debug!(target: "dispatch", command = command.keyword(), user_id = %invocation.author.id, "dispatching");

    if let Err(denial) = auth::authorize(command.auth_level(), &invocation.author) {
        debug!(target: "dispatch", command = command.keyword(), ?denial, "rejected");
        reply(state, invocation, denial.message()).await;
        return Some(command);
    }

    match command {
        Command::Cmds => cmds::run(state, invocation).await,
        Command::Exchange => exchange::run(state, invocation).await,
        Command::Clear => moderation::clear(state, invocation).await,
        Command::Purge => moderation::purge(state, invocation).await,
        Command::Restart => control::restart(state, invocation).await,
        Command::Sync => control::sync(state, invocation).await,
    }
    Some(command)
}

/// Best-effort plain reply to the invoking message.
pub(crate) async fn reply(state: &AppState, invocation: &Invocation, content: &str) {
    if let Err(e) = state
        .messenger
        .reply(invocation.channel_id, invocation.message_id, content)
        .await
    {
        warn!(target: "dispatch", channel_id = %invocation.channel_id, error = %e, "reply failed");
    }
}
