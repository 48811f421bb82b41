//! `!cmds`: list the available commands.
use super::{Command, Invocation};
use crate::adapter::Outgoing;
use crate::audit;
use crate::model::AppState;
use crate::ui::style::brand_embed;
use serenity::builder::CreateEmbed;
use tracing::error;

struct CommandInfo {
    command: Command,
    usage: &'static str,
    description: &'static str,
}

const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        command: Command::Exchange,
        usage: "!exchange",
        description: "Triggers the exchange embed message with payment options.",
    },
    CommandInfo {
        command: Command::Clear,
        usage: "!clear <number>",
        description: "Clears a specified number of messages (1-100).",
    },
    CommandInfo {
        command: Command::Purge,
        usage: "!purge",
        description: "Purges all messages in the channel.",
    },
    CommandInfo {
        command: Command::Restart,
        usage: "!restart",
        description: "Restarts the bot (admin only).",
    },
    CommandInfo {
        command: Command::Sync,
        usage: "!sync",
        description: "Syncs the code and restarts the bot (admin only).",
    },
    CommandInfo {
        command: Command::Cmds,
        usage: "!cmds",
        description: "Displays this list of commands.",
    },
];

/// Listed commands, in display order. Used by tests to check coverage.
pub fn listed_commands() -> Vec<Command> {
    COMMANDS.iter().map(|c| c.command).collect()
}

pub fn commands_embed() -> CreateEmbed {
    COMMANDS.iter().fold(
        brand_embed("📜 Available Commands").description("Here are the commands you can use:"),
        |embed, info| embed.field(info.usage, info.description, false),
    )
}

pub async fn run(state: &AppState, invocation: &Invocation) {
    if let Err(e) = state
        .messenger
        .send(invocation.channel_id, Outgoing::embed(commands_embed()))
        .await
    {
        error!(target: "cmds", error = %e, "failed to send command list");
        return;
    }
    audit::record(state.messenger.as_ref(), Command::Cmds.keyword(), &invocation.author).await;
}
