//! `!restart` and `!sync`: replace the running process with a fresh instance.
use super::Invocation;
use crate::adapter::Outgoing;
use crate::confirm::{PendingDeletion, send_transient};
use crate::model::AppState;
use crate::status::{self, BotStatus};
use tracing::{error, info, warn};

const RESTART_NOTICE: &str = "Bot is going offline for a restart...";
const SYNC_NOTICE: &str = "Bot is syncing code and restarting...";
const RESTART_FAILED: &str = "There was an error restarting the bot.";
const SYNC_FAILED: &str = "There was an error syncing the code.";

pub async fn restart(state: &AppState, invocation: &Invocation) {
    status::announce(state.messenger.as_ref(), RESTART_NOTICE).await;
    status::report(state.messenger.as_ref(), BotStatus::Offline).await;
    let pending = confirm(state, invocation, "Restarting the bot...").await;
    respawn_and_exit(state, invocation, pending).await;
}

pub async fn sync(state: &AppState, invocation: &Invocation) {
    status::announce(state.messenger.as_ref(), SYNC_NOTICE).await;
    let pending = confirm(state, invocation, "Syncing code...").await;

    if let Err(e) = state.process.run(&state.actions.sync).await {
        error!(target: "control", action = %state.actions.sync, error = %e, "Error syncing code");
        if let Some(pending) = pending {
            pending.cancel();
        }
        say(state, invocation, SYNC_FAILED).await;
        return;
    }
    info!(target: "control", action = %state.actions.sync, "code synced");
    respawn_and_exit(state, invocation, pending).await;
}

/// Launch the respawn action and terminate with status 0, whether or not the
/// launch worked. The confirmation is removed first; once we exit nothing
/// would delete it.
async fn respawn_and_exit(
    state: &AppState,
    invocation: &Invocation,
    pending: Option<PendingDeletion>,
) {
    if let Some(pending) = pending {
        pending.finish().await;
    }
    if let Err(e) = state
        .process
        .spawn(&state.actions.respawn, state.actions.spawn_policy)
        .await
    {
        error!(target: "control", action = %state.actions.respawn, error = %e, "Error restarting the bot");
        say(state, invocation, RESTART_FAILED).await;
    }
    state.process.exit(0);
}

async fn confirm(state: &AppState, invocation: &Invocation, content: &str) -> Option<PendingDeletion> {
    match send_transient(state.messenger.clone(), invocation.channel_id, content).await {
        Ok(pending) => Some(pending),
        Err(e) => {
            warn!(target: "control", error = %e, "failed to post confirmation");
            None
        }
    }
}

async fn say(state: &AppState, invocation: &Invocation, content: &str) {
    if let Err(e) = state
        .messenger
        .send(invocation.channel_id, Outgoing::text(content))
        .await
    {
        warn!(target: "control", error = %e, "failed to report error to channel");
    }
}
