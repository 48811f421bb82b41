//! `!clear <n>` and `!purge`.
use super::{Command, Invocation, reply};
use crate::audit;
use crate::confirm::send_transient;
use crate::constants::{BULK_DELETE_MAX, PURGE_MAX_BATCHES};
use crate::model::AppState;
use tracing::{error, info, warn};

const CLEAR_USAGE: &str =
    "Please provide a number between 1 and 100 for the number of messages to delete.";
const CLEAR_FAILED: &str = "There was an error trying to clear messages in this channel!";
const PURGE_FAILED: &str = "There was an error trying to purge messages in this channel!";
const PURGE_DONE: &str = "All messages have been purged!";

/// Parse the `!clear` amount. `None` for anything that is not an integer in 1..=100.
pub fn parse_clear_amount(arg: Option<&str>) -> Option<u8> {
    let amount = arg?.parse::<i64>().ok()?;
    if (1..=i64::from(BULK_DELETE_MAX)).contains(&amount) {
        u8::try_from(amount).ok()
    } else {
        None
    }
}

pub async fn clear(state: &AppState, invocation: &Invocation) {
    let args = invocation.args();
    let Some(amount) = parse_clear_amount(args.first().copied()) else {
        reply(state, invocation, CLEAR_USAGE).await;
        return;
    };

    let deleted = match state
        .messenger
        .bulk_delete_recent(invocation.channel_id, amount)
        .await
    {
        Ok(n) => n,
        Err(e) => {
            error!(target: "moderation", command = "clear", channel_id = %invocation.channel_id, error = %e, "bulk delete failed");
            reply(state, invocation, CLEAR_FAILED).await;
            return;
        }
    };
    info!(target: "moderation", command = "clear", channel_id = %invocation.channel_id, requested = amount, deleted, "messages cleared");

    let confirmation = format!("Successfully deleted {} messages.", deleted);
    if let Err(e) = send_transient(state.messenger.clone(), invocation.channel_id, &confirmation).await {
        warn!(target: "moderation", command = "clear", error = %e, "failed to post confirmation");
    }
    let logged = format!("{} {}", Command::Clear.keyword(), amount);
    audit::record(state.messenger.as_ref(), &logged, &invocation.author).await;
}

/// Outcome of draining a channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PurgeOutcome {
    /// A batch came back empty.
    Drained { deleted: usize },
    /// A batch failed; `deleted` messages were removed before that.
    Failed { deleted: usize },
    /// Stopped at the batch cap without seeing an empty batch. Treated as a failure.
    Capped { deleted: usize },
}

pub async fn purge(state: &AppState, invocation: &Invocation) {
    let outcome = drain_channel(state, invocation).await;
    match outcome {
        PurgeOutcome::Failed { deleted } | PurgeOutcome::Capped { deleted } => {
            warn!(target: "moderation", command = "purge", channel_id = %invocation.channel_id, deleted, ?outcome, "purge stopped early");
            reply(state, invocation, PURGE_FAILED).await;
        }
        PurgeOutcome::Drained { deleted } => {
            info!(target: "moderation", command = "purge", channel_id = %invocation.channel_id, deleted, "channel purged");
            if let Err(e) = send_transient(state.messenger.clone(), invocation.channel_id, PURGE_DONE).await {
                warn!(target: "moderation", command = "purge", error = %e, "failed to post confirmation");
            }
            audit::record(state.messenger.as_ref(), Command::Purge.keyword(), &invocation.author).await;
        }
    }
}

async fn drain_channel(state: &AppState, invocation: &Invocation) -> PurgeOutcome {
    let mut total = 0;
    for _ in 0..PURGE_MAX_BATCHES {
        match state
            .messenger
            .bulk_delete_recent(invocation.channel_id, BULK_DELETE_MAX)
            .await
        {
            Ok(0) => return PurgeOutcome::Drained { deleted: total },
            Ok(n) => total += n,
            Err(e) => {
                error!(target: "moderation", command = "purge", channel_id = %invocation.channel_id, error = %e, "bulk delete failed");
                return PurgeOutcome::Failed { deleted: total };
            }
        }
    }
    PurgeOutcome::Capped { deleted: total }
}
