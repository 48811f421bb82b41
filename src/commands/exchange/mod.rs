//! `!exchange` and the two-level payment selection that follows it.
pub mod state;
pub mod ui;

use super::{Command, Invocation};
use crate::adapter::{InteractionHandle, Outgoing};
use crate::audit;
use crate::model::AppState;
use state::{ExchangeStage, ExchangeStep};
use tracing::{debug, error, warn};

pub async fn run(state: &AppState, invocation: &Invocation) {
    let message = Outgoing::embed(ui::exchange_embed()).with_menu(ui::send_menu());
    if let Err(e) = state.messenger.send(invocation.channel_id, message).await {
        error!(target: "exchange", error = %e, "failed to post exchange menu");
        return;
    }
    audit::record(state.messenger.as_ref(), Command::Exchange.keyword(), &invocation.author).await;
    if let Err(e) = state
        .messenger
        .delete(invocation.channel_id, invocation.message_id)
        .await
    {
        warn!(target: "exchange", message_id = %invocation.message_id, error = %e, "failed to delete command message");
    }
}

/// Handle a pick from either exchange menu.
pub async fn handle_selection(
    state: &AppState,
    interaction: &InteractionHandle,
    stage: ExchangeStage,
    values: &[String],
) {
    match stage {
        ExchangeStage::AwaitingSendChoice => {
            let Some(selected) = values.first() else {
                warn!(target: "exchange", user_id = %interaction.user_id, "send selection without a value");
                return;
            };
            let step = ExchangeStep::for_selection(selected);
            debug!(target: "exchange", user_id = %interaction.user_id, selected = %selected, ?step, "send method chosen");
            let mut response = Outgoing::embed(ui::step_embed(&step));
            if let Some(menu) = ui::receive_menu(&step) {
                response = response.with_menu(menu);
            }
            if let Err(e) = state.messenger.respond_private(interaction, response).await {
                error!(target: "exchange", user_id = %interaction.user_id, error = %e, "failed to send receive menu");
            }
        }
        ExchangeStage::AwaitingReceiveChoice => {
            // End of the flow; the pick is not recorded.
            if let Err(e) = state.messenger.acknowledge(interaction).await {
                debug!(target: "exchange", user_id = %interaction.user_id, error = %e, "acknowledge failed (already acknowledged?)");
            }
        }
    }
}
