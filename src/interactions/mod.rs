//! Central router for component interactions.
//!
//! `handler.rs` delegates every select-menu interaction here; the custom id
//! decides which flow it belongs to. Only the exchange menus exist today.

pub mod ids;

use crate::adapter::InteractionHandle;
use crate::commands::exchange::{self, state::ExchangeStage};
use crate::model::AppState;

/// Returns `false` when the custom id belongs to no known menu.
pub async fn route(
    state: &AppState,
    interaction: &InteractionHandle,
    custom_id: &str,
    values: &[String],
) -> bool {
    match ExchangeStage::from_custom_id(custom_id) {
        Some(stage) => {
            exchange::handle_selection(state, interaction, stage, values).await;
            true
        }
        None => {
            tracing::debug!(target: "interactions", cid = %custom_id, "unhandled component");
            false
        }
    }
}
