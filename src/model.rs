//! Shared session state, stored as a `TypeMapKey` in serenity's global context.

use crate::adapter::Messenger;
use crate::process::{ProcessConfig, ProcessControl};
use serenity::prelude::TypeMapKey;
use std::sync::Arc;

/// The bot session: the messaging adapter, process control and the configured
/// external actions. Built once in `main` before the client connects and handed
/// by reference to every handler.
pub struct AppState {
    pub messenger: Arc<dyn Messenger>,
    pub process: Arc<dyn ProcessControl>,
    pub actions: ProcessConfig,
}

impl AppState {
    pub fn new(
        messenger: Arc<dyn Messenger>,
        process: Arc<dyn ProcessControl>,
        actions: ProcessConfig,
    ) -> Self {
        Self {
            messenger,
            process,
            actions,
        }
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
