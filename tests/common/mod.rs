//! In-memory doubles for the messaging adapter and process control.
#![allow(dead_code)]

use serenity::model::id::{ChannelId, MessageId, RoleId, UserId};
use serenity::builder::CreateEmbed;
use serenity::model::permissions::Permissions;
use serde_json::Value;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::sync::Mutex;
use yen_exchange_bot::adapter::{InteractionHandle, Messenger, Outgoing};
use yen_exchange_bot::commands::{Invocation, Invoker};
use yen_exchange_bot::constants::REQUIRED_ROLE_ID;
use yen_exchange_bot::process::{
    ExternalAction, ProcessConfig, ProcessControl, SpawnPolicy,
};
use yen_exchange_bot::ui::SelectMenu;
use yen_exchange_bot::{AppState, BotError, BotResult};

pub fn channel() -> ChannelId {
    ChannelId::new(500)
}

pub fn trigger() -> MessageId {
    MessageId::new(900)
}

pub fn user() -> UserId {
    UserId::new(42)
}

fn embed_json(embed: &CreateEmbed) -> Value {
    serde_json::to_value(embed).expect("embed serializes")
}

/// A string field of a recorded embed, empty when absent.
pub fn embed_str<'a>(embed: &'a Value, key: &str) -> &'a str {
    embed[key].as_str().unwrap_or_default()
}

/// `(name, value)` of each embed field, in order.
pub fn embed_fields(embed: &Value) -> Vec<(String, String)> {
    embed["fields"]
        .as_array()
        .map(|fields| {
            fields
                .iter()
                .map(|f| (embed_str(f, "name").to_string(), embed_str(f, "value").to_string()))
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Send {
        channel: ChannelId,
        id: MessageId,
        content: Option<String>,
        embed: Option<Value>,
        menu: Option<SelectMenu>,
    },
    Reply {
        channel: ChannelId,
        to: MessageId,
        content: String,
    },
    Delete {
        channel: ChannelId,
        message: MessageId,
    },
    BulkDelete {
        channel: ChannelId,
        limit: u8,
    },
    Private {
        content: Option<String>,
        embed: Option<Value>,
        menu: Option<SelectMenu>,
    },
    Acknowledge,
}

#[derive(Default)]
pub struct RecordingMessenger {
    pub calls: Mutex<Vec<Call>>,
    /// Results handed out by successive bulk deletes; `Ok(0)` once exhausted.
    pub bulk_results: Mutex<VecDeque<BotResult<usize>>>,
    /// Every bulk delete reports this many messages, ignoring `bulk_results`.
    pub bulk_always: Option<usize>,
    pub missing_channels: HashSet<ChannelId>,
    next_id: Mutex<u64>,
}

impl RecordingMessenger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_bulk_results(results: Vec<BotResult<usize>>) -> Arc<Self> {
        let messenger = Self::default();
        *messenger.bulk_results.lock().unwrap() = results.into();
        Arc::new(messenger)
    }

    pub fn always_deleting(n: usize) -> Arc<Self> {
        Arc::new(Self {
            bulk_always: Some(n),
            ..Self::default()
        })
    }

    pub fn without_channel(id: ChannelId) -> Arc<Self> {
        Arc::new(Self {
            missing_channels: HashSet::from([id]),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Text of every plain message sent to `channel`, in order.
    pub fn texts_in(&self, channel: ChannelId) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Send {
                    channel: ch,
                    content: Some(text),
                    ..
                } if ch == channel => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn replies(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Reply { content, .. } => Some(content),
                _ => None,
            })
            .collect()
    }

    pub fn bulk_deletes(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::BulkDelete { .. }))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn allocate_id(&self) -> MessageId {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        MessageId::new(1000 + *next)
    }
}

#[async_trait::async_trait]
impl Messenger for RecordingMessenger {
    async fn resolve_channel(&self, id: ChannelId) -> Option<ChannelId> {
        (!self.missing_channels.contains(&id)).then_some(id)
    }

    async fn send(&self, channel: ChannelId, message: Outgoing) -> BotResult<MessageId> {
        let id = self.allocate_id();
        self.record(Call::Send {
            channel,
            id,
            content: message.content,
            embed: message.embed.as_ref().map(embed_json),
            menu: message.menu,
        });
        Ok(id)
    }

    async fn reply(
        &self,
        channel: ChannelId,
        to: MessageId,
        content: &str,
    ) -> BotResult<MessageId> {
        self.record(Call::Reply {
            channel,
            to,
            content: content.to_string(),
        });
        Ok(self.allocate_id())
    }

    async fn delete(&self, channel: ChannelId, message: MessageId) -> BotResult<()> {
        self.record(Call::Delete { channel, message });
        Ok(())
    }

    async fn bulk_delete_recent(&self, channel: ChannelId, limit: u8) -> BotResult<usize> {
        self.record(Call::BulkDelete { channel, limit });
        if let Some(n) = self.bulk_always {
            return Ok(n);
        }
        self.bulk_results.lock().unwrap().pop_front().unwrap_or(Ok(0))
    }

    async fn respond_private(
        &self,
        _interaction: &InteractionHandle,
        message: Outgoing,
    ) -> BotResult<()> {
        self.record(Call::Private {
            content: message.content,
            embed: message.embed.as_ref().map(embed_json),
            menu: message.menu,
        });
        Ok(())
    }

    async fn acknowledge(&self, _interaction: &InteractionHandle) -> BotResult<()> {
        self.record(Call::Acknowledge);
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ProcessCall {
    Run(ExternalAction),
    Spawn(ExternalAction, SpawnPolicy),
    Exit(i32),
}

#[derive(Default)]
pub struct RecordingProcess {
    pub calls: Mutex<Vec<ProcessCall>>,
    pub fail_run: bool,
    pub fail_spawn: bool,
}

impl RecordingProcess {
    pub fn calls(&self) -> Vec<ProcessCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn exited(&self) -> bool {
        self.calls()
            .iter()
            .any(|c| matches!(c, ProcessCall::Exit(_)))
    }
}

#[async_trait::async_trait]
impl ProcessControl for RecordingProcess {
    async fn run(&self, action: &ExternalAction) -> BotResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push(ProcessCall::Run(action.clone()));
        if self.fail_run {
            return Err(BotError::ActionFailed {
                action: "external action",
                detail: "exit status: 1".into(),
            });
        }
        Ok("Already up to date.".into())
    }

    async fn spawn(&self, action: &ExternalAction, policy: SpawnPolicy) -> BotResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(ProcessCall::Spawn(action.clone(), policy));
        if self.fail_spawn {
            return Err(BotError::ActionFailed {
                action: "respawn",
                detail: "not found".into(),
            });
        }
        Ok(())
    }

    fn exit(&self, code: i32) {
        self.calls.lock().unwrap().push(ProcessCall::Exit(code));
    }
}

pub fn actions() -> ProcessConfig {
    ProcessConfig {
        respawn: ExternalAction::Shell("./yen-exchange-bot".into()),
        sync: ExternalAction::Shell("git pull".into()),
        spawn_policy: SpawnPolicy::Detach,
    }
}

pub fn app_state(messenger: Arc<RecordingMessenger>, process: Arc<RecordingProcess>) -> AppState {
    AppState::new(messenger, process, actions())
}

pub fn member(permissions: Permissions, roles: Vec<RoleId>) -> Invoker {
    Invoker {
        id: user(),
        tag: "alice".into(),
        bot: false,
        roles,
        permissions,
    }
}

pub fn plain_member() -> Invoker {
    member(Permissions::SEND_MESSAGES, vec![])
}

pub fn role_member() -> Invoker {
    member(
        Permissions::SEND_MESSAGES,
        vec![RoleId::new(REQUIRED_ROLE_ID)],
    )
}

pub fn moderator() -> Invoker {
    member(Permissions::MANAGE_MESSAGES, vec![])
}

pub fn admin() -> Invoker {
    member(Permissions::ADMINISTRATOR, vec![])
}

pub fn invocation(author: Invoker, content: &str) -> Invocation {
    Invocation {
        author,
        channel_id: channel(),
        message_id: trigger(),
        content: content.to_string(),
    }
}

pub fn interaction() -> InteractionHandle {
    InteractionHandle {
        id: serenity::model::id::InteractionId::new(77),
        token: "token".into(),
        channel_id: channel(),
        user_id: user(),
    }
}
