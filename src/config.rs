//! Runtime configuration read from the environment (and `.env`, loaded in `main`).
//! Channel and role ids are not configurable; see `constants.rs`.

use crate::constants::DEFAULT_SYNC_COMMAND;
use crate::error::{BotError, BotResult};
use crate::process::{ExternalAction, ProcessConfig, SpawnPolicy};
use serenity::model::id::GuildId;
use std::env;

pub struct BotConfig {
    pub token: String,
    /// When set, messages from any other guild are ignored.
    pub guild_id: Option<GuildId>,
    pub actions: ProcessConfig,
}

impl BotConfig {
    pub fn from_env() -> BotResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> BotResult<Self> {
        let token = lookup("BOT_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or(BotError::MissingEnv("BOT_TOKEN"))?;

        let guild_id = match lookup("GUILD_ID") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(id) if id != 0 => Some(GuildId::new(id)),
                _ => {
                    return Err(BotError::InvalidEnv {
                        key: "GUILD_ID",
                        value: raw,
                    });
                }
            },
            None => None,
        };

        let respawn = match lookup("RESPAWN_COMMAND") {
            Some(line) if !line.trim().is_empty() => ExternalAction::Shell(line),
            _ => ExternalAction::Exec(env::current_exe()?),
        };
        let sync = lookup("SYNC_COMMAND")
            .filter(|line| !line.trim().is_empty())
            .map(ExternalAction::Shell)
            .unwrap_or_else(|| ExternalAction::Shell(DEFAULT_SYNC_COMMAND.to_string()));

        let spawn_policy = match lookup("WAIT_FOR_SPAWN_ACK") {
            Some(raw) => {
                if parse_flag(&raw).ok_or(BotError::InvalidEnv {
                    key: "WAIT_FOR_SPAWN_ACK",
                    value: raw.clone(),
                })? {
                    SpawnPolicy::WaitForAck
                } else {
                    SpawnPolicy::Detach
                }
            }
            None => SpawnPolicy::Detach,
        };

        Ok(Self {
            token,
            guild_id,
            actions: ProcessConfig {
                respawn,
                sync,
                spawn_policy,
            },
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
