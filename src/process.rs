//! External process actions used by `!restart` and `!sync`.
//!
//! The bot never restarts itself in-process: it launches a new instance through a
//! respawn action and then exits. [`ProcessControl`] is the seam that lets the
//! command handlers be exercised without touching the real process table.

use crate::constants::SPAWN_ACK_WINDOW;
use crate::error::{BotError, BotResult};
use serenity::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{info, warn};

/// Whether the parent waits for the respawned child to come up before exiting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpawnPolicy {
    #[default]
    Detach,
    WaitForAck,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExternalAction {
    /// Run through `sh -c`.
    Shell(String),
    /// Execute a binary directly, no arguments.
    Exec(PathBuf),
}

impl ExternalAction {
    fn command(&self) -> Command {
        match self {
            Self::Shell(line) => {
                let mut cmd = Command::new("sh");
                cmd.arg("-c").arg(line);
                cmd
            }
            Self::Exec(path) => Command::new(path),
        }
    }
}

impl std::fmt::Display for ExternalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shell(line) => write!(f, "{}", line),
            Self::Exec(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The respawn and sync actions plus how respawns are acknowledged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessConfig {
    pub respawn: ExternalAction,
    pub sync: ExternalAction,
    pub spawn_policy: SpawnPolicy,
}

#[async_trait]
pub trait ProcessControl: Send + Sync {
    /// Run an action to completion. Returns its stdout on a zero exit status.
    async fn run(&self, action: &ExternalAction) -> BotResult<String>;
    /// Launch an action without waiting for it to finish.
    async fn spawn(&self, action: &ExternalAction, policy: SpawnPolicy) -> BotResult<()>;
    fn exit(&self, code: i32);
}

pub struct SystemProcess;

#[async_trait]
impl ProcessControl for SystemProcess {
    async fn run(&self, action: &ExternalAction) -> BotResult<String> {
        let mut cmd = action.command();
        cmd.stdin(Stdio::null());
        let output = cmd.output().await?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(BotError::ActionFailed {
                action: "external action",
                detail: format!("`{}` {} ({})", action, output.status, stderr.trim()),
            });
        }
        info!(target: "process", %action, output = %stdout.trim(), "action finished");
        if !stderr.trim().is_empty() {
            warn!(target: "process", %action, stderr = %stderr.trim(), "action wrote to stderr");
        }
        Ok(stdout)
    }

    async fn spawn(&self, action: &ExternalAction, policy: SpawnPolicy) -> BotResult<()> {
        let mut cmd = action.command();
        cmd.stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(false);
        // Own process group so the child is not taken down with our session.
        #[cfg(unix)]
        cmd.process_group(0);
        let mut child = cmd.spawn()?;
        info!(target: "process", %action, pid = ?child.id(), ?policy, "respawn launched");
        if policy == SpawnPolicy::Detach {
            return Ok(());
        }
        match tokio::time::timeout(SPAWN_ACK_WINDOW, child.wait()).await {
            // Still running once the window closes.
            Err(_) => Ok(()),
            Ok(Ok(status)) if status.success() => Ok(()),
            Ok(Ok(status)) => Err(BotError::ActionFailed {
                action: "respawn",
                detail: format!("child exited early with {}", status),
            }),
            Ok(Err(e)) => Err(e.into()),
        }
    }

    fn exit(&self, code: i32) {
        info!(target: "process", code, "terminating");
        std::process::exit(code);
    }
}
