// Fixed server identifiers and limits.
use std::time::Duration;

pub const LOG_CHANNEL_ID: u64 = 1287103715773382686;
pub const STATUS_CHANNEL_ID: u64 = 1287106730052026432;
pub const REQUIRED_ROLE_ID: u64 = 1287110105359323136;

/// Delay before a transient confirmation is removed again.
pub const CONFIRMATION_DELAY: Duration = Duration::from_secs(5);

// Discord refuses bulk deletes of more than 100 messages or of messages older than two weeks.
pub const BULK_DELETE_MAX: u8 = 100;
pub const BULK_DELETE_MAX_AGE: Duration = Duration::from_secs(14 * 24 * 60 * 60);

/// Upper bound on purge batches so a misreporting adapter cannot spin forever.
pub const PURGE_MAX_BATCHES: usize = 1_000;

/// How long a respawned child has to fail. Still running or a clean exit
/// within the window both count as acknowledged.
pub const SPAWN_ACK_WINDOW: Duration = Duration::from_secs(2);

pub const DEFAULT_SYNC_COMMAND: &str = "git pull && cargo build --release";
