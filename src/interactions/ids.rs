//! Centralized custom_id string constants for interaction components.

/// Send-method menu attached to the public `!exchange` post.
pub const EXCHANGE_SELECT: &str = "exchange_select";
/// Receive-method (or coin ticker) menu in the private follow-up.
pub const RECEIVE_SELECT: &str = "receive_select";
