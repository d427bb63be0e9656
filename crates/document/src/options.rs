//! Read options for snapshot accessors

use serde::{Deserialize, Serialize};

/// How unresolved server-timestamp placeholders are surfaced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerTimestampBehavior {
    /// Return null
    #[default]
    None,
    /// Return a local estimate
    Estimate,
    /// Return the previous value
    Previous,
}

/// Options accepted by `data` and `get`
///
/// Payloads never hold server-timestamp placeholders, so these options have
/// no effect on what is returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapshotOptions {
    /// Server-timestamp behavior
    pub server_timestamps: ServerTimestampBehavior,
}

impl SnapshotOptions {
    /// Options with the given server-timestamp behavior
    pub fn with_server_timestamps(behavior: ServerTimestampBehavior) -> Self {
        Self {
            server_timestamps: behavior,
        }
    }
}
