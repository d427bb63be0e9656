//! Snapshot metadata

use serde::{Deserialize, Serialize};

/// Source and sync state of a snapshot
///
/// Snapshots here always reflect the reference's current payload, so both
/// flags are always false.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    /// Snapshot contains local writes not yet acknowledged
    pub has_pending_writes: bool,
    /// Snapshot was served from a cache
    pub from_cache: bool,
}

impl SnapshotMetadata {
    /// Metadata for a fully synced, uncached read
    pub fn synced() -> Self {
        Self {
            has_pending_writes: false,
            from_cache: false,
        }
    }

    /// Compare against another metadata value
    ///
    /// True only when `other` reports no pending writes and no cache use,
    /// regardless of `self`.
    pub fn is_equal(&self, other: &SnapshotMetadata) -> bool {
        !other.has_pending_writes && !other.from_cache
    }
}

impl Default for SnapshotMetadata {
    fn default() -> Self {
        Self::synced()
    }
}
