use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for the inventory transaction handler and the container helpers built on it.
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(default)]
pub struct InventoryConfig {
    /// How long a speculative slot change may be referenced before it is treated as stale.
    pub pending_change_expiry_ms: u64,
    /// Upper bound on unacknowledged slot changes before requests get refused.
    pub max_pending_changes: usize,
    /// How many times an interaction is re-sent while waiting for a container to open.
    pub open_container_retries: u32,
    pub open_container_retry_interval_ms: u64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            pending_change_expiry_ms: 5000,
            max_pending_changes: 256,
            open_container_retries: 20,
            open_container_retry_interval_ms: 500,
        }
    }
}

impl InventoryConfig {
    pub fn pending_change_expiry(&self) -> Duration {
        Duration::from_millis(self.pending_change_expiry_ms)
    }

    pub fn open_container_retry_interval(&self) -> Duration {
        Duration::from_millis(self.open_container_retry_interval_ms)
    }

    pub fn validate(&self) {
        assert!(
            self.pending_change_expiry_ms > 0,
            "Pending change expiry must be greater than 0"
        );
        assert!(
            self.max_pending_changes > 0,
            "At least one pending change must be allowed"
        );
        assert!(
            self.open_container_retry_interval_ms > 0,
            "Open container retry interval must be greater than 0"
        );
    }
}
