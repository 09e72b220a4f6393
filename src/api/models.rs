//! Wire types returned by the platform API

use serde::{Deserialize, Serialize};

/// Storage usage above this percentage is flagged as critical
const CRITICAL_STORAGE_PERCENT: f64 = 90.0;

/// Snapshot of platform-wide counters from `GET /platform-stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformStats {
    pub daily_orders: u64,
    pub monthly_orders: u64,
    pub monthly_revenue: f64,
    pub active_stores: u64,
    pub active_admins: u64,
    /// Gigabytes
    pub storage_used: f64,
    /// Gigabytes
    pub total_storage: f64,
}

impl PlatformStats {
    /// Percentage of storage in use, 0 when no capacity is reported
    pub fn storage_percentage(&self) -> f64 {
        if self.total_storage <= 0.0 {
            return 0.0;
        }
        (self.storage_used / self.total_storage) * 100.0
    }

    pub fn is_storage_critical(&self) -> bool {
        self.storage_percentage() > CRITICAL_STORAGE_PERCENT
    }
}

/// Response of `GET /system/maintenance`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceStatus {
    pub enabled: bool,
}
