//! Runtime configuration shared through Dioxus context.

/// Relative location the data generator writes to.
pub const DEFAULT_DATA_PATH: &str = "data/dashboard_data.json";

/// Count-up length for the stat cards.
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 800;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// URL (web) or filesystem path (desktop) of the snapshot document.
    pub data_path: String,
    pub counter_duration_ms: u64,
}

impl DashboardConfig {
    pub fn with_data_path(mut self, path: impl Into<String>) -> Self {
        self.data_path = path.into();
        self
    }

    pub fn with_counter_duration_ms(mut self, duration_ms: u64) -> Self {
        self.counter_duration_ms = duration_ms;
        self
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
        }
    }
}
