mod activity;
pub use activity::RecentActivityTable;

mod charts;
pub use charts::{DailyChart, HourlyChart, LevelsChart};

mod error_panel;
pub use error_panel::{ErrorPanel, REMEDIATION_COMMAND};

mod last_updated;
pub use last_updated::{format_generated_at, LastUpdated, LocalOffset};

mod lists;
pub use lists::{ranked_rows, RankedRow, TopArtistsList, TopLocationsList, TopSongsList};

mod stats;
pub use stats::{AnimatedCounter, StatCards};

use crate::core::loader::LoadError;
use crate::core::snapshot::DashboardSnapshot;

/// Lifecycle of one page load. `Rendered` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loading,
    Rendered(DashboardSnapshot),
    Failed(String),
}

impl DashboardState {
    pub fn from_outcome(outcome: Option<&Result<DashboardSnapshot, LoadError>>) -> Self {
        match outcome {
            None => Self::Loading,
            Some(Ok(snapshot)) => Self::Rendered(snapshot.clone()),
            Some(Err(err)) => Self::Failed(err.to_string()),
        }
    }
}
