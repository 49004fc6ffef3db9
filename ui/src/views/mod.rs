mod dashboard;
pub use dashboard::{Dashboard, DashboardBody, DashboardContent};
