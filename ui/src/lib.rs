//! Shared UI crate for Playdeck. Models, renderers and views live here; the
//! launcher crates only pick a platform and provide configuration.

pub mod charts;
pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    // Brand bar + locale switcher (components/app_header.rs)
    pub mod app_header;
    pub use app_header::AppHeader;
}

/// Embedded shared theme; both launchers inline it.
pub const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/theme/main.css"));
