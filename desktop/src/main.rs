#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::charts::ChartLibrary;
use ui::components::AppHeader;
use ui::core::config::{DashboardConfig, DEFAULT_DATA_PATH};
use ui::dashboard::LocalOffset;
use ui::views::Dashboard;

fn main() {
    // Must run before any other thread exists.
    let local_offset = LocalOffset::detect();
    dioxus::logger::init(Level::INFO).expect("logger failed to init");

    let resource_dir = resolve_resource_dir();
    info!(dir = %resource_dir.display(), "resolved resource directory");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Playdeck – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir.clone()),
        )
        .with_context(dashboard_config(&resource_dir))
        .with_context(local_offset)
        .launch(App);
}

/// Snapshot path resolved against the resource directory; `PLAYDECK_DATA` overrides it.
fn dashboard_config(resource_dir: &std::path::Path) -> DashboardConfig {
    let path = std::env::var("PLAYDECK_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| resource_dir.join(DEFAULT_DATA_PATH));
    DashboardConfig::default().with_data_path(path.to_string_lossy())
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    let win = dioxus::desktop::use_window();
    use_effect(move || {
        win.set_maximized(true);
    });

    rsx! {
        document::Style { "{ui::THEME_CSS}" }
        ChartLibrary {}

        AppHeader {}
        Dashboard {}
    }
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` read from the workspace root.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/.."))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
