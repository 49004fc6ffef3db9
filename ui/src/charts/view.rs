use dioxus::prelude::*;
use tracing::debug;

use super::backend::{ChartRenderer, CHART_JS_SRC};
use super::config::ChartConfig;

/// Chart.js script tag. Launchers mount this once at the app root.
#[component]
pub fn ChartLibrary() -> Element {
    rsx! {
        document::Script { src: CHART_JS_SRC.to_string() }
    }
}

/// Canvas mount that hands `config` to the context backend once it is in the page.
#[component]
pub fn ChartCanvas(mount_id: String, config: ChartConfig) -> Element {
    let renderer = try_use_context::<ChartRenderer>().unwrap_or_default();

    // Redraw when the config changes (e.g. relabelled after a language switch).
    use_effect(use_reactive!(|mount_id, config| {
        let handle = renderer.draw(&mount_id, &config);
        debug!(mount_id = %handle.mount_id, kind = ?handle.kind, "chart handed to backend");
    }));

    rsx! {
        div { class: "chart-card__canvas",
            canvas { id: "{mount_id}" }
        }
    }
}

#[component]
pub fn ChartCard(
    title: String,
    mount_id: String,
    config: ChartConfig,
    #[props(default = false)] wide: bool,
) -> Element {
    let class = if wide {
        "chart-card chart-card--wide"
    } else {
        "chart-card"
    };

    rsx! {
        section { class: "{class}",
            div { class: "chart-card__header",
                h3 { "{title}" }
            }
            ChartCanvas { mount_id, config }
        }
    }
}
