use dioxus::prelude::*;

use crate::i18n::use_language_marker;

/// Command that regenerates the snapshot.
pub const REMEDIATION_COMMAND: &str = "python dashboard/generate_data.py";

/// Full-width notice that replaces the dashboard body when the snapshot is unusable.
#[component]
pub fn ErrorPanel(message: String) -> Element {
    let lang = use_language_marker();

    rsx! {
        div { style: "display:none", "{lang}" }
        div { class: "chart-card chart-card--wide error-panel", role: "alert",
            h3 { {crate::t!("error-title")} }
            p { class: "error-panel__message", "{message}" }
            p { class: "error-panel__hint",
                {crate::t!("error-hint-prefix")}
                " "
                code { "{REMEDIATION_COMMAND}" }
            }
        }
    }
}
