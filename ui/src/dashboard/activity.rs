use dioxus::prelude::*;

use crate::core::snapshot::ActivityEntry;
use crate::i18n::use_language_marker;

/// Most recent plays, newest first as delivered. No rank column.
#[component]
pub fn RecentActivityTable(entries: Vec<ActivityEntry>) -> Element {
    let lang = use_language_marker();
    let empty = entries.is_empty();

    rsx! {
        div { style: "display:none", "{lang}" }
        section { class: "chart-card chart-card--wide activity-card",
            div { class: "chart-card__header",
                h3 { {crate::t!("card-recent-activity")} }
            }
            table { class: "activity-table",
                thead {
                    tr {
                        th { {crate::t!("table-time")} }
                        th { {crate::t!("table-user")} }
                        th { {crate::t!("table-song")} }
                        th { {crate::t!("table-artist")} }
                    }
                }
                tbody { id: "recentActivityBody",
                    if empty {
                        tr {
                            td { class: "activity-table__placeholder", colspan: "4",
                                {crate::t!("list-empty")}
                            }
                        }
                    }
                    for (i, entry) in entries.into_iter().enumerate() {
                        tr { key: "{i}",
                            td { "{entry.time}" }
                            td { "{entry.user}" }
                            td { "{entry.song}" }
                            td { "{entry.artist}" }
                        }
                    }
                }
            }
        }
    }
}
