use dioxus::prelude::*;

use crate::core::{config::DashboardConfig, loader, snapshot::DashboardSnapshot};
use crate::dashboard::{
    DailyChart, DashboardState, ErrorPanel, HourlyChart, LastUpdated, LevelsChart,
    RecentActivityTable, StatCards, TopArtistsList, TopLocationsList, TopSongsList,
};
use crate::i18n::use_language_marker;

/// Loads the snapshot once and renders the dashboard or the error panel.
#[component]
pub fn Dashboard() -> Element {
    let config = try_use_context::<DashboardConfig>().unwrap_or_default();
    let counter_duration_ms = config.counter_duration_ms;

    let snapshot = use_resource(move || {
        let config = config.clone();
        async move { loader::load_snapshot(&config).await }
    });

    let state = DashboardState::from_outcome(snapshot.read().as_ref());

    rsx! {
        DashboardContent { state, counter_duration_ms }
    }
}

#[component]
pub fn DashboardContent(state: DashboardState, counter_duration_ms: u64) -> Element {
    let lang = use_language_marker();

    let body = match state {
        DashboardState::Loading => rsx! {
            p { class: "dashboard__loading", {crate::t!("loading")} }
        },
        DashboardState::Failed(message) => rsx! {
            ErrorPanel { message }
        },
        DashboardState::Rendered(snapshot) => rsx! {
            DashboardBody { snapshot, counter_duration_ms }
        },
    };

    rsx! {
        div { style: "display:none", "{lang}" }
        main { class: "main-content", {body} }
    }
}

/// Every region, in render order. Each region receives only its slice of the snapshot.
#[component]
pub fn DashboardBody(snapshot: DashboardSnapshot, counter_duration_ms: u64) -> Element {
    let DashboardSnapshot {
        overview,
        top_songs,
        top_artists,
        top_locations,
        recent_activity,
        hourly_activity,
        daily_activity,
        user_levels,
        generated_at,
    } = snapshot;

    rsx! {
        StatCards { overview, duration_ms: counter_duration_ms }

        div { class: "list-grid",
            TopSongsList { songs: top_songs }
            TopArtistsList { artists: top_artists }
            TopLocationsList { locations: top_locations }
        }

        RecentActivityTable { entries: recent_activity }

        div { class: "chart-grid",
            HourlyChart { hours: hourly_activity }
            DailyChart { days: daily_activity }
            LevelsChart { levels: user_levels }
        }

        LastUpdated { generated_at }
    }
}
