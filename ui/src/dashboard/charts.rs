use dioxus::prelude::*;

use crate::charts::{daily_chart, hourly_chart, levels_chart, ChartCard};
use crate::core::snapshot::{DailyPlays, HourlyPlays, LevelCount};
use crate::i18n::use_language_marker;

#[component]
pub fn HourlyChart(hours: Vec<HourlyPlays>) -> Element {
    let lang = use_language_marker();
    let config = hourly_chart(&hours, &crate::t!("chart-series-plays"));

    rsx! {
        div { style: "display:none", "{lang}" }
        ChartCard { title: crate::t!("chart-hourly"), mount_id: "hourlyChart", config, wide: true }
    }
}

#[component]
pub fn DailyChart(days: Vec<DailyPlays>) -> Element {
    let lang = use_language_marker();
    let config = daily_chart(&days, &crate::t!("chart-series-plays"));

    rsx! {
        div { style: "display:none", "{lang}" }
        ChartCard { title: crate::t!("chart-daily"), mount_id: "dailyChart", config }
    }
}

#[component]
pub fn LevelsChart(levels: Vec<LevelCount>) -> Element {
    let lang = use_language_marker();
    let config = levels_chart(&levels);

    rsx! {
        div { style: "display:none", "{lang}" }
        ChartCard { title: crate::t!("chart-levels"), mount_id: "levelsChart", config }
    }
}
