//! End-to-end rendering of whole dashboards through `dioxus-ssr`.

use dioxus::prelude::*;
use futures::executor::block_on;
use serde_json::json;

use ui::charts::{hourly_chart, ChartBackend, ChartConfig, ChartHandle, ChartRenderer};
use ui::core::{config::DashboardConfig, loader};
use ui::dashboard::{DashboardState, REMEDIATION_COMMAND};
use ui::views::DashboardContent;

const REGIONS: [&str; 12] = [
    "totalUsers",
    "totalSongs",
    "totalArtists",
    "totalPlays",
    "topSongsList",
    "topArtistsList",
    "topLocationsList",
    "recentActivityBody",
    "hourlyChart",
    "dailyChart",
    "levelsChart",
    "lastUpdated",
];

/// Keeps chart drawing out of the page during tests.
struct SilentBackend;

impl ChartBackend for SilentBackend {
    fn draw(&self, mount_id: &str, config: &ChartConfig) -> ChartHandle {
        ChartHandle {
            mount_id: mount_id.to_string(),
            kind: config.kind,
        }
    }
}

#[component]
fn Harness(state: DashboardState) -> Element {
    use_context_provider(|| ChartRenderer::new(SilentBackend));
    rsx! {
        DashboardContent { state, counter_duration_ms: 0 }
    }
}

fn render(state: DashboardState) -> String {
    ui::i18n::init();
    ui::i18n::set_language(ui::i18n::FALLBACK_LANGUAGE).expect("fallback locale");
    dioxus_ssr::render_element(rsx! { Harness { state } })
}

fn fixture_state() -> DashboardState {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/dashboard_data.json");
    let config = DashboardConfig::default().with_data_path(path);
    DashboardState::from_outcome(Some(&block_on(loader::load_snapshot(&config))))
}

#[test]
fn every_region_is_written_exactly_once() {
    let html = render(fixture_state());

    for region in REGIONS {
        assert_eq!(
            html.matches(&format!("id=\"{region}\"")).count(),
            1,
            "region {region}"
        );
    }
    assert!(html.contains("id=\"totalListeningTime\""));
    assert!(!html.contains("error-panel"));
}

#[test]
fn fixture_renders_in_snapshot_order() {
    let html = render(fixture_state());

    assert!(html.contains(">6,020<"));
    assert!(html.contains("Last updated: 11/30/2025, 6:45:12 PM"));

    let songs = &html[html.find("topSongsList").unwrap()..html.find("topArtistsList").unwrap()];
    assert_eq!(songs.matches("class=\"list-item\"").count(), 5);
    let first = songs.find("Dwight Yoakam").expect("first song");
    let second = songs.find("Lonnie Gordon").expect("second song");
    assert!(first < second);
    assert!(songs.contains("37 plays"));

    let regions: Vec<_> = REGIONS.iter().map(|id| html.find(&format!("id=\"{id}\""))).collect();
    assert!(regions.windows(2).all(|pair| pair[0] < pair[1]), "regions out of order");
}

#[test]
fn failed_load_shows_remediation_and_no_regions() {
    let outcome = loader::ensure_success(404).and_then(|_| loader::decode_snapshot("{}"));
    let html = render(DashboardState::from_outcome(Some(&outcome)));

    assert!(html.contains("Unable to Load Data"));
    assert!(html.contains(loader::DATA_UNAVAILABLE_MESSAGE));
    assert!(html.contains(REMEDIATION_COMMAND));
    for region in REGIONS {
        assert!(!html.contains(&format!("id=\"{region}\"")), "region {region} rendered");
    }
}

#[test]
fn loading_state_renders_no_regions() {
    let html = render(DashboardState::Loading);
    assert!(html.contains("dashboard__loading"));
    assert!(!html.contains("id=\"totalPlays\""));
}

#[test]
fn minimal_snapshot_end_to_end() {
    let doc = json!({
        "overview": {"total_users": 5, "total_songs": 10, "total_artists": 3, "total_songplays": 42},
        "topSongs": [{"title": "A", "artist": "X", "plays": 9}],
        "hourlyActivity": [{"hour": 0, "plays": 1}, {"hour": 1, "plays": 2}],
        "generatedAt": "2024-01-01T00:00:00Z"
    });
    let outcome = loader::decode_snapshot(&doc.to_string());
    let state = DashboardState::from_outcome(Some(&outcome));

    let DashboardState::Rendered(snapshot) = &state else {
        panic!("minimal snapshot should decode");
    };
    let bar = hourly_chart(&snapshot.hourly_activity, "Plays");
    assert_eq!(bar.labels(), ["0:00", "1:00"]);
    assert_eq!(bar.values(), [1, 2]);

    let html = render(state);
    assert!(html.contains("id=\"totalPlays\" class=\"stat-card__value\">42<"));

    let songs = &html[html.find("topSongsList").unwrap()..html.find("topArtistsList").unwrap()];
    assert_eq!(songs.matches("class=\"list-item\"").count(), 1);
    assert!(songs.contains("class=\"list-item-rank\">1<"));

    let updated = &html[html.find("id=\"lastUpdated\"").unwrap()..];
    assert!(updated.contains("Last updated: 1/1/2024") || updated.contains("Last updated: 12/31/2023"));
    assert!(!updated.contains("2024-01-01T00:00:00Z"));
}
