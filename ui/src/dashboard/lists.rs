//! Ranked list cards. Rows mirror input order; rank is position + 1.

use dioxus::prelude::*;

use crate::core::format;
use crate::core::snapshot::{ArtistPlays, LocationPlays, SongPlays};
use crate::i18n::use_language_marker;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    pub rank: usize,
    pub title: String,
    pub subtitle: Option<String>,
    pub plays: u64,
}

/// Number input rows 1..N without re-sorting.
pub fn ranked_rows<T>(
    items: &[T],
    describe: impl Fn(&T) -> (String, Option<String>, u64),
) -> Vec<RankedRow> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let (title, subtitle, plays) = describe(item);
            RankedRow {
                rank: i + 1,
                title,
                subtitle,
                plays,
            }
        })
        .collect()
}

#[component]
pub fn TopSongsList(songs: Vec<SongPlays>) -> Element {
    let rows = ranked_rows(&songs, |song| {
        (song.title.clone(), Some(song.artist.clone()), song.plays)
    });
    rsx! {
        RankedCard { title: crate::t!("card-top-songs"), list_id: "topSongsList", rows }
    }
}

#[component]
pub fn TopArtistsList(artists: Vec<ArtistPlays>) -> Element {
    let rows = ranked_rows(&artists, |artist| (artist.name.clone(), None, artist.plays));
    rsx! {
        RankedCard { title: crate::t!("card-top-artists"), list_id: "topArtistsList", rows }
    }
}

#[component]
pub fn TopLocationsList(locations: Vec<LocationPlays>) -> Element {
    let rows = ranked_rows(&locations, |loc| (loc.location.clone(), None, loc.plays));
    rsx! {
        RankedCard { title: crate::t!("card-top-locations"), list_id: "topLocationsList", rows }
    }
}

#[component]
fn RankedCard(title: String, list_id: String, rows: Vec<RankedRow>) -> Element {
    let lang = use_language_marker();
    let empty = rows.is_empty();

    rsx! {
        div { style: "display:none", "{lang}" }
        section { class: "list-card",
            div { class: "list-card__header",
                h3 { "{title}" }
            }
            div { id: "{list_id}", class: "list-card__items",
                if empty {
                    p { class: "list-card__placeholder", {crate::t!("list-empty")} }
                }
                for row in rows.into_iter() {
                    {render_row(row)}
                }
            }
        }
    }
}

fn render_row(row: RankedRow) -> Element {
    let plays = crate::t!("plays-count", count = format::format_count(row.plays));

    rsx! {
        div { key: "{row.rank}", class: "list-item",
            span { class: "list-item-rank", "{row.rank}" }
            div { class: "list-item-info",
                div { class: "list-item-title", "{row.title}" }
                if let Some(subtitle) = row.subtitle.as_ref() {
                    div { class: "list-item-subtitle", "{subtitle}" }
                }
            }
            span { class: "list-item-value", "{plays}" }
        }
    }
}
