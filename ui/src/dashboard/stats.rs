use dioxus::prelude::*;
use tracing::debug;

use crate::core::animate::CountUp;
use crate::core::{format, snapshot::Overview, timing};
use crate::i18n::use_language_marker;

/// Integer that counts up from `start` to `end` on the platform's frame cycle.
///
/// Each counter runs its own task; sibling counters never wait on each other.
#[component]
pub fn AnimatedCounter(
    id: String,
    end: u64,
    duration_ms: u64,
    #[props(default = 0)] start: u64,
) -> Element {
    let animation = CountUp::new(start, end, duration_ms);
    let mut shown = use_signal(move || format::format_count(animation.frame(0.0).value));
    let task_id = id.clone();

    use_future(move || {
        let task_id = task_id.clone();
        async move {
            let began = timing::now_ms();
            loop {
                let frame = animation.frame(timing::now_ms() - began);
                shown.set(format::format_count(frame.value));
                if frame.done {
                    debug!(counter = %task_id, value = frame.value, "counter settled");
                    break;
                }
                timing::next_frame().await;
            }
        }
    });

    rsx! {
        span { id: "{id}", class: "stat-card__value", "{shown}" }
    }
}

#[component]
fn StatCard(label: String, children: Element) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-card__label", "{label}" }
            {children}
        }
    }
}

/// Aggregate counters, plus listening time when the snapshot carries it.
#[component]
pub fn StatCards(overview: Overview, duration_ms: u64) -> Element {
    let lang = use_language_marker();
    let listening = overview.total_listening_minutes.map(format::format_minutes);

    rsx! {
        div { style: "display:none", "{lang}" }
        div { class: "stat-grid",
            StatCard { label: crate::t!("stat-users"),
                AnimatedCounter { id: "totalUsers", end: overview.total_users, duration_ms }
            }
            StatCard { label: crate::t!("stat-songs"),
                AnimatedCounter { id: "totalSongs", end: overview.total_songs, duration_ms }
            }
            StatCard { label: crate::t!("stat-artists"),
                AnimatedCounter { id: "totalArtists", end: overview.total_artists, duration_ms }
            }
            StatCard { label: crate::t!("stat-plays"),
                AnimatedCounter { id: "totalPlays", end: overview.total_songplays, duration_ms }
            }
            if let Some(listening) = listening {
                StatCard { label: crate::t!("stat-listening"),
                    span { id: "totalListeningTime", class: "stat-card__value", "{listening}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::init_fallback;

    fn overview(minutes: Option<f64>) -> Overview {
        Overview {
            total_users: 5,
            total_songs: 10,
            total_artists: 3,
            total_songplays: 42_000,
            total_listening_minutes: minutes,
        }
    }

    #[test]
    fn renders_each_counter_region_once() {
        init_fallback();
        let html = dioxus_ssr::render_element(rsx! {
            StatCards { overview: overview(None), duration_ms: 0 }
        });

        for id in ["totalUsers", "totalSongs", "totalArtists", "totalPlays"] {
            assert_eq!(html.matches(&format!("id=\"{id}\"")).count(), 1, "{id}");
        }
        assert!(html.contains(">42,000<"));
        assert!(!html.contains("totalListeningTime"));
    }

    #[test]
    fn zero_duration_counter_shows_end_at_first_paint() {
        let html = dioxus_ssr::render_element(rsx! {
            AnimatedCounter { id: "totalPlays", end: 42_000, duration_ms: 0 }
        });
        assert!(html.contains(">42,000<"));
    }

    fn counter_under_test() -> Element {
        rsx! { AnimatedCounter { id: "totalPlays", end: 4_200, duration_ms: 80 } }
    }

    fn shown_value(html: &str) -> u64 {
        let start = html.find('>').expect("counter span") + 1;
        let end = start + html[start..].find('<').expect("counter text");
        html[start..end].replace(',', "").parse().expect("numeric counter")
    }

    #[test]
    fn counter_task_climbs_to_end_value() {
        use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
        use std::time::Duration;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .expect("test runtime");
        let mut dom = VirtualDom::new(counter_under_test);

        let seen = runtime.block_on(async {
            dom.rebuild_in_place();
            let mut seen = vec![shown_value(&dioxus_ssr::render(&dom))];
            for _ in 0..200 {
                if seen.last() == Some(&4_200) {
                    break;
                }
                let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
                dom.render_immediate(&mut NoOpMutations);
                seen.push(shown_value(&dioxus_ssr::render(&dom)));
            }
            seen
        });

        assert_eq!(seen.first(), Some(&0));
        assert_eq!(seen.last(), Some(&4_200));
        assert!(seen.windows(2).all(|pair| pair[0] <= pair[1]), "{seen:?}");
    }

    #[test]
    fn listening_time_card_appears_when_present() {
        init_fallback();
        let html = dioxus_ssr::render_element(rsx! {
            StatCards { overview: overview(Some(125.0)), duration_ms: 0 }
        });
        assert!(html.contains("id=\"totalListeningTime\""));
        assert!(html.contains("2h 05m"));
        assert!(html.contains("Listening Time"));
    }
}
