use dioxus::prelude::*;
use time::{
    format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime,
    PrimitiveDateTime, UtcOffset,
};

use crate::i18n::use_language_marker;

/// Render `generatedAt` the way a browser's default locale string reads
/// (`1/1/2024, 12:00:00 AM`).
///
/// Offset-carrying timestamps are shifted into `local`; naive ones (what the
/// Python generator writes) are taken as already local. Returns `None` when the
/// input parses as neither.
pub fn format_generated_at(raw: &str, local: UtcOffset) -> Option<String> {
    let raw = raw.trim();
    let stamp = match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(stamp) => {
            let stamp = stamp.to_offset(local);
            PrimitiveDateTime::new(stamp.date(), stamp.time())
        }
        Err(_) => parse_naive(raw)?,
    };

    stamp
        .format(format_description!(
            "[month padding:none]/[day padding:none]/[year], [hour repr:12 padding:none]:[minute]:[second] [period]"
        ))
        .ok()
}

fn parse_naive(raw: &str) -> Option<PrimitiveDateTime> {
    let whole_seconds = raw.split_once('.').map_or(raw, |(head, _)| head);
    let normalized = whole_seconds.replacen(' ', "T", 1);
    PrimitiveDateTime::parse(
        &normalized,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    )
    .ok()
}

/// Viewer's UTC offset, provided through context by launchers.
///
/// On Unix the offset can only be read while the process is single-threaded,
/// so multi-threaded launchers detect it at the top of `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalOffset(pub UtcOffset);

impl LocalOffset {
    /// Read the host's offset, falling back to UTC.
    pub fn detect() -> Self {
        Self(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
    }
}

#[component]
pub fn LastUpdated(generated_at: String) -> Element {
    let lang = use_language_marker();
    let offset = try_use_context::<LocalOffset>().unwrap_or_else(LocalOffset::detect);
    let stamp = format_generated_at(&generated_at, offset.0).unwrap_or(generated_at);

    rsx! {
        div { style: "display:none", "{lang}" }
        p { id: "lastUpdated", class: "dashboard__updated",
            {crate::t!("last-updated", stamp = stamp)}
        }
    }
}
