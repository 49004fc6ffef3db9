//! Locale completeness guard.
//!
//! Every `t!("...")` key used under `src/` must exist in the en-US fallback, and
//! every other locale must define the fallback's keys with the same placeables.
//! The parser is line based: `id = value` definitions, `#` comments skipped.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "playdeck-ui.ftl";
const FALLBACK: &str = "en-US";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Message id → sorted `$variables` referenced by its value.
fn parse_messages(src: &str, locale: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut messages = BTreeMap::new();
    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') || line.starts_with('-') {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || !id.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-')) {
            continue;
        }
        let vars = value
            .split('$')
            .skip(1)
            .map(|rest| {
                rest.chars()
                    .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                    .collect::<String>()
            })
            .collect();
        assert!(
            messages.insert(id.to_string(), vars).is_none(),
            "{locale}: duplicate message id `{id}`"
        );
    }
    messages
}

fn load_locale(locale: &str) -> BTreeMap<String, BTreeSet<String>> {
    let path = crate_root().join("i18n").join(locale).join(FTL_FILENAME);
    let src = fs::read_to_string(&path).unwrap_or_else(|err| panic!("{}: {err}", path.display()));
    parse_messages(&src, locale)
}

fn locales() -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(crate_root().join("i18n"))
        .expect("i18n directory")
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    dirs.sort();
    dirs
}

/// Literal first arguments of `t!(...)` in every `.rs` file under `dir`.
fn referenced_keys(dir: &Path, found: &mut BTreeSet<String>) {
    for entry in fs::read_dir(dir).expect("readable source dir").flatten() {
        let path = entry.path();
        if path.is_dir() {
            referenced_keys(&path, found);
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let src = fs::read_to_string(&path).unwrap_or_default();
        for (at, needle) in src.match_indices("t!(\"") {
            // `format!(` and friends also end in `t!(`.
            let standalone = src[..at]
                .chars()
                .next_back()
                .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
            if !standalone {
                continue;
            }
            let rest = &src[at + needle.len()..];
            if let Some(end) = rest.find('"') {
                found.insert(rest[..end].to_string());
            }
        }
    }
}

#[test]
fn fallback_covers_every_referenced_key() {
    let fallback = load_locale(FALLBACK);
    let mut used = BTreeSet::new();
    referenced_keys(&crate_root().join("src"), &mut used);

    assert!(used.contains("plays-count"), "source scan found no keys");
    let missing: Vec<_> = used.iter().filter(|key| !fallback.contains_key(*key)).collect();
    assert!(missing.is_empty(), "keys missing from {FALLBACK}: {missing:?}");
}

#[test]
fn every_locale_matches_fallback_keys_and_placeables() {
    let fallback = load_locale(FALLBACK);
    let mut failures = Vec::new();

    for locale in locales().iter().filter(|l| l.as_str() != FALLBACK) {
        let messages = load_locale(locale);
        for (id, vars) in &fallback {
            match messages.get(id) {
                None => failures.push(format!("{locale}: missing `{id}`")),
                Some(found) if found != vars => failures.push(format!(
                    "{locale}: `{id}` uses {found:?}, fallback uses {vars:?}"
                )),
                Some(_) => {}
            }
        }
    }

    assert!(failures.is_empty(), "locale drift:\n  {}", failures.join("\n  "));
}

#[test]
fn ships_expected_locales() {
    assert_eq!(locales(), ["en-US", "es-ES", "fr-FR"]);
}

/// `fl!` resolves `{locale}/{domain}.ftl`; without an explicit domain it derives
/// one from the package name with `_` in place of `-`.
#[test]
fn i18n_config_domain_matches_ftl_files() {
    let config = fs::read_to_string(crate_root().join("i18n.toml")).expect("i18n.toml");
    let domain = config
        .lines()
        .filter_map(|line| line.trim().strip_prefix("domain"))
        .filter_map(|rest| rest.trim().strip_prefix('='))
        .map(|value| value.trim().trim_matches('"').to_string())
        .next()
        .expect("i18n.toml declares a fluent domain");

    assert_eq!(format!("{domain}.ftl"), FTL_FILENAME);
    for locale in locales() {
        let path = crate_root().join("i18n").join(&locale).join(FTL_FILENAME);
        assert!(path.is_file(), "{} missing", path.display());
    }
}

#[test]
fn formatted_messages_carry_no_isolation_marks() {
    ui::i18n::init();
    ui::i18n::set_language(FALLBACK).expect("fallback locale");
    let plays = ui::t!("plays-count", count = "1,024");
    assert_eq!(plays, "1,024 plays");
}
