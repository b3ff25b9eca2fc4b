// src/graph/links.rs
//! Internal-link extraction from raw wikitext.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static WIKILINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[(.*?)\]\]").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Yields the normalized target of every `[[...]]` link in `text`, in order of
/// appearance, duplicates included.
///
/// `[[Target|shown]]` yields `Target`. Empty targets are skipped. Links never
/// span a line break.
pub fn extract(text: &str) -> impl Iterator<Item = Cow<'_, str>> {
    WIKILINK_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|inner| link_target(inner.as_str()))
        .filter(|target| !target.is_empty())
        .map(normalize)
}

/// Returns the link target: the text before the first pipe, or everything.
#[must_use]
pub fn link_target(inner: &str) -> &str {
    inner.split_once('|').map_or(inner, |(target, _)| target)
}

/// Upper-cases a leading lowercase ASCII letter, matching how article titles
/// are stored. Everything else is left as written.
#[must_use]
pub fn normalize(target: &str) -> Cow<'_, str> {
    match target.as_bytes().first() {
        Some(first) if first.is_ascii_lowercase() => {
            let mut owned = String::with_capacity(target.len());
            owned.push(first.to_ascii_uppercase() as char);
            owned.push_str(&target[1..]);
            Cow::Owned(owned)
        }
        _ => Cow::Borrowed(target),
    }
}
