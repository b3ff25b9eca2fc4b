// src/index/entities.rs
//! Decoding of the five predefined XML character entities.
//!
//! Index lines are not XML, so `quick_xml::escape::unescape` does not fit: it
//! rejects a bare `&` and unknown entities such as `&nbsp;`, which must pass
//! through unchanged here.

use std::borrow::Cow;

const ENTITIES: [(&str, char); 5] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&apos;", '\''),
];

/// Replaces `&amp;`, `&lt;`, `&gt;`, `&quot;` and `&apos;` with their literal
/// characters in a single left-to-right pass.
///
/// Anything else that starts with `&` is left untouched, and decoded output is
/// never re-scanned, so `&amp;lt;` becomes `&lt;`.
#[must_use]
pub fn decode(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match ENTITIES.iter().find(|(name, _)| rest.starts_with(name)) {
            Some((name, ch)) => {
                out.push(*ch);
                rest = &rest[name.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}
