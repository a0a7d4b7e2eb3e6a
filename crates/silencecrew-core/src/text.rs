//! Text normalization applied before classification.

/// Removes `<...>` markup tags (colour, image and formatting tags the game
/// client embeds in chat lines).
///
/// An unterminated `<` is kept as literal text.
#[must_use]
pub fn strip_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>') else {
            break;
        };
        out.push_str(&rest[..open]);
        rest = &rest[open + close + 1..];
    }

    out.push_str(rest);
    out
}

/// Strips tags and lowercases, producing the form the classifier expects.
#[must_use]
pub fn normalize(raw: &str) -> String {
    strip_tags(raw).to_lowercase()
}
