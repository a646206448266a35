//! Name sanitization for filenames and generated identifiers.

use regex::Regex;
use std::sync::LazyLock;

/// Matches every character that may not appear in a sanitized name.
static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("Invalid sanitization regex"));

/// Replace every character outside `[A-Za-z0-9_-]` with `_`.
///
/// The result is safe to use as a filename, archive name, or generated
/// module identifier. It is never used for display text. Sanitization is
/// idempotent: sanitizing an already-sanitized name is a no-op.
pub fn sanitize_name(name: &str) -> String {
    UNSAFE_CHARS.replace_all(name, "_").into_owned()
}
