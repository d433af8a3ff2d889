//! File-name slugs for output streams.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Characters that are neither word characters, whitespace nor hyphens.
static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid unsafe-character regex"));

/// Runs of hyphens and whitespace.
static GAPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid gap regex"));

/// Turns a stream name into a file stem.
///
/// The name is decomposed (NFKD) and folded to ASCII, characters other than
/// letters, digits, underscores, whitespace and hyphens are dropped, runs of
/// whitespace and hyphens become a single `_`, leading and trailing `-`/`_`
/// are stripped and the result is lowercased. The result may be empty.
pub fn slugify(value: &str) -> String {
    let ascii: String = value.nfkd().filter(char::is_ascii).collect();
    let kept = UNSAFE_CHARS.replace_all(&ascii, "").to_lowercase();
    GAPS.replace_all(&kept, "_")
        .trim_matches(|c: char| c == '-' || c == '_')
        .to_string()
}
