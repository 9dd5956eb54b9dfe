//! Static language table and extension resolution.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;

/// Sentinel token selecting every known language.
pub const ALL_LANGUAGES: &str = "all";

/// Mapping from language name to its file extensions. Extensions carry the
/// leading dot and are stored lower-case; matching against file names is
/// case-insensitive.
static LANGUAGE_TABLE: Lazy<BTreeMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    BTreeMap::from([
        ("csharp", &[".cs"][..]),
        ("python", &[".py"][..]),
        ("java", &[".java"][..]),
        ("javascript", &[".js"][..]),
        ("cpp", &[".cpp", ".h"][..]),
        ("html", &[".html"][..]),
        ("css", &[".css"][..]),
        ("typescript", &[".ts"][..]),
    ])
});

/// Names of every language in the table, sorted.
pub fn known_languages() -> impl Iterator<Item = &'static str> {
    LANGUAGE_TABLE.keys().copied()
}

/// Resolve raw language tokens to the set of selected extensions.
///
/// The `all` sentinel (case-sensitive) selects the union of every table
/// entry, regardless of other tokens. Unknown tokens contribute nothing and
/// are not an error; the caller decides what an empty result means.
pub fn resolve_extensions(tokens: &[String]) -> BTreeSet<String> {
    let mut extensions = BTreeSet::new();

    if tokens.iter().any(|token| token == ALL_LANGUAGES) {
        for exts in LANGUAGE_TABLE.values() {
            extensions.extend(exts.iter().map(|ext| (*ext).to_owned()));
        }
        return extensions;
    }

    for token in tokens {
        match LANGUAGE_TABLE.get(token.as_str()) {
            Some(exts) => extensions.extend(exts.iter().map(|ext| (*ext).to_owned())),
            None => tracing::debug!(language = %token, "unknown language token ignored"),
        }
    }

    extensions
}
