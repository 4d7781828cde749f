//! Key normalization for emitted attribute names

use regex::Regex;
use std::sync::LazyLock;

static FIRST_CAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("Invalid first-cap regex"));

static ALL_CAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("Invalid all-cap regex"));

// ASCII whitespace only; non-ASCII spaces pass through untouched.
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\n\x0C\r ]").expect("Invalid whitespace regex"));

static SPECIAL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-zA-Z0-9\t\n\x0C\r ]+").expect("Invalid special-chars regex")
});

/// Convert a field name into snake_case.
///
/// `ConnectorID` becomes `connector_id`, `camelCase` becomes `camel_case` and
/// `UserIDs` becomes `user_ids`. Already normalized input is returned unchanged.
pub fn normalize(name: &str) -> String {
    let step = FIRST_CAP.replace_all(name, "${1}_${2}");
    let step = ALL_CAP.replace_all(&step, "${1}_${2}");
    let step = WHITESPACE.replace_all(&step, "_");
    step.to_lowercase().replace("i_ds", "ids")
}

/// Replace every run of characters outside `[A-Za-z0-9]` and ASCII whitespace
/// with `replacement`.
pub fn replace_special_chars(input: &str, replacement: &str) -> String {
    SPECIAL_CHARS
        .replace_all(input, regex::NoExpand(replacement))
        .into_owned()
}
