//! Compatibility transform for legacy version schemes.
//!
//! Plugins that predate semantic versioning shipped date stamps,
//! four-part versions, or bare integers as their release tags. The
//! transform rewrites those into parseable semver so the validator can
//! hold every channel entry to one scheme.

use std::sync::LazyLock;

use regex::Regex;

/// `YYYY.MM.DD.HH.MM.SS` date stamps from commit-date based versioning.
static DATE_STAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})\.(\d{2})\.(\d{2})\.(\d{2})\.(\d{2})\.(\d{2})$").expect("valid regex")
});

/// Pre-semver versions with 4+ dotted groups (or a `T` separator), e.g. `1.6.9.0`.
static FOUR_PLUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+\.\d+\.\d+)[T.](\d+(?:\.\d+)*)$").expect("valid regex")
});

static BARE_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("valid regex"));

static MAJOR_MINOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+$").expect("valid regex"));

/// Normalize a raw version string into semver form.
///
/// Date stamps are prefixed with a `0.` major so packages can later move
/// to explicit versioning and still sort above their dated releases: the
/// year and month become minor and patch, the remaining fields build
/// metadata (`2012.11.10.10.31.23` → `0.2012.11+10.10.31.23`). The remaining
/// rules pad short versions (`3` → `3.0.0`, `3.5` → `3.5.0`) and fold
/// extra dotted groups into build metadata (`1.6.9.0` → `1.6.9+0`).
/// Anything else passes through unchanged.
pub fn semver_compat(version: &str) -> String {
    let mut v = version.to_string();

    if let Some(c) = DATE_STAMP.captures(&v) {
        v = format!("0.{}.{}+{}.{}.{}.{}", &c[1], &c[2], &c[3], &c[4], &c[5], &c[6]);
    }

    if let Some(c) = FOUR_PLUS.captures(&v) {
        v = format!("{}+{}", &c[1], &c[2]);
    } else if BARE_INT.is_match(&v) {
        v.push_str(".0.0");
    } else if MAJOR_MINOR.is_match(&v) {
        v.push_str(".0");
    }

    v
}
