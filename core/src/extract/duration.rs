//! Total workout duration, skipping interval structure.
//!
//! A bare "N minutes" that sits next to "rest" or "work" belongs to interval
//! structure (rest periods, HIIT work windows), not the session duration, so
//! those occurrences are skipped.

use std::sync::LazyLock;

use regex::Regex;

use super::{Rule, first_match};
use crate::text::{window_after, window_before};

/// Context window checked on each side of a bare duration for rest/work
/// wording. Heuristic, kept tunable.
pub(crate) const INTERVAL_CONTEXT_CHARS: usize = 15;

static COMPOSITE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:hours?|hrs?)\s*(\d+)\s*(?:minutes?|mins?)")
        .expect("valid composite duration regex")
});
static TOTAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"total\s+(?:session|duration|time|target\s+time)\s+(\d+)\s*(minutes?|mins?|hours?|hrs?)")
        .expect("valid total duration regex")
});
static ANY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(minutes?|mins?|hours?|hrs?|seconds?|secs?)")
        .expect("valid any duration regex")
});

pub static RULES: [Rule; 3] = [
    Rule {
        name: "hours-plus-minutes",
        apply: |t| {
            COMPOSITE_RE
                .captures(t)
                .map(|c| format!("{} hours {} minutes", &c[1], &c[2]))
        },
    },
    Rule {
        name: "total-session",
        apply: total_session,
    },
    Rule {
        name: "first-non-interval",
        apply: first_non_interval,
    },
];

fn normalize_unit(unit: &str) -> &'static str {
    if unit.starts_with("min") {
        "minutes"
    } else if unit.starts_with("hour") || unit.starts_with("hr") {
        "hours"
    } else {
        "seconds"
    }
}

fn total_session(lower: &str) -> Option<String> {
    let caps = TOTAL_RE.captures(lower)?;
    Some(format!("{} {}", &caps[1], normalize_unit(&caps[2])))
}

fn first_non_interval(lower: &str) -> Option<String> {
    for caps in ANY_RE.captures_iter(lower) {
        let m = caps.get(0)?;
        let before = window_before(lower, m.start(), INTERVAL_CONTEXT_CHARS);
        let after = window_after(lower, m.end(), INTERVAL_CONTEXT_CHARS);
        if before.contains("rest") || after.contains("rest") {
            continue;
        }
        if before.contains("work") || after.contains("work") {
            continue;
        }
        return Some(format!("{} {}", &caps[1], normalize_unit(&caps[2])));
    }
    None
}

pub fn extract(text: &str) -> Option<String> {
    first_match(&RULES, &text.to_lowercase())
}
