//! Cadence / RPM targets. Used for cycling but harmless elsewhere; the
//! builder only asks for it on cycling assignments.

use std::sync::LazyLock;

use regex::Regex;

use super::{Rule, first_match};

static RANGE_RPM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:cadence\s+)?(\d{2,3})\s*[-–to]+\s*(\d{2,3})\s*rpm")
        .expect("valid rpm range regex")
});
static CADENCE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"cadence\s+(\d{2,3})\s*(?:to|-)\s*(\d{2,3})").expect("valid cadence range regex")
});
static BARE_RPM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2,3})\s*rpm").expect("valid bare rpm regex"));

pub static RULES: [Rule; 3] = [
    Rule {
        name: "range-rpm",
        apply: |t| {
            RANGE_RPM_RE
                .captures(t)
                .map(|c| format!("{}-{} rpm", &c[1], &c[2]))
        },
    },
    Rule {
        name: "cadence-range",
        apply: |t| {
            CADENCE_RANGE_RE
                .captures(t)
                .map(|c| format!("{}-{} rpm", &c[1], &c[2]))
        },
    },
    Rule {
        name: "bare-rpm",
        apply: |t| BARE_RPM_RE.captures(t).map(|c| format!("{} rpm", &c[1])),
    },
];

pub fn extract(text: &str) -> Option<String> {
    first_match(&RULES, &text.to_lowercase())
}
