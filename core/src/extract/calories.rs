//! Calorie targets.

use std::sync::LazyLock;

use regex::Regex;

use super::{Rule, first_match};

/// Loose "target/burn N" phrasing only counts as calories from this value up;
/// smaller numbers are usually reps, minutes, or distances.
pub(crate) const MIN_LOOSE_CALORIES: u32 = 100;

static EXPLICIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:calories?|cals?|kcal)").expect("valid explicit calories regex")
});
static TARGET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"calorie\s+(?:burn\s+)?(?:target|goal|aim)\s+(\d+)")
        .expect("valid calorie target regex")
});
static LOOSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:target|burn|aim)\s+(?:around\s+|approximately\s+)?(\d+)\s*(?:calories?|cals?|kcal)?")
        .expect("valid loose calories regex")
});
static BURN_AROUND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"calorie\s+burn\s+(?:around\s+)?(\d+)").expect("valid calorie burn regex")
});

pub static RULES: [Rule; 4] = [
    Rule {
        name: "explicit-unit",
        apply: |t| EXPLICIT_RE.captures(t).map(|c| c[1].to_string()),
    },
    Rule {
        name: "calorie-target",
        apply: |t| TARGET_RE.captures(t).map(|c| c[1].to_string()),
    },
    Rule {
        name: "loose-target",
        apply: loose_target,
    },
    Rule {
        name: "calorie-burn-around",
        apply: |t| BURN_AROUND_RE.captures(t).map(|c| c[1].to_string()),
    },
];

fn loose_target(lower: &str) -> Option<String> {
    let caps = LOOSE_RE.captures(lower)?;
    let value: u32 = caps[1].parse().ok()?;
    (value >= MIN_LOOSE_CALORIES).then(|| caps[1].to_string())
}

pub fn extract(text: &str) -> Option<String> {
    first_match(&RULES, &text.to_lowercase())
}
