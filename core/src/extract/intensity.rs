//! Intensity keywords, first match wins.

use super::{Rule, first_match};

pub static RULES: [Rule; 5] = [
    Rule {
        name: "easy",
        apply: |t| keyword(t, &["easy", "recovery"], "Easy"),
    },
    Rule {
        name: "moderate",
        apply: |t| keyword(t, &["moderate", "steady"], "Moderate"),
    },
    Rule {
        name: "hard",
        apply: |t| keyword(t, &["hard", "intense"], "Hard"),
    },
    Rule {
        name: "threshold",
        apply: |t| keyword(t, &["threshold"], "Threshold"),
    },
    Rule {
        name: "progressive",
        apply: |t| keyword(t, &["progressive"], "Progressive"),
    },
];

fn keyword(lower: &str, words: &[&str], label: &str) -> Option<String> {
    words
        .iter()
        .any(|w| lower.contains(w))
        .then(|| label.to_string())
}

pub fn extract(text: &str) -> Option<String> {
    first_match(&RULES, &text.to_lowercase())
}
