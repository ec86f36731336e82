//! Location extraction.
//!
//! Qualified multi-word patterns are checked before single keywords, and the
//! literal order below is the contract: text naming both "indoor pool" and a
//! later "park" resolves to the first qualified hit, not to "most specific
//! wins". Do not re-derive the ordering.

use std::sync::LazyLock;

use regex::Regex;

use super::{Rule, first_match};
use crate::text::contains_word;

const QUALIFIED: [(&str, &str); 10] = [
    (r"indoor\s+heated\s+pool", "Indoor heated pool"),
    (r"outdoor\s+pool", "Outdoor pool"),
    (r"indoor\s+pool", "Indoor pool"),
    (r"heated\s+pool", "Heated pool"),
    (r"running\s+track", "Running track"),
    (r"flat\s+road(?:\s+route)?", "Flat road"),
    (r"flat\s+route", "Flat route"),
    (r"hilly\s+(?:road|route|terrain)", "Hilly terrain"),
    (r"trail\s+(?:route|path|run)", "Trail"),
    (r"sports\s+complex", "Sports complex"),
];

const KEYWORDS: [(&str, &str); 10] = [
    ("gym", "Gym"),
    ("pool", "Pool"),
    ("track", "Track"),
    ("park", "Park"),
    ("home", "Home"),
    ("studio", "Studio"),
    ("outdoor", "Outdoor"),
    ("indoor", "Indoor"),
    ("trail", "Trail"),
    ("road", "Road"),
];

static QUALIFIED_RES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    QUALIFIED
        .iter()
        .map(|(pat, name)| (Regex::new(pat).expect("valid qualified location regex"), *name))
        .collect()
});
static TERRAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(flat|hilly|road|trail)\s+(?:preferred|recommended)")
        .expect("valid terrain regex")
});
static NO_HILLS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"no\s+hills?\b|avoid\s+hills?\b").expect("valid no-hills regex"));

pub static RULES: [Rule; 4] = [
    Rule {
        name: "qualified",
        apply: |t| {
            QUALIFIED_RES
                .iter()
                .find(|(re, _)| re.is_match(t))
                .map(|(_, name)| (*name).to_string())
        },
    },
    Rule {
        name: "keyword",
        apply: |t| {
            KEYWORDS
                .iter()
                .find(|(kw, _)| contains_word(t, kw))
                .map(|(_, name)| (*name).to_string())
        },
    },
    Rule {
        name: "preferred-terrain",
        apply: |t| {
            TERRAIN_RE
                .captures(t)
                .map(|c| crate::text::title_case(&c[0]))
        },
    },
    Rule {
        name: "no-hills",
        apply: |t| NO_HILLS_RE.is_match(t).then(|| "Flat (no hills)".to_string()),
    },
];

pub fn extract(text: &str) -> Option<String> {
    first_match(&RULES, &text.to_lowercase())
}
