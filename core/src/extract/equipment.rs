//! Equipment, gear, and logistics.
//!
//! Unlike the single-value extractors this one accumulates: every matching
//! rule may contribute an item, duplicates are filtered as they arrive, and
//! the result is the "; "-joined list in first-seen order.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::{capitalize, contains_word};

const KEYWORD_ITEMS: [(&str, &str); 15] = [
    ("knee sleeves", "Knee sleeves"),
    ("knee sleeve", "Knee sleeves"),
    ("lifting belt", "Lifting belt"),
    ("lifting straps", "Lifting straps"),
    ("foam roller", "Foam roller"),
    ("yoga mat", "Yoga mat"),
    ("water bottle", "Water bottle"),
    ("energy gel", "Energy gels"),
    ("energy gels", "Energy gels"),
    ("electrolyte drink", "Electrolyte drink"),
    ("electrolyte", "Electrolyte drink"),
    ("lifting gloves", "Lifting gloves"),
    ("gloves", "Gloves"),
    ("spike shoes", "Spikes"),
    ("spikes", "Spikes"),
];

const BRING_SKIP_LEADS: [&str; 5] = ["him", "her", "them", "the", "your"];
const BELT_CONTEXT: [&str; 5] = ["squat", "deadlift", "gym", "strength", "leg"];
const STRAPS_CONTEXT: [&str; 5] = ["pull", "row", "gym", "strength", "upper"];
const MAT_CONTEXT: [&str; 4] = ["yoga", "mobility", "stretch", "foam"];

static BRING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"bring\s+(?:your\s+)?([\w\s]+?)(?:\s+and\s+([\w\s]+?))?(?:[,.]|$)")
        .expect("valid bring regex")
});
static MANDATORY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w[\w\s]{2,20})\s+(?:are|is)\s+(?:mandatory|required|compulsory)")
        .expect("valid mandatory regex")
});
static MEET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"meet\s+(?:at\s+)?(.{3,30}?)(?:\s+gate|\s*[,.]|$)").expect("valid meet regex")
});
static TRANSITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"transition\s+time\s+(?:under|less\s+than|within|<)\s*(\d+)\s*(?:minutes?|mins?)")
        .expect("valid transition time regex")
});

fn push_unique(items: &mut Vec<String>, item: String) {
    if !items.contains(&item) {
        items.push(item);
    }
}

fn covered(items: &[String], candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    items.iter().any(|existing| existing.to_lowercase().contains(&lower))
}

pub fn extract(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    let mut items: Vec<String> = Vec::new();

    for (kw, label) in KEYWORD_ITEMS {
        if lower.contains(kw) {
            push_unique(&mut items, label.to_string());
        }
    }

    // "bring X and Y" — capture concrete objects
    if let Some(caps) = BRING_RE.captures(&lower) {
        for group in [caps.get(1), caps.get(2)].into_iter().flatten() {
            let item = group.as_str().trim();
            let lead = item.split_whitespace().next().unwrap_or_default();
            if item.len() > 2 && !BRING_SKIP_LEADS.contains(&lead) {
                let label = capitalize(item);
                if !covered(&items, &label) {
                    push_unique(&mut items, label);
                }
            }
        }
    }

    // "X are/is mandatory"
    if let Some(caps) = MANDATORY_RE.captures(&lower) {
        let item = capitalize(caps[1].trim());
        if !covered(&items, &item) {
            items.push(format!("{item} (mandatory)"));
        }
    }

    // Standalone "belt" / "straps" / "mat" only count in their sport context.
    if contains_word(&lower, "belt")
        && !items.iter().any(|i| i == "Lifting belt")
        && BELT_CONTEXT.iter().any(|w| lower.contains(w))
    {
        items.push("Lifting belt".to_string());
    }
    if contains_word(&lower, "straps")
        && !items.iter().any(|i| i == "Lifting straps")
        && STRAPS_CONTEXT.iter().any(|w| lower.contains(w))
    {
        items.push("Lifting straps".to_string());
    }
    if contains_word(&lower, "mat")
        && !items.iter().any(|i| i == "Yoga mat" || i == "Mat")
        && MAT_CONTEXT.iter().any(|w| lower.contains(w))
    {
        items.push("Mat".to_string());
    }

    if let Some(caps) = MEET_RE.captures(&lower) {
        let loc = caps[1].trim();
        if loc.len() > 2 {
            items.push(format!("Meet at: {}", capitalize(loc)));
        }
    }

    if let Some(caps) = TRANSITION_RE.captures(&lower) {
        items.push(format!("Transition time < {} min", &caps[1]));
    }

    if items.is_empty() {
        None
    } else {
        Some(items.join("; "))
    }
}
