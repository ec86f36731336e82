//! Distance extraction.
//!
//! Explicit units (km / kilometers / miles / bare "k") outrank bare meter
//! values, and a bare meter value is dropped when the immediately preceding
//! text looks like a calorie target. A DISTANCE span from the NER
//! collaborator wins outright when it visibly carries a number and unit.

use std::sync::LazyLock;

use regex::Regex;

use super::{Rule, first_match};
use crate::ner::{EntityLabel, EntitySpan, first_span};
use crate::text::window_before;

/// Look-back window for the calorie-vs-distance disambiguation. A heuristic
/// boundary, not a provable rule; tune here, not in the pattern.
pub(crate) const CALORIE_LOOKBACK_CHARS: usize = 25;

static SPAN_SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\s*(?:km|kilometers?|miles?|k\b|meters?|metres?|m\b)")
        .expect("valid span shape regex")
});
static UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(km|kilometers?|kilometres?|miles?|k)\b")
        .expect("valid distance unit regex")
});
static METERS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(m(?:eters?|etres?)?)\b").expect("valid meters regex")
});
static CALORIE_CONTEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:calorie|cal|kcal|burn|target)\s*$").expect("valid calorie context regex")
});

pub static RULES: [Rule; 2] = [
    Rule {
        name: "explicit-unit",
        apply: explicit_unit,
    },
    Rule {
        name: "bare-meters",
        apply: bare_meters,
    },
];

fn explicit_unit(lower: &str) -> Option<String> {
    let caps = UNIT_RE.captures(lower)?;
    let val = &caps[1];
    let unit = &caps[2];
    let formatted = if unit == "k" {
        format!("{val}k")
    } else if unit == "km" || unit.starts_with("kilometer") || unit.starts_with("kilometre") {
        format!("{val} km")
    } else if unit.starts_with("mile") {
        if val == "1" {
            format!("{val} mile")
        } else {
            format!("{val} miles")
        }
    } else {
        format!("{val} {unit}")
    };
    Some(formatted)
}

fn bare_meters(lower: &str) -> Option<String> {
    let caps = METERS_RE.captures(lower)?;
    let m = caps.get(0)?;
    let preceding = window_before(lower, m.start(), CALORIE_LOOKBACK_CHARS);
    if CALORIE_CONTEXT_RE.is_match(preceding) {
        return None;
    }
    Some(format!("{} meters", &caps[1]))
}

pub fn extract(text: &str, spans: &[EntitySpan]) -> Option<String> {
    if let Some(span) = first_span(spans, EntityLabel::Distance)
        && SPAN_SHAPE_RE.is_match(&span.text.to_lowercase())
    {
        return Some(span.text.clone());
    }
    first_match(&RULES, &text.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_suffixes_preserved() {
        assert_eq!(extract("do 10k this week", &[]).as_deref(), Some("10k"));
        assert_eq!(extract("an easy 5 km", &[]).as_deref(), Some("5 km"));
        assert_eq!(extract("12 kilometers steady", &[]).as_deref(), Some("12 km"));
        assert_eq!(extract("cover 3 miles", &[]).as_deref(), Some("3 miles"));
        assert_eq!(extract("just 1 mile", &[]).as_deref(), Some("1 mile"));
    }

    #[test]
    fn bare_meters_accepted() {
        assert_eq!(extract("swim 800 meters total", &[]).as_deref(), Some("800 meters"));
        assert_eq!(extract("sprint 400m repeats", &[]).as_deref(), Some("400 meters"));
    }

    #[test]
    fn calorie_context_suppresses_meters() {
        assert_eq!(extract("target 600 m", &[]), None);
        assert_eq!(extract("burn 900m", &[]), None);
    }

    #[test]
    fn valid_ner_span_wins() {
        let spans = vec![EntitySpan {
            start: 0,
            end: 7,
            label: EntityLabel::Distance,
            text: "10 Km".to_string(),
        }];
        assert_eq!(extract("do 21 km", &spans).as_deref(), Some("10 Km"));
    }

    #[test]
    fn junk_ner_span_falls_through_to_rules() {
        let spans = vec![EntitySpan {
            start: 0,
            end: 4,
            label: EntityLabel::Distance,
            text: "long".to_string(),
        }];
        assert_eq!(extract("a long 21 km effort", &spans).as_deref(), Some("21 km"));
    }
}
