//! Pace extraction: swim pace first, then per-km / per-mile, then a bare
//! "at M:SS pace" defaulting to per-km, then speeds.

use std::sync::LazyLock;

use regex::Regex;

use super::{Rule, first_match};
use crate::ner::{EntityLabel, EntitySpan, first_span};

static SWIM_PACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2}:\d{2})\s*(?:per|/)\s*(?:100\s*(?:m(?:eters?)?|metres?))")
        .expect("valid swim pace regex")
});
static PER_UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2}:\d{2})\s*(?:pace\s+)?(/\s*km|per\s*km|/\s*mile|per\s*mile)")
        .expect("valid per-unit pace regex")
});
static AT_PACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:at|@)\s+(\d{1,2}:\d{2})\s*(?:pace|min)").expect("valid at-pace regex")
});
static KMH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(?:km/?h|kmph)").expect("valid kmh regex"));
static MPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*mph").expect("valid mph regex"));
static HAS_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("valid digit regex"));

pub static RULES: [Rule; 5] = [
    Rule {
        name: "swim-per-100m",
        apply: |t| SWIM_PACE_RE.captures(t).map(|c| format!("{}/100m", &c[1])),
    },
    Rule {
        name: "per-km-or-mile",
        apply: per_unit,
    },
    Rule {
        name: "at-pace-default-km",
        apply: |t| AT_PACE_RE.captures(t).map(|c| format!("{}/km", &c[1])),
    },
    Rule {
        name: "speed-kmph",
        apply: |t| KMH_RE.captures(t).map(|c| format!("{} kmph", &c[1])),
    },
    Rule {
        name: "speed-mph",
        apply: |t| MPH_RE.captures(t).map(|c| format!("{} mph", &c[1])),
    },
];

fn per_unit(lower: &str) -> Option<String> {
    let caps = PER_UNIT_RE.captures(lower)?;
    let unit = if caps[2].contains("mile") { "mile" } else { "km" };
    Some(format!("{}/{unit}", &caps[1]))
}

pub fn extract(text: &str, spans: &[EntitySpan]) -> Option<String> {
    if let Some(span) = first_span(spans, EntityLabel::Pace)
        && HAS_DIGIT_RE.is_match(&span.text)
    {
        return Some(span.text.clone());
    }
    first_match(&RULES, &text.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swim_pace_beats_everything() {
        assert_eq!(
            extract("hold 1:45 per 100 meters", &[]).as_deref(),
            Some("1:45/100m")
        );
        assert_eq!(extract("1:50/100m splits", &[]).as_deref(), Some("1:50/100m"));
    }

    #[test]
    fn per_unit_paces() {
        assert_eq!(extract("5:30 per km steady", &[]).as_deref(), Some("5:30/km"));
        assert_eq!(extract("7:00 pace per mile", &[]).as_deref(), Some("7:00/mile"));
        assert_eq!(extract("run 4:45/km", &[]).as_deref(), Some("4:45/km"));
    }

    #[test]
    fn bare_at_pace_defaults_to_km() {
        assert_eq!(extract("run at 5:30 pace", &[]).as_deref(), Some("5:30/km"));
    }

    #[test]
    fn speeds() {
        assert_eq!(extract("hold 25 km/h on the flat", &[]).as_deref(), Some("25 kmph"));
        assert_eq!(extract("around 10 mph", &[]).as_deref(), Some("10 mph"));
        assert_eq!(extract("no pace here", &[]), None);
    }

    #[test]
    fn ner_span_needs_a_digit() {
        let good = vec![EntitySpan {
            start: 0,
            end: 4,
            label: EntityLabel::Pace,
            text: "5:10/km".to_string(),
        }];
        assert_eq!(extract("easy effort", &good).as_deref(), Some("5:10/km"));

        let junk = vec![EntitySpan {
            start: 0,
            end: 4,
            label: EntityLabel::Pace,
            text: "fast".to_string(),
        }];
        assert_eq!(extract("at 5:30 pace", &junk).as_deref(), Some("5:30/km"));
    }
}
