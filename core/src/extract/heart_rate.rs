//! Heart-rate targets: caps and floors, zone ranges, split work/rest zones,
//! single zones, then bare bpm values near a heart-rate mention.

use std::sync::LazyLock;

use regex::Regex;

use super::{Rule, first_match};

static NOT_EXCEED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"not\s+exceed(?:ing)?\s+(\d{2,3})").expect("valid not-exceed regex")
});
static BELOW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:heart\s*rate|hr)\s*(?:below|under|less\s*than|<|max|not\s+exceeding)\s*(\d{2,3})")
        .expect("valid hr below regex")
});
static ABOVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:heart\s*rate|hr)\s*(?:above|over|more\s*than|>|min)\s*(\d{2,3})")
        .expect("valid hr above regex")
});
static ZONE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"zone\s*(\d)\s*(?:to|-|and)\s*(\d)").expect("valid zone range regex")
});
static ZONE_WORK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"zone\s*(\d)\s*(?:work|during\s*work|on|active)").expect("valid work zone regex")
});
static ZONE_REST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"zone\s*(\d)\s*(?:rest|during\s*rest|off|recovery)").expect("valid rest zone regex")
});
static ZONE_SINGLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"zone\s*(\d)").expect("valid single zone regex"));
static BARE_BPM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:heart\s*rate|hr)\s*(?:at|around)?\s*(\d{2,3})\s*(?:bpm|beats)?")
        .expect("valid bare bpm regex")
});

pub static RULES: [Rule; 6] = [
    Rule {
        name: "not-exceeding",
        apply: |t| NOT_EXCEED_RE.captures(t).map(|c| format!("Below {} bpm", &c[1])),
    },
    Rule {
        name: "bounded",
        apply: bounded,
    },
    Rule {
        name: "zone-range",
        apply: |t| {
            ZONE_RANGE_RE
                .captures(t)
                .map(|c| format!("Zone {}-{}", &c[1], &c[2]))
        },
    },
    Rule {
        name: "work-rest-zones",
        apply: work_rest_zones,
    },
    Rule {
        name: "single-zone",
        apply: |t| ZONE_SINGLE_RE.captures(t).map(|c| format!("Zone {}", &c[1])),
    },
    Rule {
        name: "bare-bpm",
        apply: |t| BARE_BPM_RE.captures(t).map(|c| format!("{} bpm", &c[1])),
    },
];

fn bounded(lower: &str) -> Option<String> {
    if let Some(caps) = BELOW_RE.captures(lower) {
        return Some(format!("Below {} bpm", &caps[1]));
    }
    ABOVE_RE
        .captures(lower)
        .map(|caps| format!("Above {} bpm", &caps[1]))
}

fn work_rest_zones(lower: &str) -> Option<String> {
    let work = ZONE_WORK_RE.captures(lower)?;
    let rest = ZONE_REST_RE.captures(lower)?;
    Some(format!("Zone {} (work) / Zone {} (rest)", &work[1], &rest[1]))
}

pub fn extract(text: &str) -> Option<String> {
    first_match(&RULES, &text.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_and_floors() {
        assert_eq!(
            extract("heart rate not exceeding 160").as_deref(),
            Some("Below 160 bpm")
        );
        assert_eq!(extract("keep hr under 150").as_deref(), Some("Below 150 bpm"));
        assert_eq!(extract("heart rate above 120").as_deref(), Some("Above 120 bpm"));
    }

    #[test]
    fn zones() {
        assert_eq!(extract("stay in zone 3 to 4").as_deref(), Some("Zone 3-4"));
        assert_eq!(extract("hold zone 2").as_deref(), Some("Zone 2"));
        assert_eq!(
            extract("zone 4 during work, zone 2 during rest").as_deref(),
            Some("Zone 4 (work) / Zone 2 (rest)")
        );
    }

    #[test]
    fn bare_bpm_needs_hr_context() {
        assert_eq!(extract("heart rate around 150 bpm").as_deref(), Some("150 bpm"));
        assert_eq!(extract("150 bpm music"), None);
        assert_eq!(extract("nothing relevant"), None);
    }
}
