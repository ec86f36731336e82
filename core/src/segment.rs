//! Compound-instruction splitting.
//!
//! Two strategies, tried in order:
//! 1. multi-activity: distinct sports joined by transition connectives
//!    ("swim … then bike … then run") — each fragment must re-classify to a
//!    concrete activity on its own;
//! 2. phase split: one sport in phases ("first 2 km easy, then 5 km tempo,
//!    last 2 km easy"), gated on an explicit "first/last N km" marker.
//!
//! Anything else stays a single segment.

use std::sync::LazyLock;

use regex::Regex;

use crate::activity::{ACTIVITY_PRIORITY, Activity, classify};
use crate::text::contains_word;

/// Fragments shorter than this are connective debris, not segments.
const MIN_FRAGMENT_CHARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Warmup,
    Main,
    Cooldown,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Warmup => "Warmup",
            Phase::Main => "Main",
            Phase::Cooldown => "Cooldown",
        }
    }
}

/// One sub-range of the instruction with its resolved activity and, for
/// phased workouts, a phase label.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub activity: Option<Activity>,
    pub phase: Option<Phase>,
}

static TRANSITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:,\s*)?(?:then\s+|followed\s+by\s+|transition\s+to\s+|after\s+that\s+|next\s+)")
        .expect("valid transition regex")
});
static PHASE_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:,\s*)?(?:then\s+|followed\s+by\s+|after\s+that\s+)|,\s+last\s+")
        .expect("valid phase split regex")
});
static PHASE_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:first|last)\s+\d+\s*(?:km?|miles?|k)\b").expect("valid phase marker regex")
});

/// Activities that never anchor a multi-activity split.
fn is_generic(activity: Activity) -> bool {
    matches!(
        activity,
        Activity::Rest | Activity::MatchGame | Activity::Cardio | Activity::Hiit
    )
}

fn distinct_activities(lower: &str) -> usize {
    ACTIVITY_PRIORITY
        .iter()
        .filter(|(activity, keywords)| {
            !is_generic(*activity) && keywords.iter().any(|kw| contains_word(lower, kw))
        })
        .count()
}

/// Split a compound instruction, or return `None` to treat it as one segment.
pub fn split(text: &str) -> Option<Vec<Segment>> {
    let lower = text.to_lowercase();

    if distinct_activities(&lower) >= 2 {
        let segments: Vec<Segment> = TRANSITION_RE
            .split(text)
            .map(str::trim)
            .filter(|part| part.len() >= MIN_FRAGMENT_CHARS)
            .filter_map(|part| {
                classify(part).map(|activity| Segment {
                    text: part.to_string(),
                    activity: Some(activity),
                    phase: None,
                })
            })
            .collect();
        if segments.len() >= 2 {
            return Some(segments);
        }
    }

    let parts: Vec<&str> = PHASE_SPLIT_RE.split(text).collect();
    if parts.len() >= 2 && PHASE_MARKER_RE.is_match(&lower) {
        let parent = classify(text);
        let last = parts.len() - 1;
        let segments: Vec<Segment> = parts
            .iter()
            .enumerate()
            .filter_map(|(i, raw)| {
                let part = raw.trim();
                if part.len() < MIN_FRAGMENT_CHARS {
                    return None;
                }
                let part_lower = part.to_lowercase();
                let mut phase = if i == 0
                    || part_lower.contains("warmup")
                    || part_lower.contains("warm up")
                {
                    Phase::Warmup
                } else if i == last
                    || part_lower.contains("cooldown")
                    || part_lower.contains("cool down")
                {
                    Phase::Cooldown
                } else {
                    Phase::Main
                };
                if part_lower.contains("easy") {
                    if i == 0 {
                        phase = Phase::Warmup;
                    } else if i == last {
                        phase = Phase::Cooldown;
                    }
                }
                Some(Segment {
                    text: part.to_string(),
                    activity: parent,
                    phase: Some(phase),
                })
            })
            .collect();
        if segments.len() >= 2 {
            return Some(segments);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triathlon_style_multi_activity() {
        let segs = split("swim 1500 meters, then bike 40 km, then run 10 km").unwrap();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].activity, Some(Activity::Swimming));
        assert_eq!(segs[1].activity, Some(Activity::Cycling));
        assert_eq!(segs[2].activity, Some(Activity::Running));
        assert!(segs.iter().all(|s| s.phase.is_none()));
    }

    #[test]
    fn phase_split_needs_marker() {
        let segs =
            split("run first 2 km easy, then 5 km at tempo, last 2 km easy cool down").unwrap();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].phase, Some(Phase::Warmup));
        assert_eq!(segs[1].phase, Some(Phase::Main));
        assert_eq!(segs[2].phase, Some(Phase::Cooldown));
        assert!(segs.iter().all(|s| s.activity == Some(Activity::Running)));

        // Same connectives, no "first/last N km" marker: stays single-segment.
        assert_eq!(split("run 2 km easy, then stretch"), None);
    }

    #[test]
    fn single_activity_stays_whole() {
        assert_eq!(split("easy 10 km run tomorrow morning"), None);
    }

    #[test]
    fn fragments_must_reclassify() {
        // Two sports are named, but after splitting only one fragment carries
        // an activity keyword of its own: not a valid multi-activity split.
        assert_eq!(split("swim and bike gear check, then go all out"), None);
    }
}
