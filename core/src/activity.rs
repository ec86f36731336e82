//! Activity classification.
//!
//! A fixed, ordered priority table maps keyword families to one canonical
//! activity. Order is load-bearing: "swim and lift some weights" must come out
//! as Swimming because Swimming sits above Strength Training.

use crate::text::contains_word;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    Triathlon,
    Swimming,
    Cycling,
    Running,
    StrengthTraining,
    Hiit,
    Yoga,
    Hiking,
    Cardio,
    Rest,
    MatchGame,
}

impl Activity {
    pub fn as_str(self) -> &'static str {
        match self {
            Activity::Triathlon => "Triathlon",
            Activity::Swimming => "Swimming",
            Activity::Cycling => "Cycling",
            Activity::Running => "Running",
            Activity::StrengthTraining => "Strength Training",
            Activity::Hiit => "HIIT",
            Activity::Yoga => "Yoga",
            Activity::Hiking => "Hiking",
            Activity::Cardio => "Cardio",
            Activity::Rest => "Rest",
            Activity::MatchGame => "Match/Game",
        }
    }

    /// Verb used when composing the short Task description.
    pub(crate) fn task_verb(self) -> String {
        match self {
            Activity::Running => "run".to_string(),
            Activity::Cycling => "ride".to_string(),
            Activity::Swimming => "swim".to_string(),
            Activity::StrengthTraining => "workout".to_string(),
            Activity::Hiit => "HIIT session".to_string(),
            Activity::Yoga => "yoga session".to_string(),
            Activity::Hiking => "hike".to_string(),
            other => other.as_str().to_lowercase(),
        }
    }
}

/// Priority-ordered keyword families. Scanned top to bottom; first whole-word
/// hit wins. Do not reorder.
pub(crate) const ACTIVITY_PRIORITY: [(Activity, &[&str]); 11] = [
    (Activity::Triathlon, &["triathlon", "tri session"]),
    (
        Activity::Swimming,
        &["swim", "pool session", "freestyle", "backstroke", "breaststroke"],
    ),
    (Activity::Cycling, &["bike", "cycle", "cycling", "ride"]),
    (
        Activity::Running,
        &[
            "run", "jog", "sprint", "marathon", "tempo run", "fartlek", "long run", "easy run",
        ],
    ),
    (
        Activity::StrengthTraining,
        &[
            "lift",
            "squat",
            "bench",
            "deadlift",
            "press",
            "curl",
            "strength",
            "weight",
            "pull-up",
            "pullup",
            "push-up",
            "pushup",
            "dumbbell",
            "barbell",
            "leg day",
            "upper body",
            "conditioning",
        ],
    ),
    (Activity::Hiit, &["hiit", "high intensity", "tabata", "circuit"]),
    (
        Activity::Yoga,
        &["yoga", "mobility", "stretching", "flexibility", "foam roll"],
    ),
    (Activity::Hiking, &["hike", "hiking", "trek"]),
    (Activity::Cardio, &["cardio", "elliptical", "stairmaster"]),
    (Activity::Rest, &["rest day", "off day"]),
    (Activity::MatchGame, &["game", "match", "tournament"]),
];

/// First activity whose keyword family has a whole-word match in the text.
pub fn classify(text: &str) -> Option<Activity> {
    let lower = text.to_lowercase();
    for (activity, keywords) in ACTIVITY_PRIORITY {
        if keywords.iter().any(|kw| contains_word(&lower, kw)) {
            return Some(activity);
        }
    }
    None
}
