//! Assignment construction: one (athlete, day, segment) combination in, one
//! ordered attribute list out. Attribute order is part of the output contract.

use chrono::NaiveDate;

use crate::activity::{self, Activity};
use crate::attr::{Assignment, AttrKey};
use crate::details;
use crate::extract::{
    cadence, calories, distance, duration, equipment, heart_rate, intensity, location, notes,
    pace, progressive,
};
use crate::ner::EntitySpan;
use crate::temporal;
use crate::text::capitalize;

const UNSPECIFIED_ATHLETE: &str = "Unspecified";
const GENERAL_ACTIVITY: &str = "General";

pub(crate) fn build(
    athlete: Option<&str>,
    text: &str,
    spans: &[EntitySpan],
    activity: Option<Activity>,
    reference: NaiveDate,
    date_override: Option<&str>,
) -> Assignment {
    let mut assignment = Assignment::default();

    assignment.push(AttrKey::Name, athlete.unwrap_or(UNSPECIFIED_ATHLETE));

    let activity = activity.or_else(|| activity::classify(text));
    assignment.push(
        AttrKey::Activity,
        activity.map_or(GENERAL_ACTIVITY, Activity::as_str),
    );

    let distance_val = distance::extract(text, spans);
    let pace_val = pace::extract(text, spans);
    let intensity_val = intensity::extract(text);
    let duration_val = duration::extract(text);

    assignment.push(
        AttrKey::Task,
        task_description(text, activity, &intensity_val, &distance_val, &pace_val),
    );

    assignment.push_opt(AttrKey::Distance, distance_val);
    assignment.push_opt(AttrKey::Pace, pace_val);

    if let Some((start, finish)) = progressive::extract(text) {
        assignment.push(AttrKey::StartingPace, start);
        assignment.push(AttrKey::FinishingPace, finish);
    }

    // HIIT carries its own Work/Rest/Total Duration structure instead.
    if activity != Some(Activity::Hiit) {
        assignment.push_opt(AttrKey::Duration, duration_val);
    }

    assignment.push_opt(AttrKey::Intensity, intensity_val);
    assignment.push_opt(AttrKey::Time, temporal::resolve_time(text));

    let date_val = date_override
        .map(str::to_string)
        .or_else(|| temporal::resolve_date(text, reference));
    assignment.push_opt(AttrKey::Date, date_val);

    assignment.push_opt(AttrKey::Location, location::extract(text));
    assignment.push_opt(AttrKey::Calories, calories::extract(text));
    assignment.push_opt(AttrKey::HeartRate, heart_rate::extract(text));

    match activity {
        Some(Activity::StrengthTraining) => push_strength(&mut assignment, text),
        Some(Activity::Swimming) => {
            let swim = details::swimming(text);
            assignment.push_opt(AttrKey::Sets, swim.sets);
            assignment.push_opt(AttrKey::Stroke, swim.stroke);
            assignment.push_opt(AttrKey::MaxDuration, swim.max_duration);
        }
        Some(Activity::Cycling) => {
            assignment.push_opt(AttrKey::Cadence, cadence::extract(text));
        }
        Some(Activity::Hiit) => {
            let hiit = details::hiit(text);
            assignment.push_opt(AttrKey::WorkDuration, hiit.work_duration);
            assignment.push_opt(AttrKey::RestDuration, hiit.rest_duration);
            assignment.push_opt(AttrKey::Rounds, hiit.rounds);
            assignment.push_opt(AttrKey::TotalDuration, hiit.total_duration);
        }
        _ => {}
    }

    if activity != Some(Activity::Hiit) {
        assignment.push_opt(AttrKey::Rest, details::rest_between_sets(text));
    }

    assignment.push_opt(AttrKey::Equipment, equipment::extract(text));
    assignment.push_opt(AttrKey::Notes, notes::extract(text));

    assignment
}

fn push_strength(assignment: &mut Assignment, text: &str) {
    let strength = details::strength(text);
    if strength.exercises.len() > 1 {
        for (i, (_, detail)) in details::per_exercise(text, &strength.exercises)
            .into_iter()
            .enumerate()
        {
            assignment.push(AttrKey::ExerciseN(i as u8 + 1), detail);
        }
    } else {
        if let Some(exercise) = strength.exercises.first() {
            assignment.push(AttrKey::Exercise, *exercise);
        }
        assignment.push_opt(AttrKey::Sets, strength.sets);
        assignment.push_opt(AttrKey::Reps, strength.reps);
        assignment.push_opt(AttrKey::Weight, strength.weight);
    }
}

/// Short human-readable summary: intensity + activity verb + distance +
/// "@ pace". Falls back to the raw instruction when nothing was extracted.
fn task_description(
    text: &str,
    activity: Option<Activity>,
    intensity: &Option<String>,
    distance: &Option<String>,
    pace: &Option<String>,
) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(intensity) = intensity {
        parts.push(intensity.to_lowercase());
    }
    if let Some(activity) = activity {
        parts.push(activity.task_verb());
    }
    if let Some(distance) = distance {
        parts.push(distance.clone());
    }
    if let Some(pace) = pace {
        parts.push(format!("@ {pace}"));
    }
    if parts.is_empty() {
        text.trim().to_string()
    } else {
        capitalize(parts.join(" ").trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wed() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
    }

    #[test]
    fn running_assignment_shape() {
        let a = build(
            Some("Alex"),
            "easy 10 km run at 5:30 pace tomorrow morning",
            &[],
            None,
            wed(),
            None,
        );
        assert_eq!(a.get(AttrKey::Name), Some("Alex"));
        assert_eq!(a.get(AttrKey::Activity), Some("Running"));
        assert_eq!(a.get(AttrKey::Task), Some("Easy run 10 km @ 5:30/km"));
        assert_eq!(a.get(AttrKey::Distance), Some("10 km"));
        assert_eq!(a.get(AttrKey::Pace), Some("5:30/km"));
        assert_eq!(a.get(AttrKey::Intensity), Some("Easy"));
        assert_eq!(a.get(AttrKey::Time), Some("Morning"));
        assert_eq!(a.get(AttrKey::Date), Some("Thursday, January 04, 2024"));
    }

    #[test]
    fn unknown_activity_defaults_to_general() {
        let a = build(None, "just move around a bit today", &[], None, wed(), None);
        assert_eq!(a.get(AttrKey::Name), Some("Unspecified"));
        assert_eq!(a.get(AttrKey::Activity), Some("General"));
    }

    #[test]
    fn hiit_suppresses_plain_duration_and_rest() {
        let a = build(
            None,
            "hiit circuit 30 seconds work 15 seconds rest 20 rounds total 15 minutes",
            &[],
            None,
            wed(),
            None,
        );
        assert_eq!(a.get(AttrKey::Activity), Some("HIIT"));
        assert!(!a.has_key(AttrKey::Duration));
        assert!(!a.has_key(AttrKey::Rest));
        assert_eq!(a.get(AttrKey::WorkDuration), Some("30 seconds"));
        assert_eq!(a.get(AttrKey::RestDuration), Some("15 seconds"));
        assert_eq!(a.get(AttrKey::Rounds), Some("20"));
        assert_eq!(a.get(AttrKey::TotalDuration), Some("15 minutes"));
    }

    #[test]
    fn multi_exercise_strength_uses_numbered_family() {
        let a = build(
            Some("Maya"),
            "strength: squats 4 sets of 8, then bench press 3 sets of 10",
            &[],
            None,
            wed(),
            None,
        );
        assert_eq!(a.get(AttrKey::Activity), Some("Strength Training"));
        assert_eq!(
            a.get(AttrKey::ExerciseN(1)),
            Some("Bench Press - 3 sets × 10 reps")
        );
        assert_eq!(a.get(AttrKey::ExerciseN(2)), Some("Squats - 4 sets × 8 reps"));
        assert!(!a.has_key(AttrKey::Exercise));
    }

    #[test]
    fn date_override_beats_text_date() {
        let a = build(
            Some("Alex"),
            "run 5 km on friday",
            &[],
            None,
            wed(),
            Some("Monday, January 08, 2024"),
        );
        assert_eq!(a.get(AttrKey::Date), Some("Monday, January 08, 2024"));
    }

    #[test]
    fn progressive_paces() {
        let a = build(
            None,
            "progressive 12 km run starting 6:00 finishing 5:15",
            &[],
            None,
            wed(),
            None,
        );
        assert_eq!(a.get(AttrKey::StartingPace), Some("6:00/km"));
        assert_eq!(a.get(AttrKey::FinishingPace), Some("5:15/km"));
    }
}
