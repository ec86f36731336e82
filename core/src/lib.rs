//! Whistle core: a deterministic rule engine that turns free-form coaching
//! instructions ("Alex and Sam both need an easy 10k on monday and friday")
//! into structured workout assignments.
//!
//! The pipeline is pure and synchronous: activity classification, per-field
//! extraction chains, compound-instruction segmentation, athlete/day fan-out,
//! and confidence scoring, all reproducible for a given text and reference
//! date. The only injectable collaborator is an optional, read-only
//! [`SpanExtractor`] supplying pre-labeled NER spans; the rule chains are the
//! ground truth and must work identically without it.

pub mod activity;
pub mod attr;
mod builder;
pub mod details;
pub mod extract;
pub mod ner;
pub mod segment;
pub mod subjects;
pub mod temporal;
mod text;

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub use activity::Activity;
pub use attr::{Assignment, AttrKey, Attribute};
pub use ner::{EntityLabel, EntitySpan, NoSpans, SpanExtractor};
pub use segment::{Phase, Segment};

/// Shortest input (trimmed) that is worth attempting to interpret.
const MIN_INPUT_CHARS: usize = 5;

pub const ERR_NO_SPEECH: &str = "No significant speech detected.";
pub const ERR_NOT_UNDERSTOOD: &str = "Could not understand the workout instruction.";

/// Coarse measure of how much of the instruction was understood: the number
/// of extracted fields beyond the always-present Name/Activity/Task trio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    fn from_filled(filled: usize) -> Self {
        match filled {
            0 => Confidence::Low,
            1..=2 => Confidence::Medium,
            _ => Confidence::High,
        }
    }
}

/// Outcome of one interpretation: either a set of assignments with a
/// confidence grade, or an unintelligible-input error. There is no partial
/// third state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum ParseResult {
    Success {
        assignments: Vec<Assignment>,
        original_text: String,
        confidence: Confidence,
    },
    Unintelligible {
        assignments: Vec<Assignment>,
        error: String,
        original_text: String,
    },
}

impl ParseResult {
    fn unintelligible(text: &str, error: &str) -> Self {
        ParseResult::Unintelligible {
            assignments: Vec::new(),
            error: error.to_string(),
            original_text: text.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    pub fn assignments(&self) -> &[Assignment] {
        match self {
            ParseResult::Success { assignments, .. }
            | ParseResult::Unintelligible { assignments, .. } => assignments,
        }
    }

    pub fn original_text(&self) -> &str {
        match self {
            ParseResult::Success { original_text, .. }
            | ParseResult::Unintelligible { original_text, .. } => original_text,
        }
    }
}

/// The interpretation pipeline. Cheap to clone; safe to share across threads.
/// Holds the one process-wide collaborator (the optional span extractor) as
/// an explicit capability instead of global state.
#[derive(Clone)]
pub struct Interpreter {
    spans: Arc<dyn SpanExtractor>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Rule-only interpreter, no NER collaborator.
    pub fn new() -> Self {
        Self::with_spans(Arc::new(NoSpans))
    }

    pub fn with_spans(spans: Arc<dyn SpanExtractor>) -> Self {
        Interpreter { spans }
    }

    /// Interpret against the current wall-clock date.
    pub fn interpret(&self, text: &str) -> ParseResult {
        self.interpret_at(text, Local::now().date_naive())
    }

    /// Interpret with an explicit reference date. Identical input and
    /// reference produce an identical result.
    pub fn interpret_at(&self, text: &str, reference: NaiveDate) -> ParseResult {
        if text.trim().chars().count() < MIN_INPUT_CHARS {
            return ParseResult::unintelligible(text, ERR_NO_SPEECH);
        }

        let spans = self.spans.extract_spans(text);

        let multi_athletes = subjects::multiple_athletes(text);
        let multi_days = subjects::multiple_days(text, reference);

        let mut activity = activity::classify(text);
        if activity.is_none()
            && let Some(span) = spans.iter().find(|s| s.label == EntityLabel::Activity)
        {
            activity = activity::classify(&span.text);
        }

        let segments = segment::split(text);
        let athlete = subjects::athlete(text, &spans);

        let mut assignments: Vec<Assignment> = Vec::new();

        if let Some(segments) = segments {
            self.build_segmented(
                &mut assignments,
                text,
                &segments,
                athlete.as_deref(),
                activity,
                reference,
            );
        } else if let Some(athletes) = multi_athletes {
            for athlete in &athletes {
                if let Some(days) = &multi_days {
                    for day in days {
                        assignments.push(builder::build(
                            Some(athlete.as_str()),
                            text,
                            &spans,
                            activity,
                            reference,
                            Some(day.as_str()),
                        ));
                    }
                } else {
                    assignments.push(builder::build(
                        Some(athlete.as_str()),
                        text,
                        &spans,
                        activity,
                        reference,
                        None,
                    ));
                }
            }
        } else if let Some(days) = multi_days {
            for day in &days {
                assignments.push(builder::build(
                    athlete.as_deref(),
                    text,
                    &spans,
                    activity,
                    reference,
                    Some(day.as_str()),
                ));
            }
        } else {
            assignments.push(builder::build(
                athlete.as_deref(),
                text,
                &spans,
                activity,
                reference,
                None,
            ));
        }

        let confidence = assignments
            .first()
            .map_or(Confidence::Low, |a| Confidence::from_filled(a.optional_filled()));

        if assignments.is_empty() || assignments.iter().all(|a| a.attributes.len() <= 2) {
            return ParseResult::unintelligible(text, ERR_NOT_UNDERSTOOD);
        }

        ParseResult::Success {
            assignments,
            original_text: text.to_string(),
            confidence,
        }
    }

    /// One assignment per segment. Fields that describe the whole session
    /// (time, date, heart rate, calories, equipment, notes) are extracted
    /// once from the full text and injected into any segment lacking them;
    /// the athlete name always comes from the full text.
    fn build_segmented(
        &self,
        assignments: &mut Vec<Assignment>,
        text: &str,
        segments: &[Segment],
        athlete: Option<&str>,
        activity: Option<Activity>,
        reference: NaiveDate,
    ) {
        let shared: [(AttrKey, Option<String>); 6] = [
            (AttrKey::Time, temporal::resolve_time(text)),
            (AttrKey::Date, temporal::resolve_date(text, reference)),
            (AttrKey::HeartRate, extract::heart_rate::extract(text)),
            (AttrKey::Calories, extract::calories::extract(text)),
            (AttrKey::Equipment, extract::equipment::extract(text)),
            (AttrKey::Notes, extract::notes::extract(text)),
        ];

        for segment in segments {
            let seg_activity = segment
                .activity
                .or_else(|| activity::classify(&segment.text))
                .or(activity);
            let seg_spans = self.spans.extract_spans(&segment.text);

            let mut assignment = builder::build(
                athlete,
                &segment.text,
                &seg_spans,
                seg_activity,
                reference,
                None,
            );

            for (key, value) in &shared {
                if !assignment.has_key(*key)
                    && let Some(value) = value
                {
                    assignment.push(*key, value.clone());
                }
            }

            if let Some(phase) = segment.phase {
                assignment.attributes.insert(
                    3.min(assignment.attributes.len()),
                    Attribute {
                        key: AttrKey::Segment,
                        value: phase.as_str().to_string(),
                    },
                );
            }

            assignments.push(assignment);
        }
    }
}

/// Convenience wrapper: rule-only interpretation of one instruction.
pub fn interpret(text: &str, reference: NaiveDate) -> ParseResult {
    Interpreter::new().interpret_at(text, reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wed() -> NaiveDate {
        // Wednesday
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
    }

    fn get<'a>(assignment: &'a Assignment, key: AttrKey) -> Option<&'a str> {
        assignment.get(key)
    }

    #[test]
    fn short_input_is_not_speech() {
        let result = interpret("  hm ", wed());
        assert_eq!(result, ParseResult::unintelligible("  hm ", ERR_NO_SPEECH));
    }

    #[test]
    fn unrecognized_text_falls_back_to_general_low_confidence() {
        let result = interpret("purple monkey dishwasher", wed());
        assert!(matches!(
            result,
            ParseResult::Success { confidence: Confidence::Low, .. }
        ));
        let assignment = &result.assignments()[0];
        assert_eq!(assignment.get(AttrKey::Activity), Some("General"));
        assert_eq!(assignment.get(AttrKey::Task), Some("purple monkey dishwasher"));
    }

    #[test]
    fn bare_weekday_resolves_to_next_occurrence() {
        let result = interpret("Alex needs to run 10k, do it monday", wed());
        let assignment = &result.assignments()[0];
        assert_eq!(get(assignment, AttrKey::Date), Some("Monday, January 08, 2024"));
        assert_eq!(get(assignment, AttrKey::Distance), Some("10k"));
    }

    #[test]
    fn athlete_and_day_cross_product() {
        let result = interpret(
            "Alex and Sam both need an easy 10 km run on monday, wednesday and friday",
            wed(),
        );
        let assignments = result.assignments();
        assert_eq!(assignments.len(), 6);

        let pairs: Vec<(String, String)> = assignments
            .iter()
            .map(|a| {
                (
                    a.get(AttrKey::Name).unwrap().to_string(),
                    a.get(AttrKey::Date).unwrap().to_string(),
                )
            })
            .collect();
        // All pairs unique; athletes vary slowest.
        let unique: std::collections::HashSet<_> = pairs.iter().collect();
        assert_eq!(unique.len(), 6);
        assert!(pairs.iter().take(3).all(|(name, _)| name == "Alex"));
        assert!(pairs.iter().skip(3).all(|(name, _)| name == "Sam"));

        // Non-subject, non-date attributes identical across the fan-out.
        let stripped: Vec<Vec<&Attribute>> = assignments
            .iter()
            .map(|a| {
                a.attributes
                    .iter()
                    .filter(|attr| !matches!(attr.key, AttrKey::Name | AttrKey::Date))
                    .collect()
            })
            .collect();
        assert!(stripped.iter().all(|attrs| *attrs == stripped[0]));
    }

    #[test]
    fn activity_priority_resolves_ambiguity() {
        let result = interpret("swim easy and lift some weights after, 45 minutes", wed());
        assert_eq!(
            result.assignments()[0].get(AttrKey::Activity),
            Some("Swimming")
        );
    }

    #[test]
    fn triathlon_segments_share_full_text_fields() {
        let result = interpret(
            "Maya, race simulation saturday at 7am: swim 1500 meters, then bike 40 km, then run 10 km, heart rate below 165",
            wed(),
        );
        let assignments = result.assignments();
        assert_eq!(assignments.len(), 3);
        for (assignment, expected) in assignments.iter().zip(["Swimming", "Cycling", "Running"]) {
            assert_eq!(assignment.get(AttrKey::Name), Some("Maya"));
            assert_eq!(assignment.get(AttrKey::Activity), Some(expected));
            assert_eq!(assignment.get(AttrKey::Time), Some("7:00 AM"));
            assert_eq!(assignment.get(AttrKey::Date), Some("Saturday, January 06, 2024"));
            assert_eq!(assignment.get(AttrKey::HeartRate), Some("Below 165 bpm"));
        }
    }

    #[test]
    fn phased_run_carries_segment_labels() {
        let result = interpret(
            "run first 2 km easy as warm up, then 6 km at 4:50 per km, last 2 km easy cool down",
            wed(),
        );
        let assignments = result.assignments();
        assert_eq!(assignments.len(), 3);
        assert_eq!(assignments[0].get(AttrKey::Segment), Some("Warmup"));
        assert_eq!(assignments[1].get(AttrKey::Segment), Some("Main"));
        assert_eq!(assignments[2].get(AttrKey::Segment), Some("Cooldown"));
        assert!(assignments
            .iter()
            .all(|a| a.get(AttrKey::Activity) == Some("Running")));
        // Segment label sits right after the Name/Activity/Task trio.
        assert_eq!(assignments[0].attributes[3].key, AttrKey::Segment);
    }

    #[test]
    fn confidence_bands() {
        // Distance + date + time = 3 optional fields → High.
        let high = interpret("run 10 km tomorrow morning", wed());
        assert!(matches!(
            high,
            ParseResult::Success { confidence: Confidence::High, .. }
        ));

        // Distance + intensity = 2 → Medium.
        let medium = interpret("easy run of 10 km", wed());
        assert!(matches!(
            medium,
            ParseResult::Success { confidence: Confidence::Medium, .. }
        ));

        // Nothing beyond the Name/Activity/Task trio.
        let low = interpret("go for a run sometime", wed());
        assert!(matches!(
            low,
            ParseResult::Success { confidence: Confidence::Low, .. }
        ));
    }

    #[test]
    fn idempotent_for_fixed_reference() {
        let text = "Sarah, progressive 12 km run friday 6am, start 6:00 finish 5:10, no excuses";
        let a = interpret(text, wed());
        let b = interpret(text, wed());
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn success_wire_shape() {
        let result = interpret("run 5 km tomorrow", wed());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["original_text"], "run 5 km tomorrow");
        assert_eq!(json["confidence"], "Medium");
        assert!(json["error"].is_null());
        assert_eq!(json["assignments"][0]["attributes"][0]["key"], "Name");
    }

    #[test]
    fn failure_wire_shape() {
        let result = interpret("hi", wed());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["error"], ERR_NO_SPEECH);
        assert_eq!(json["assignments"].as_array().map(Vec::len), Some(0));
        assert!(json["confidence"].is_null());
    }

    struct FixedSpans(Vec<EntitySpan>);

    impl SpanExtractor for FixedSpans {
        fn extract_spans(&self, _text: &str) -> Vec<EntitySpan> {
            self.0.clone()
        }
    }

    #[test]
    fn ner_spans_override_but_never_required() {
        let text = "give the long session to Dana, 21 km";
        let rule_only = Interpreter::new().interpret_at(text, wed());

        let with_spans = Interpreter::with_spans(Arc::new(FixedSpans(vec![EntitySpan {
            start: 25,
            end: 29,
            label: EntityLabel::Person,
            text: "Dana".to_string(),
        }])))
        .interpret_at(text, wed());

        assert_eq!(
            rule_only.assignments()[0].get(AttrKey::Name),
            with_spans.assignments()[0].get(AttrKey::Name)
        );
    }
}
