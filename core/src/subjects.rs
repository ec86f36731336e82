//! Athlete-name resolution and multi-subject / multi-day fan-out detection.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::ner::{EntityLabel, EntitySpan, first_span};
use crate::temporal::{WEEKDAYS, next_weekday};
use crate::text::{contains_word, title_case};

/// Words that must never be accepted as athlete names — pronouns, verbs,
/// workout vocabulary that happens to sit where a name would.
const NAME_STOPWORDS: [&str; 58] = [
    "a", "an", "the", "to", "him", "her", "me", "new", "workout", "some", "he", "she", "they",
    "it", "you", "we", "i", "someone", "ok", "so", "if", "this", "that", "then", "first", "next",
    "also", "just", "please", "kindly", "assign", "give", "schedule", "do", "make", "set", "plan",
    "run", "swim", "bike", "cycle", "lift", "jog", "sprint", "hike", "easy", "hard", "long",
    "short", "tempo", "interval", "recovery", "simulation", "race", "leg", "upper", "mobility",
    "conditioning",
];

const PRONOUNS: [&str; 7] = ["he", "she", "they", "it", "you", "we", "i"];

static LEADING_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-ZÀ-ÖØ-Ý][a-zà-öø-ÿ]+)\s*,").expect("valid leading name regex")
});
static ASSIGN_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:assign|give|schedule)\s+(\w+)").expect("valid assign name regex")
});
static TO_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:assign|give)\s+.*?\s+to\s+(\w+)").expect("valid to-name regex")
});
static NAME_VERB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\w+)\s+(?:needs?\s+to|should|will|has|have|gotta)\b")
        .expect("valid name-verb regex")
});
static FOR_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bfor\s+([A-ZÀ-ÖØ-Ý][a-zà-öø-ÿ]+)\s*[.,!]?\s*$").expect("valid for-name regex")
});
static PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\w+)\s+and\s+(\w+)\s+(?:both|all|each)?\s*(?:need|should|will|have)\b")
        .expect("valid athlete pair regex")
});

fn is_stopword(candidate: &str) -> bool {
    NAME_STOPWORDS.contains(&candidate.to_lowercase().as_str())
}

fn accept(candidate: &str) -> Option<String> {
    (!is_stopword(candidate)).then(|| title_case(candidate))
}

/// Resolve the athlete name. Priority chain, first hit wins:
/// leading "Name," → NER person span → "assign/give/schedule NAME" →
/// "… to NAME" → "NAME needs/should/…" → trailing "for NAME".
pub fn athlete(text: &str, spans: &[EntitySpan]) -> Option<String> {
    if let Some(caps) = LEADING_NAME_RE.captures(text)
        && let Some(name) = accept(&caps[1])
    {
        return Some(name);
    }
    if let Some(span) = first_span(spans, EntityLabel::Person) {
        return Some(title_case(&span.text));
    }
    for re in [&*ASSIGN_NAME_RE, &*TO_NAME_RE, &*NAME_VERB_RE, &*FOR_NAME_RE] {
        if let Some(caps) = re.captures(text)
            && let Some(name) = accept(&caps[1])
        {
            return Some(name);
        }
    }
    None
}

/// "X and Y both need …" — two athletes, rejected when either side is a
/// pronoun.
pub fn multiple_athletes(text: &str) -> Option<Vec<String>> {
    let caps = PAIR_RE.captures(text)?;
    let first = &caps[1];
    let second = &caps[2];
    let is_pronoun = |s: &str| PRONOUNS.contains(&s.to_lowercase().as_str());
    if is_pronoun(first) || is_pronoun(second) {
        return None;
    }
    Some(vec![title_case(first), title_case(second)])
}

/// All full weekday names in the text, resolved to their next occurrence and
/// sorted Monday-first. Only more than one distinct day counts as a fan-out.
pub fn multiple_days(text: &str, reference: NaiveDate) -> Option<Vec<String>> {
    let lower = text.to_lowercase();
    let mut found: Vec<(u32, String)> = WEEKDAYS
        .iter()
        .filter(|(name, _)| name.len() > 3 && contains_word(&lower, name))
        .filter_map(|(_, index)| {
            let date = next_weekday(reference, *index)?;
            Some((*index, date.format("%A, %B %d, %Y").to_string()))
        })
        .collect();

    if found.len() < 2 {
        return None;
    }
    found.sort_by_key(|(index, _)| *index);
    Some(found.into_iter().map(|(_, date)| date).collect())
}
