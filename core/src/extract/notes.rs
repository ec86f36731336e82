//! Special instructions, intentions, and coaching emphasis.
//!
//! Fixed phrase catalogs feed a note list; overlapping phrases (two notes
//! sharing at least two words, or one containing the other) are treated as
//! duplicates and only the first is kept.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::text::capitalize;

const PREP_PATTERNS: [(&str, &str); 12] = [
    (r"marathon\s+preparation|marathon\s+prep", "Marathon preparation"),
    (r"race\s+(?:day\s+)?prep(?:aration)?", "Race preparation"),
    (r"base\s+building", "Base building"),
    (r"speed\s+(?:block\s+)?(?:work|training)", "Speed work"),
    (r"endurance\s+training", "Endurance training"),
    (r"active\s+recovery", "Active recovery"),
    (r"form\s+(?:work|drill|focus)", "Form focus"),
    (r"technique\s+(?:work|drill|focus)", "Technique focus"),
    (r"lactate\s+threshold\s+(?:work|training|run)", "Lactate threshold work"),
    (r"tempo\s+(?:work|training|run)", "Tempo work"),
    (r"race\s+day\s+simulation", "Race day simulation"),
    (r"equally\s+important\s+as", "Equally important as hard training"),
];

const COACHING_PATTERNS: [(&str, &str); 6] = [
    (r"no\s+skipping\b", "No skipping"),
    (r"no\s+excuses?\b", "No excuses"),
    (r"\bstrictly\b", "Strict adherence"),
    (r"not\s+one\s+minute\s+late", "Be on time"),
    (r"be\s+(?:there\s+)?on\s+time", "Be on time"),
    (r"no\s+shortcuts?", "No shortcuts"),
];

const INSTRUCTION_PATTERNS: [(&str, &str); 3] = [
    (r"do\s+not\s+push\s+beyond\b.*?pace", "Do not push beyond given pace"),
    (r"do\s+not\s+go\s+faster\b", "Do not go faster than prescribed"),
    (r"do\s+not\s+skip\b", "Do not skip"),
];

const STROKE_WORDS: [&str; 4] = ["freestyle", "backstroke", "breaststroke", "butterfly"];

static PREP_RES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| compile(&PREP_PATTERNS));
static COACHING_RES: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile(&COACHING_PATTERNS));
static INSTRUCTION_RES: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile(&INSTRUCTION_PATTERNS));
static FULL_FOCUS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"full\s+focus\s+(?:required|needed|mandatory)").expect("valid full focus regex")
});
static OBSERVER_THERE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"i\s+will\s+be\s+(?:there|watching|present|observing)")
        .expect("valid observer regex")
});
static OBSERVER_WATCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"i\s+(?:will|shall)\s+(?:observe|watch|monitor)").expect("valid observe regex")
});
static ONLY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w[\w\s]{3,30})\s+only\s*[.,!]?\s*$").expect("valid only regex")
});

fn compile(patterns: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    patterns
        .iter()
        .map(|(pat, label)| (Regex::new(pat).expect("valid notes regex"), *label))
        .collect()
}

/// Two notes count as duplicates when they share at least this many words.
const OVERLAP_WORDS: usize = 2;

fn overlaps(phrase: &str, note: &str) -> bool {
    let note_lower = note.to_lowercase();
    let phrase_words: HashSet<&str> = phrase.split_whitespace().collect();
    let note_words: HashSet<&str> = note_lower.split_whitespace().collect();
    let shared = phrase_words.intersection(&note_words).count();
    shared >= OVERLAP_WORDS || note_lower.contains(phrase) || phrase.contains(&note_lower)
}

pub fn extract(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    let mut notes: Vec<String> = Vec::new();

    if lower.contains("nothing intense") || lower.contains("not intense") {
        notes.push("Recovery - not intense".to_string());
    }
    if lower.contains("warm up") || lower.contains("warmup") {
        notes.push("Include warm-up".to_string());
    }
    if lower.contains("cool down") || lower.contains("cooldown") {
        notes.push("Include cool-down".to_string());
    }
    if lower.contains("stretch") {
        notes.push("Include stretching".to_string());
    }

    for (re, label) in PREP_RES.iter() {
        if re.is_match(&lower) {
            notes.push((*label).to_string());
        }
    }

    if FULL_FOCUS_RE.is_match(&lower) {
        notes.push("Full focus required".to_string());
    }

    for (re, label) in COACHING_RES.iter() {
        if re.is_match(&lower) {
            notes.push((*label).to_string());
        }
    }
    for (re, label) in INSTRUCTION_RES.iter() {
        if re.is_match(&lower) {
            notes.push((*label).to_string());
        }
    }

    if OBSERVER_THERE_RE.is_match(&lower) {
        notes.push("Coach will be present".to_string());
    }
    if OBSERVER_WATCH_RE.is_match(&lower) {
        notes.push("Coach will observe".to_string());
    }

    // Trailing "… only" qualifier, unless an existing note already covers it
    // or it is really a swim stroke restriction.
    if let Some(caps) = ONLY_RE.captures(&lower) {
        let phrase = caps[1].trim().to_string();
        let already_covered = notes.iter().any(|n| overlaps(&phrase, n));
        let is_stroke = STROKE_WORDS.iter().any(|s| phrase.contains(s));
        if !already_covered && !is_stroke {
            notes.push(format!("{} only", capitalize(&phrase)));
        }
    }

    // Deduplicate, first-seen order.
    let mut seen = HashSet::new();
    let unique: Vec<String> = notes
        .into_iter()
        .filter(|n| seen.insert(n.clone()))
        .collect();

    if unique.is_empty() {
        None
    } else {
        Some(unique.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_catalogs() {
        assert_eq!(
            extract("easy spin, nothing intense, stretch after").as_deref(),
            Some("Recovery - not intense; Include stretching")
        );
        assert_eq!(
            extract("marathon prep block, no excuses").as_deref(),
            Some("Marathon preparation; No excuses")
        );
    }

    #[test]
    fn observer_notes() {
        assert_eq!(
            extract("I will be there, do not skip").as_deref(),
            Some("Do not skip; Coach will be present")
        );
    }

    #[test]
    fn trailing_only_qualifier() {
        assert_eq!(
            extract("light jog, flat surfaces only").as_deref(),
            Some("Flat surfaces only")
        );
        // Stroke restrictions belong to the swim detail extractor, not notes.
        assert_eq!(extract("swim freestyle only"), None);
    }

    #[test]
    fn overlapping_phrases_collapse() {
        // "include warm up today only" shares >= 2 words with the warm-up note?
        // It does not, but an exact repeat of a catalog phrase must not double.
        assert_eq!(
            extract("warm up well, warmup matters").as_deref(),
            Some("Include warm-up")
        );
    }
}
