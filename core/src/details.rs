//! Activity-specific detail extractors, invoked only when the classified
//! activity matches: strength sets/reps/weight/exercises, swim sets and
//! stroke, HIIT interval structure, cycling cadence (see `extract::cadence`).

use std::sync::LazyLock;

use regex::Regex;

/// Fixed strength exercise catalog, matched in declared order.
pub(crate) const EXERCISE_CATALOG: [(&str, &str); 16] = [
    (r"bench\s*press", "Bench Press"),
    (r"squats?", "Squats"),
    (r"deadlifts?", "Deadlifts"),
    (r"leg\s*press", "Leg Press"),
    (r"lunges?", "Lunges"),
    (r"pull[-\s]?ups?", "Pull-ups"),
    (r"push[-\s]?ups?", "Push-ups"),
    (r"bent\s*(?:over\s+)?rows?", "Bent Rows"),
    (r"curls?", "Curls"),
    (r"shoulder\s*press", "Shoulder Press"),
    (r"overhead\s*press", "Overhead Press"),
    (r"plank", "Plank"),
    (r"sit[-\s]?ups?", "Sit-ups"),
    (r"crunches?", "Crunches"),
    (r"dips?\b", "Dips"),
    (r"lat\s*pull\s*downs?", "Lat Pulldowns"),
];

static EXERCISE_RES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    EXERCISE_CATALOG
        .iter()
        .map(|(pat, name)| (Regex::new(pat).expect("valid exercise regex"), *name))
        .collect()
});

static SETS_OF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*sets?\s*(?:of|x)\s*(\d+)\s*(?:reps?)?").expect("valid sets regex")
});
static BARE_NXM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+)\s*x\s*(\d+)\b").expect("valid nxm regex"));
static WEIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(kg|lbs?|pounds?)\s*(?:dumbbells?|barbell)?")
        .expect("valid weight regex")
});

#[derive(Debug, Default, PartialEq)]
pub struct StrengthDetails {
    pub sets: Option<String>,
    pub reps: Option<String>,
    pub weight: Option<String>,
    pub exercises: Vec<&'static str>,
}

pub fn strength(text: &str) -> StrengthDetails {
    let lower = text.to_lowercase();
    let mut details = StrengthDetails::default();

    if let Some(caps) = SETS_OF_RE.captures(&lower) {
        details.sets = Some(caps[1].to_string());
        details.reps = Some(caps[2].to_string());
    } else if let Some(caps) = BARE_NXM_RE.captures(&lower) {
        details.sets = Some(caps[1].to_string());
        details.reps = Some(caps[2].to_string());
    }

    if lower.contains("to failure") || lower.contains("til failure") {
        details.reps = Some("To failure".to_string());
    }

    if let Some(caps) = WEIGHT_RE.captures(&lower) {
        let unit = if caps[2].starts_with("lb") || caps[2].starts_with("pound") {
            "lbs"
        } else {
            "kg"
        };
        details.weight = Some(format!("{} {unit}", &caps[1]));
    }

    for (re, name) in EXERCISE_RES.iter() {
        if re.is_match(&lower) {
            details.exercises.push(name);
        }
    }

    details
}

/// Regex-ready form of an exercise name: lowercase, hyphens loosened to
/// "hyphen or space".
fn exercise_pattern(name: &str) -> String {
    name.to_lowercase().replace('-', r"[-\s]?")
}

/// Per-exercise detail lines for multi-exercise strength work: a sets×reps
/// pattern adjacent to the exercise name (after it, then before it), a
/// "to failure" mention, and finally a bare name fallback; a nearby weight is
/// appended when present.
pub fn per_exercise(text: &str, exercises: &[&'static str]) -> Vec<(String, String)> {
    let lower = text.to_lowercase();
    let mut results = Vec::new();

    for name in exercises {
        let ex = exercise_pattern(name);
        let mut detail = detail_for(&lower, name, &ex).unwrap_or_else(|| (*name).to_string());

        let weight_re = Regex::new(&format!(
            r"{ex}\s*.*?(\d+(?:\.\d+)?)\s*(kg|lbs?)\s*(?:dumbbells?|barbell)?"
        ));
        if let Some(caps) = weight_re.ok().and_then(|re| re.captures(&lower)) {
            detail.push_str(&format!(" @ {}{}", &caps[1], &caps[2]));
            if lower.contains("dumbbell") {
                detail.push_str(" dumbbells");
            }
        }

        results.push(((*name).to_string(), detail));
    }

    results
}

fn detail_for(lower: &str, name: &str, ex: &str) -> Option<String> {
    let after_re = Regex::new(&format!(
        r"{ex}\s*[-,:]?\s*(\d+)\s*sets?\s*(?:of|x)\s*(\d+)\s*(?:reps?)?"
    ))
    .ok()?;
    if let Some(caps) = after_re.captures(lower) {
        return Some(format!("{name} - {} sets × {} reps", &caps[1], &caps[2]));
    }

    let before_re = Regex::new(&format!(
        r"(\d+)\s*sets?\s*(?:of|x)\s*(\d+)\s*(?:reps?)?\s*[-,:]?\s*{ex}"
    ))
    .ok()?;
    if let Some(caps) = before_re.captures(lower) {
        return Some(format!("{name} - {} sets × {} reps", &caps[1], &caps[2]));
    }

    let failure_re = Regex::new(&format!(r"{ex}\s*.*?(?:to|til)\s*failure")).ok()?;
    if failure_re.is_match(lower) {
        let sets_re = Regex::new(&format!(r"(\d+)\s*sets?\s*.*?{ex}")).ok()?;
        let sets = sets_re
            .captures(lower)
            .map(|c| format!("{} sets ", &c[1]))
            .unwrap_or_default();
        return Some(format!("{name} - {sets}to failure"));
    }

    None
}

// ── Swimming ────────────────────────────────────────────────────────────────

static SWIM_SETS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*sets?\s*(?:of|x)\s*(\d+)\s*(?:m(?:eters?)?|metres?)")
        .expect("valid swim sets regex")
});
static SWIM_NXM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*x\s*(\d+)\s*(?:m(?:eters?)?|metres?)?").expect("valid swim nxm regex")
});
static SWIM_COMPLETE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:complete|finish)\s*(?:in|within)\s*(\d+)\s*(?:minutes?|mins?)")
        .expect("valid swim complete regex")
});
static SWIM_MAX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:minutes?|mins?)\s*(?:maximum|max|limit|cap)")
        .expect("valid swim max regex")
});
static SWIM_UNDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:under|within|less\s*than)\s*(\d+)\s*(?:minutes?|mins?)")
        .expect("valid swim under regex")
});

const STROKES: [&str; 6] = [
    "freestyle",
    "backstroke",
    "breaststroke",
    "butterfly",
    "medley",
    "front crawl",
];

#[derive(Debug, Default, PartialEq)]
pub struct SwimDetails {
    /// Composed "N × Mm" set description
    pub sets: Option<String>,
    pub stroke: Option<String>,
    pub max_duration: Option<String>,
}

pub fn swimming(text: &str) -> SwimDetails {
    let lower = text.to_lowercase();
    let mut details = SwimDetails::default();

    if let Some(caps) = SWIM_SETS_RE
        .captures(&lower)
        .or_else(|| SWIM_NXM_RE.captures(&lower))
    {
        details.sets = Some(format!("{} × {}m", &caps[1], &caps[2]));
    }

    details.stroke = STROKES
        .iter()
        .find(|s| lower.contains(*s))
        .map(|s| crate::text::title_case(s));

    details.max_duration = SWIM_COMPLETE_RE
        .captures(&lower)
        .or_else(|| SWIM_MAX_RE.captures(&lower))
        .or_else(|| SWIM_UNDER_RE.captures(&lower))
        .map(|caps| format!("{} minutes", &caps[1]));

    details
}

// ── HIIT ────────────────────────────────────────────────────────────────────

static HIIT_WORK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:seconds?|secs?|s)\s*(?:work|on)").expect("valid hiit work regex")
});
static HIIT_REST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:seconds?|secs?|s)\s*(?:rest|off)").expect("valid hiit rest regex")
});
static HIIT_ROUNDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*rounds?").expect("valid hiit rounds regex"));
static HIIT_TOTAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"total\s+(\d+)\s*(?:minutes?|mins?)").expect("valid hiit total regex")
});

#[derive(Debug, Default, PartialEq)]
pub struct HiitDetails {
    pub work_duration: Option<String>,
    pub rest_duration: Option<String>,
    pub rounds: Option<String>,
    pub total_duration: Option<String>,
}

pub fn hiit(text: &str) -> HiitDetails {
    let lower = text.to_lowercase();
    HiitDetails {
        work_duration: HIIT_WORK_RE
            .captures(&lower)
            .map(|c| format!("{} seconds", &c[1])),
        rest_duration: HIIT_REST_RE
            .captures(&lower)
            .map(|c| format!("{} seconds", &c[1])),
        rounds: HIIT_ROUNDS_RE.captures(&lower).map(|c| c[1].to_string()),
        total_duration: HIIT_TOTAL_RE
            .captures(&lower)
            .map(|c| format!("{} minutes", &c[1])),
    }
}

// ── Rest between sets (non-HIIT) ────────────────────────────────────────────

static REST_AFTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:rest|recovery)\s+(\d+)\s*(seconds?|secs?|s|minutes?|mins?)")
        .expect("valid rest-after regex")
});
static REST_BEFORE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(seconds?|secs?|s|minutes?|mins?)\s*(?:rest|recovery|between)")
        .expect("valid rest-before regex")
});

/// "rest 90 seconds" / "2 minutes between sets" — for everything except HIIT,
/// which carries its own work/rest structure.
pub fn rest_between_sets(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    let caps = REST_AFTER_RE
        .captures(&lower)
        .or_else(|| REST_BEFORE_RE.captures(&lower))?;
    let unit = if caps[2].starts_with("min") {
        "minutes"
    } else {
        "seconds"
    };
    Some(format!("{} {unit}", &caps[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_sets_reps_weight() {
        let d = strength("5 sets of 5 squats at 80kg");
        assert_eq!(d.sets.as_deref(), Some("5"));
        assert_eq!(d.reps.as_deref(), Some("5"));
        assert_eq!(d.weight.as_deref(), Some("80 kg"));
        assert_eq!(d.exercises, vec!["Squats"]);
    }

    #[test]
    fn bare_nxm_and_failure_override() {
        let d = strength("bench press 5x5 then curls to failure");
        assert_eq!(d.sets.as_deref(), Some("5"));
        assert_eq!(d.reps.as_deref(), Some("To failure"));
        assert_eq!(d.exercises, vec!["Bench Press", "Curls"]);
    }

    #[test]
    fn per_exercise_details() {
        let text = "squats 4 sets of 8, 3 sets of 10 lunges";
        let details = per_exercise(text, &["Squats", "Lunges"]);
        assert_eq!(details[0].1, "Squats - 4 sets × 8 reps");
        assert_eq!(details[1].1, "Lunges - 3 sets × 10 reps");
    }

    #[test]
    fn per_exercise_failure_and_weight() {
        let text = "3 sets of pull-ups to failure with 10kg";
        let details = per_exercise(text, &["Pull-ups"]);
        assert_eq!(details[0].1, "Pull-ups - 3 sets to failure @ 10kg");
    }

    #[test]
    fn swim_details() {
        let d = swimming("30 sets of 100 meters freestyle, complete within 75 minutes");
        assert_eq!(d.sets.as_deref(), Some("30 × 100m"));
        assert_eq!(d.stroke.as_deref(), Some("Freestyle"));
        assert_eq!(d.max_duration.as_deref(), Some("75 minutes"));
    }

    #[test]
    fn swim_nxm_shorthand() {
        let d = swimming("10x100m backstroke under 40 minutes");
        assert_eq!(d.sets.as_deref(), Some("10 × 100m"));
        assert_eq!(d.stroke.as_deref(), Some("Backstroke"));
        assert_eq!(d.max_duration.as_deref(), Some("40 minutes"));
    }

    #[test]
    fn hiit_structure() {
        let d = hiit("30 seconds work, 15 seconds rest, 20 rounds, total 15 minutes");
        assert_eq!(d.work_duration.as_deref(), Some("30 seconds"));
        assert_eq!(d.rest_duration.as_deref(), Some("15 seconds"));
        assert_eq!(d.rounds.as_deref(), Some("20"));
        assert_eq!(d.total_duration.as_deref(), Some("15 minutes"));
    }

    #[test]
    fn rest_between_sets_forms() {
        assert_eq!(
            rest_between_sets("rest 90 seconds between sets").as_deref(),
            Some("90 seconds")
        );
        assert_eq!(
            rest_between_sets("2 minutes between sets").as_deref(),
            Some("2 minutes")
        );
        assert_eq!(rest_between_sets("no rest mentioned"), None);
    }
}
