//! Field extractors.
//!
//! One extractor per attribute family, each a pure function over the
//! instruction text (plus optional NER spans where spans can override).
//! Extractors never fail: no value means `None`.
//!
//! Priority is data, not control flow: each family declares an ordered
//! `Rule` list and the first rule to produce a value wins. That keeps the
//! chains inspectable and lets tests target individual rules.

pub mod cadence;
pub mod calories;
pub mod distance;
pub mod duration;
pub mod equipment;
pub mod heart_rate;
pub mod intensity;
pub mod location;
pub mod notes;
pub mod pace;
pub mod progressive;

/// One step in a first-match-wins extraction chain. `apply` receives the
/// lowercased instruction text.
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&str) -> Option<String>,
}

/// Evaluate a rule chain in declared order; the first hit wins.
pub fn first_match(rules: &[Rule], lower: &str) -> Option<String> {
    rules.iter().find_map(|rule| (rule.apply)(lower))
}
