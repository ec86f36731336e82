//! Optional named-entity collaborator.
//!
//! A span extractor can pre-label parts of the instruction (athlete names,
//! distances, paces). Spans are an override on top of the rule engine, never a
//! requirement: every extractor must produce the same correctness with an
//! empty span list, so `NoSpans` is a fully valid implementation.

use std::fmt;

/// Labels a span extractor may attach to a sub-range of the instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Person,
    Distance,
    Pace,
    Activity,
    Time,
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Distance => "DISTANCE",
            EntityLabel::Pace => "PACE",
            EntityLabel::Activity => "ACTIVITY",
            EntityLabel::Time => "TIME",
        };
        f.write_str(s)
    }
}

/// One labeled sub-range of the input text. Offsets are character positions
/// into the instruction; `text` is the covered slice. Spans live for a single
/// extraction pass and are never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub label: EntityLabel,
    pub text: String,
}

/// Injectable, read-only span source. Implementations are loaded once at
/// process start and shared across invocations; they must be cheap to call
/// and must return an empty list rather than fail when no model is available.
pub trait SpanExtractor: Send + Sync {
    fn extract_spans(&self, text: &str) -> Vec<EntitySpan>;
}

/// Default collaborator: no model, no spans. The rule engine carries the
/// full extraction load.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSpans;

impl SpanExtractor for NoSpans {
    fn extract_spans(&self, _text: &str) -> Vec<EntitySpan> {
        Vec::new()
    }
}

pub(crate) fn first_span<'a>(spans: &'a [EntitySpan], label: EntityLabel) -> Option<&'a EntitySpan> {
    spans.iter().find(|s| s.label == label)
}
