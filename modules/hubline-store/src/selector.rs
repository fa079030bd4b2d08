//! Backend-agnostic query predicates.
//!
//! A [`Selector`] is a conjunction of per-field constraints: a document
//! matches iff it satisfies every condition, and the empty selector matches
//! everything. Builders translate request filters into a selector once; the
//! same selector drives both `find` and `count`.

use regex::Regex;
use serde_json::Value;

/// A single field constraint.
#[derive(Debug, Clone)]
pub enum Condition {
    /// Scalar field equality.
    Eq { field: &'static str, value: Value },
    /// Scalar field is one of the given values. An empty list matches
    /// nothing: the vehicle for filters whose referent resolved to no
    /// records (unknown channel, tag carried by no form).
    In { field: &'static str, values: Vec<Value> },
    /// Array-valued field contains the given value.
    Contains { field: &'static str, value: Value },
    /// Case-insensitive substring match on a string field. The term is
    /// taken literally; it is not a pattern.
    Search { field: &'static str, term: String },
}

#[derive(Debug, Clone, Default)]
pub struct Selector {
    conditions: Vec<Condition>,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: &'static str, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition::Eq {
            field,
            value: value.into(),
        });
        self
    }

    pub fn is_in<V: Into<Value>>(mut self, field: &'static str, values: Vec<V>) -> Self {
        self.conditions.push(Condition::In {
            field,
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn contains(mut self, field: &'static str, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition::Contains {
            field,
            value: value.into(),
        });
        self
    }

    pub fn search(mut self, field: &'static str, term: impl Into<String>) -> Self {
        self.conditions.push(Condition::Search {
            field,
            term: term.into(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Evaluate against a document's JSON projection. Total: a missing
    /// field or mismatched shape fails the condition, never errors.
    pub fn matches(&self, doc: &Value) -> bool {
        self.conditions.iter().all(|c| condition_matches(c, doc))
    }
}

fn condition_matches(condition: &Condition, doc: &Value) -> bool {
    match condition {
        Condition::Eq { field, value } => doc.get(field) == Some(value),
        Condition::In { field, values } => {
            doc.get(field).is_some_and(|v| values.contains(v))
        }
        Condition::Contains { field, value } => doc
            .get(field)
            .and_then(Value::as_array)
            .is_some_and(|items| items.contains(value)),
        Condition::Search { field, term } => doc
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|text| search_pattern(term).is_match(text)),
    }
}

fn search_pattern(term: &str) -> Regex {
    // Escaped literal, so compilation cannot fail.
    Regex::new(&format!("(?i){}", regex::escape(term))).expect("escaped term is a valid pattern")
}
