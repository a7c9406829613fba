//! Field slots: the single place where token accumulation decides
//! between "first write", "append with separator", and "new list
//! segment".

use serde::Serialize;

/// A single-valued field of an in-progress entity.
///
/// Empty until the first token routed to it arrives; later tokens are
/// appended with or without a separating space depending on whether the
/// original tokenization carried whitespace between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldSlot(Option<String>);

impl FieldSlot {
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn get(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Absorb a token. The first token sets the field; subsequent tokens
    /// are concatenated, preceded by a space iff `needs_space`.
    pub fn append(&mut self, text: &str, needs_space: bool) {
        match &mut self.0 {
            None => self.0 = Some(text.to_string()),
            Some(value) => {
                if needs_space {
                    value.push(' ');
                }
                value.push_str(text);
            }
        }
    }

    pub fn take(&mut self) -> Option<String> {
        self.0.take()
    }
}

/// A multi-valued field (e.g. the institutions of one affiliation).
///
/// `append` extends the most recent segment; `append_segment` opens a new
/// one. The distinction is exactly the accumulator's "continuation vs
/// list-append" decision, kept here so no parser re-implements it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MultiSlot(Vec<String>);

impl MultiSlot {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Extend the current (last) segment, or start the first one.
    pub fn append(&mut self, text: &str, needs_space: bool) {
        match self.0.last_mut() {
            None => self.0.push(text.to_string()),
            Some(last) => {
                if needs_space {
                    last.push(' ');
                }
                last.push_str(text);
            }
        }
    }

    /// Start a new segment holding `text`.
    pub fn append_segment(&mut self, text: &str) {
        self.0.push(text.to_string());
    }
}
