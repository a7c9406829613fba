//! The generic entity accumulator: one implementation of the per-token
//! decision procedure, parameterized by a per-entity tag table and
//! boundary predicate.

use std::marker::PhantomData;

use tracing::{debug, warn};

use restitch_core::{FieldSlot, MultiSlot};
use restitch_tagging::{LabelStream, StreamRecord, Token, TokenCursor};
use restitch_tagging::tagger::SequenceTagger;

use crate::ParseError;
use crate::config::ParsingConfig;

/// Signals accompanying one labeled token, orthogonal to the label
/// itself.
#[derive(Debug, Clone, Default)]
pub struct TokenCue {
    /// The label carried the segment-start prefix.
    pub segment_start: bool,
    /// The token opens a visual line (LINESTART feature).
    pub line_start: bool,
    /// Whitespace preceded the token in the original text.
    pub space_before: bool,
}

/// Mutable access to one field slot of an in-progress entity.
pub enum SlotRef<'a> {
    Single(&'a mut FieldSlot),
    Multi(&'a mut MultiSlot),
}

/// An entity type assembled from a label stream.
///
/// Implementations supply the tag→field routing table, the slot storage,
/// and the entity-specific extra closing condition; the engine owns the
/// shared decision procedure.
pub trait LabeledEntity: Default {
    type Field: Copy + Eq + std::fmt::Debug;

    /// Map a base tag (prefix stripped) to its destination field, or
    /// `None` for tags this entity does not recognize.
    fn field_for(tag: &str) -> Option<Self::Field>;

    fn slot(&mut self, field: Self::Field) -> SlotRef<'_>;

    /// Marker fields get the auxiliary boundary rule: a fresh marker on
    /// a content-bearing entity closes it first, and a second fresh
    /// marker segment closes even a marker-only entity.
    fn is_marker(_field: Self::Field) -> bool {
        false
    }

    /// Extra closing condition for a segment boundary on an
    /// already-populated field (e.g. "organisation segment while address
    /// content is present"). The engine consults this only where the
    /// generic rules leave the list-append vs new-entity choice open.
    fn starts_new_entity(&self, _field: Self::Field, _cue: &TokenCue) -> bool {
        false
    }

    fn is_empty(&self) -> bool;

    /// Content check excluding the marker; only meaningful for
    /// marker-bearing entities.
    fn has_content_besides_marker(&self) -> bool {
        !self.is_empty()
    }
}

/// Accounting for one accumulator run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Tokens whose label matched no recognized tag (includes
    /// `<other>`-tagged and unlabeled tokens).
    pub dropped_tokens: usize,
    /// Times the token cursor failed to resynchronize.
    pub resync_failures: usize,
}

/// Completed entities plus run accounting.
#[derive(Debug, Clone)]
pub struct Reconstruction<E> {
    pub entities: Vec<E>,
    pub stats: RunStats,
}

enum Action {
    /// Extend the destination slot in place (or first write).
    Append,
    /// Open a new list segment on a multi-valued slot.
    Segment,
    /// Close the current entity and restart the field on a fresh one.
    NewEntity,
}

/// The shared accumulator. One linear pass, no suspension points;
/// completed entities are emitted in stream order and never reordered.
pub struct Accumulator<E: LabeledEntity> {
    config: ParsingConfig,
    _entity: PhantomData<E>,
}

impl<E: LabeledEntity> Default for Accumulator<E> {
    fn default() -> Self {
        Self::new(ParsingConfig::default())
    }
}

impl<E: LabeledEntity> Accumulator<E> {
    pub fn new(config: ParsingConfig) -> Self {
        Accumulator {
            config,
            _entity: PhantomData,
        }
    }

    /// Accumulate entities, assuming a single space between consecutive
    /// stream tokens (no original tokenization available).
    pub fn run(&self, stream: &LabelStream) -> Reconstruction<E> {
        self.run_inner(stream, None)
    }

    /// Accumulate entities while walking the original tokenization in
    /// lock-step, restoring exact spacing and resynchronizing on drift.
    pub fn run_with_tokens(&self, stream: &LabelStream, tokens: &[Token]) -> Reconstruction<E> {
        let cursor = TokenCursor::with_lookahead(tokens, self.config.resync_lookahead);
        self.run_inner(stream, Some(cursor))
    }

    fn run_inner(&self, stream: &LabelStream, mut cursor: Option<TokenCursor>) -> Reconstruction<E> {
        let mut entities: Vec<E> = Vec::new();
        let mut current = E::default();
        let mut last_base: Option<String> = None;
        let mut last_segment_start = false;
        let mut stats = RunStats::default();
        let mut seen_token = false;

        for record in stream.records() {
            let token = match record {
                StreamRecord::Break => {
                    // A paragraph break always closes the current entity.
                    flush(&mut current, &mut entities);
                    last_base = None;
                    last_segment_start = false;
                    continue;
                }
                StreamRecord::Token(t) => t,
            };

            let space_before = match cursor.as_mut() {
                Some(c) => {
                    let spacing = c.align(&token.text);
                    spacing.space_before || spacing.newline_before
                }
                None => seen_token,
            };
            seen_token = true;

            let Some(label) = &token.label else {
                stats.dropped_tokens += 1;
                last_base = None;
                last_segment_start = false;
                continue;
            };
            let base = label.base();
            let continuation = last_base.as_deref() == Some(base);
            // The previous label extended a run of this field without a
            // segment-start prefix. A preceding prefixed label opened a
            // run but is not itself a continuation, so a second prefixed
            // label right after it bounds a new entity.
            let resumed = continuation && !last_segment_start;
            last_base = Some(base.to_string());
            last_segment_start = label.is_segment_start();

            let Some(field) = E::field_for(base) else {
                // Unrecognized labels degrade to <other>: the token is
                // dropped from structured output, nothing else changes.
                stats.dropped_tokens += 1;
                continue;
            };

            let cue = TokenCue {
                segment_start: label.is_segment_start(),
                line_start: token.line_start,
                space_before,
            };

            let (slot_empty, multi) = match current.slot(field) {
                SlotRef::Single(s) => (s.is_empty(), false),
                SlotRef::Multi(m) => (m.is_empty(), true),
            };

            let action = if E::is_marker(field) {
                if continuation && !cue.segment_start && !slot_empty {
                    Action::Append
                } else if current.has_content_besides_marker() {
                    Action::NewEntity
                } else if cue.segment_start && !slot_empty {
                    // A second fresh marker segment denotes the next
                    // entity even before any non-marker content arrives;
                    // the marker-only entity is flushed as-is.
                    Action::NewEntity
                } else {
                    Action::Append
                }
            } else if slot_empty {
                Action::Append
            } else if multi {
                let boundary = cue.segment_start
                    || (continuation && cue.line_start && self.config.linestart_promotes_segment);
                if !boundary {
                    Action::Append
                } else if current.starts_new_entity(field, &cue) {
                    Action::NewEntity
                } else {
                    Action::Segment
                }
            } else if cue.segment_start
                && (!resumed || current.starts_new_entity(field, &cue))
            {
                Action::NewEntity
            } else {
                Action::Append
            };

            match action {
                Action::Append => match current.slot(field) {
                    SlotRef::Single(s) => s.append(&token.text, !slot_empty && space_before),
                    SlotRef::Multi(m) => m.append(&token.text, !slot_empty && space_before),
                },
                Action::Segment => {
                    if let SlotRef::Multi(m) = current.slot(field) {
                        m.append_segment(&token.text);
                    }
                }
                Action::NewEntity => {
                    debug!(field = ?field, token = %token.text, "entity boundary");
                    flush(&mut current, &mut entities);
                    match current.slot(field) {
                        SlotRef::Single(s) => s.append(&token.text, false),
                        SlotRef::Multi(m) => m.append_segment(&token.text),
                    }
                }
            }
        }

        // The final in-progress entity is emitted iff non-empty.
        flush(&mut current, &mut entities);

        if let Some(c) = cursor {
            stats.resync_failures = c.resync_failures();
        }
        Reconstruction { entities, stats }
    }
}

fn flush<E: LabeledEntity>(current: &mut E, entities: &mut Vec<E>) {
    if !current.is_empty() {
        entities.push(std::mem::take(current));
    }
}

/// Parser façade owning a config, shared by every entity family.
///
/// Wraps the accumulator with the wire contract (parse the tagger
/// output string first) and with per-item batch isolation: one failed
/// input never affects its siblings.
pub struct EntityParser<E: LabeledEntity> {
    config: ParsingConfig,
    _entity: PhantomData<E>,
}

impl<E: LabeledEntity> Default for EntityParser<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: LabeledEntity> EntityParser<E> {
    pub fn new() -> Self {
        Self::with_config(ParsingConfig::default())
    }

    pub fn with_config(config: ParsingConfig) -> Self {
        EntityParser {
            config,
            _entity: PhantomData,
        }
    }

    pub fn config(&self) -> &ParsingConfig {
        &self.config
    }

    /// Parse one labeled wire string into completed entities.
    pub fn parse(&self, labeled: &str) -> Result<Vec<E>, ParseError> {
        let stream = LabelStream::parse(labeled)?;
        Ok(self.accumulator().run(&stream).entities)
    }

    /// Parse with the original tokenization walked in lock-step.
    pub fn parse_with_tokens(
        &self,
        labeled: &str,
        tokens: &[Token],
    ) -> Result<Reconstruction<E>, ParseError> {
        let stream = LabelStream::parse(labeled)?;
        Ok(self.accumulator().run_with_tokens(&stream, tokens))
    }

    /// Accumulate from an already-parsed stream.
    pub fn parse_stream(&self, stream: &LabelStream) -> Reconstruction<E> {
        self.accumulator().run(stream)
    }

    /// Run the injected tagger on a feature matrix, then parse its
    /// labeled output.
    pub fn tag_and_parse(
        &self,
        tagger: &dyn SequenceTagger,
        features: &str,
    ) -> Result<Vec<E>, ParseError> {
        let labeled = tagger.tag(features)?;
        self.parse(&labeled)
    }

    /// Parse many labeled inputs, isolating failures per item: a failed
    /// input yields an `Err` slot (logged with its index) while sibling
    /// items are unaffected.
    pub fn parse_batch<I, S>(&self, items: I) -> Vec<Result<Vec<E>, ParseError>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                self.parse(item.as_ref()).map_err(|e| {
                    warn!(index, error = %e, "batch item failed, continuing");
                    e
                })
            })
            .collect()
    }

    fn accumulator(&self) -> Accumulator<E> {
        Accumulator::new(self.config.clone())
    }
}
