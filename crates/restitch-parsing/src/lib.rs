//! Entity accumulators: one linear pass over a tagger label stream,
//! reassembling typed bibliographic entities.
//!
//! The per-token decision procedure (extend the current field, open a
//! new list segment, or close the entity and start a new one) is
//! implemented once in [`engine::Accumulator`]; each entity family only
//! supplies its tag table, field multiplicities and boundary predicate
//! through the [`engine::LabeledEntity`] trait.

use thiserror::Error;

pub mod acknowledgment;
pub mod affiliation;
pub mod citation;
pub mod config;
pub mod engine;
pub mod figure;
pub mod person;

pub use acknowledgment::AcknowledgmentParser;
pub use affiliation::AffiliationParser;
pub use citation::CitationParser;
pub use config::{ParsingConfig, ParsingConfigBuilder};
pub use engine::{Accumulator, EntityParser, LabeledEntity, Reconstruction, RunStats, SlotRef, TokenCue};
pub use figure::FigureParser;
pub use person::PersonParser;

// Re-export domain types from core (canonical definitions live there)
pub use restitch_core::{Acknowledgment, Affiliation, BiblioItem, FigureCluster, Person};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("wire format error: {0}")]
    Wire(#[from] restitch_tagging::WireError),
    #[error("tagger error: {0}")]
    Tagger(#[from] restitch_tagging::TaggerError),
}
