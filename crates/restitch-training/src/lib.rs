//! Training-data reconstruction: re-emit the original token text
//! decorated with entity tags and `<lb/>` line markers, so a human can
//! correct the tagger's output and feed it back as gold-standard
//! training material.
//!
//! The defining contract is losslessness: stripping every inserted tag
//! and `<lb/>` marker from the rendering must reproduce the original
//! input text exactly, modulo XML entity encoding.

use thiserror::Error;

pub mod reconstructor;
pub mod tables;
pub mod writer;

pub use reconstructor::{RenderOutcome, TrainingReconstructor};
pub use tables::{
    ACKNOWLEDGMENT_ELEMENTS, AFFILIATION_ELEMENTS, CITATION_ELEMENTS, ElementTable,
    FIGURE_ELEMENTS, PERSON_ELEMENTS,
};
pub use writer::{test_closing_tag, write_field};

#[derive(Error, Debug)]
pub enum TrainingError {
    #[error("wire format error: {0}")]
    Wire(#[from] restitch_tagging::WireError),
}
