//! The wire contract between the external sequence tagger and the
//! reconstruction engine.
//!
//! The tagger hands back a newline-delimited string where every
//! non-blank line is `token<TAB>feature1<TAB>...<TAB>label` and blank
//! lines delimit paragraph blocks. This crate parses that shape into a
//! [`LabelStream`], models labels (base tag + segment-start prefix),
//! carries the original tokenization (whitespace and line breaks
//! included) and walks it in lock-step through a resynchronizing
//! [`TokenCursor`].

pub mod cursor;
pub mod label;
pub mod tagger;
pub mod token;
pub mod wire;

pub use cursor::{Spacing, TokenCursor};
pub use label::Label;
pub use tagger::{SequenceTagger, TaggerError};
pub use token::{Token, TokenKind, tokenize};
pub use wire::{LabelStream, LabeledToken, StreamRecord, WireError};
