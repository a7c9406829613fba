//! Domain types for bibliographic structure extraction.
//!
//! Entities here are the typed output of the label-stream accumulators:
//! each entity holds one [`FieldSlot`] (or [`MultiSlot`]) per tag its
//! tagging model can predict. Slots encapsulate the "first write vs
//! append-with-separator" decision so that every parser shares identical
//! accumulation semantics.

pub mod acknowledgment;
pub mod affiliation;
pub mod biblio;
pub mod field;
pub mod figure;
pub mod person;

pub use acknowledgment::Acknowledgment;
pub use affiliation::Affiliation;
pub use biblio::BiblioItem;
pub use field::{FieldSlot, MultiSlot};
pub use figure::FigureCluster;
pub use person::Person;
