//! Affiliation/address accumulation.
//!
//! The hard case in this family is the list-append vs new-entity
//! ambiguity: several organisation names in a row belong to one
//! affiliation, but an organisation segment arriving after address
//! content opens a new affiliation block. The boundary predicate below
//! encodes exactly that.

use restitch_core::Affiliation;

use crate::engine::{EntityParser, LabeledEntity, SlotRef, TokenCue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffiliationField {
    Marker,
    Institution,
    Department,
    Laboratory,
    AddrLine,
    PostCode,
    PostBox,
    Region,
    Settlement,
    Country,
}

impl AffiliationField {
    fn is_organisation(self) -> bool {
        matches!(
            self,
            AffiliationField::Institution
                | AffiliationField::Department
                | AffiliationField::Laboratory
        )
    }
}

impl LabeledEntity for Affiliation {
    type Field = AffiliationField;

    fn field_for(tag: &str) -> Option<AffiliationField> {
        match tag {
            "<marker>" => Some(AffiliationField::Marker),
            "<institution>" => Some(AffiliationField::Institution),
            "<department>" => Some(AffiliationField::Department),
            "<laboratory>" => Some(AffiliationField::Laboratory),
            "<addrLine>" => Some(AffiliationField::AddrLine),
            "<postCode>" => Some(AffiliationField::PostCode),
            "<postBox>" => Some(AffiliationField::PostBox),
            "<region>" => Some(AffiliationField::Region),
            "<settlement>" => Some(AffiliationField::Settlement),
            "<country>" => Some(AffiliationField::Country),
            _ => None,
        }
    }

    fn slot(&mut self, field: AffiliationField) -> SlotRef<'_> {
        match field {
            AffiliationField::Marker => SlotRef::Single(&mut self.marker),
            AffiliationField::Institution => SlotRef::Multi(&mut self.institutions),
            AffiliationField::Department => SlotRef::Multi(&mut self.departments),
            AffiliationField::Laboratory => SlotRef::Multi(&mut self.laboratories),
            AffiliationField::AddrLine => SlotRef::Single(&mut self.addr_line),
            AffiliationField::PostCode => SlotRef::Single(&mut self.post_code),
            AffiliationField::PostBox => SlotRef::Single(&mut self.post_box),
            AffiliationField::Region => SlotRef::Single(&mut self.region),
            AffiliationField::Settlement => SlotRef::Single(&mut self.settlement),
            AffiliationField::Country => SlotRef::Single(&mut self.country),
        }
    }

    fn is_marker(field: AffiliationField) -> bool {
        matches!(field, AffiliationField::Marker)
    }

    /// An organisation segment while address content is already present
    /// belongs to the next affiliation block.
    fn starts_new_entity(&self, field: AffiliationField, _cue: &TokenCue) -> bool {
        field.is_organisation() && self.has_address()
    }

    fn is_empty(&self) -> bool {
        Affiliation::is_empty(self)
    }

    fn has_content_besides_marker(&self) -> bool {
        self.has_organisation() || self.has_address()
    }
}

/// Parser for tagged affiliation/address sequences.
pub type AffiliationParser = EntityParser<Affiliation>;
