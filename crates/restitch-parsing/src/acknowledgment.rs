//! Acknowledgment section accumulation.

use restitch_core::Acknowledgment;

use crate::engine::{EntityParser, LabeledEntity, SlotRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcknowledgmentField {
    Affiliation,
    EducationalInstitution,
    FundingAgency,
    GrantName,
    GrantNumber,
    Individual,
    OtherInstitution,
    ProjectName,
    ResearchInstitution,
}

impl LabeledEntity for Acknowledgment {
    type Field = AcknowledgmentField;

    fn field_for(tag: &str) -> Option<AcknowledgmentField> {
        match tag {
            "<affiliation>" => Some(AcknowledgmentField::Affiliation),
            "<educationalInstitution>" => Some(AcknowledgmentField::EducationalInstitution),
            "<fundingAgency>" => Some(AcknowledgmentField::FundingAgency),
            "<grantName>" => Some(AcknowledgmentField::GrantName),
            "<grantNumber>" => Some(AcknowledgmentField::GrantNumber),
            "<individual>" => Some(AcknowledgmentField::Individual),
            "<otherInstitution>" => Some(AcknowledgmentField::OtherInstitution),
            "<projectName>" => Some(AcknowledgmentField::ProjectName),
            "<researchInstitution>" => Some(AcknowledgmentField::ResearchInstitution),
            _ => None,
        }
    }

    fn slot(&mut self, field: AcknowledgmentField) -> SlotRef<'_> {
        match field {
            AcknowledgmentField::Affiliation => SlotRef::Single(&mut self.affiliation),
            AcknowledgmentField::EducationalInstitution => {
                SlotRef::Single(&mut self.educational_institution)
            }
            AcknowledgmentField::FundingAgency => SlotRef::Single(&mut self.funding_agency),
            AcknowledgmentField::GrantName => SlotRef::Single(&mut self.grant_name),
            AcknowledgmentField::GrantNumber => SlotRef::Single(&mut self.grant_number),
            AcknowledgmentField::Individual => SlotRef::Single(&mut self.individual),
            AcknowledgmentField::OtherInstitution => SlotRef::Single(&mut self.other_institution),
            AcknowledgmentField::ProjectName => SlotRef::Single(&mut self.project_name),
            AcknowledgmentField::ResearchInstitution => {
                SlotRef::Single(&mut self.research_institution)
            }
        }
    }

    fn is_empty(&self) -> bool {
        Acknowledgment::is_empty(self)
    }
}

/// Parser for tagged acknowledgment sections.
pub type AcknowledgmentParser = EntityParser<Acknowledgment>;
