use serde::Serialize;

use crate::field::FieldSlot;

/// Entities recognized inside an acknowledgment section: funding
/// agencies, grants, thanked individuals and institutions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Acknowledgment {
    pub affiliation: FieldSlot,
    pub educational_institution: FieldSlot,
    pub funding_agency: FieldSlot,
    pub grant_name: FieldSlot,
    pub grant_number: FieldSlot,
    pub individual: FieldSlot,
    pub other_institution: FieldSlot,
    pub project_name: FieldSlot,
    pub research_institution: FieldSlot,
}

impl Acknowledgment {
    pub fn is_empty(&self) -> bool {
        self.affiliation.is_empty()
            && self.educational_institution.is_empty()
            && self.funding_agency.is_empty()
            && self.grant_name.is_empty()
            && self.grant_number.is_empty()
            && self.individual.is_empty()
            && self.other_institution.is_empty()
            && self.project_name.is_empty()
            && self.research_institution.is_empty()
    }
}
