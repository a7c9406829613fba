use serde::Serialize;

use crate::field::{FieldSlot, MultiSlot};

/// An affiliation block: organisational names plus postal address.
///
/// Institutions, departments and laboratories are multi-valued because a
/// single affiliation routinely names several co-referenced organisations
/// ("MIT, CSAIL"). Whether a further organisation name belongs to this
/// affiliation or opens a new one is decided by the accumulator using
/// [`Affiliation::has_address`] as the boundary signal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Affiliation {
    pub marker: FieldSlot,
    pub institutions: MultiSlot,
    pub departments: MultiSlot,
    pub laboratories: MultiSlot,
    pub addr_line: FieldSlot,
    pub post_code: FieldSlot,
    pub post_box: FieldSlot,
    pub region: FieldSlot,
    pub settlement: FieldSlot,
    pub country: FieldSlot,
}

impl Affiliation {
    pub fn is_empty(&self) -> bool {
        self.marker.is_empty() && !self.has_organisation() && !self.has_address()
    }

    pub fn has_organisation(&self) -> bool {
        !self.institutions.is_empty()
            || !self.departments.is_empty()
            || !self.laboratories.is_empty()
    }

    /// True once any address-bearing field was set. An organisation
    /// segment arriving after this point starts a new affiliation block.
    pub fn has_address(&self) -> bool {
        !self.addr_line.is_empty()
            || !self.post_code.is_empty()
            || !self.post_box.is_empty()
            || !self.region.is_empty()
            || !self.settlement.is_empty()
            || !self.country.is_empty()
    }

    pub fn marker(&self) -> Option<&str> {
        self.marker.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_detection() {
        let mut aff = Affiliation::default();
        assert!(!aff.has_address());
        aff.institutions.append_segment("MIT");
        assert!(aff.has_organisation());
        assert!(!aff.has_address());
        aff.settlement.append("Cambridge", false);
        assert!(aff.has_address());
        assert!(!aff.is_empty());
    }
}
