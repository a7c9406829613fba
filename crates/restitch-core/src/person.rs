use serde::Serialize;

use crate::field::FieldSlot;

/// A person name reassembled from a tagged name sequence.
///
/// The `marker` is the citation reference marker (e.g. "1" or "a")
/// linking an author to an affiliation; it is accumulated separately
/// from the name content and drives its own entity-boundary rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Person {
    pub marker: FieldSlot,
    pub title: FieldSlot,
    pub forename: FieldSlot,
    pub middlename: FieldSlot,
    pub surname: FieldSlot,
    pub suffix: FieldSlot,
}

impl Person {
    pub fn is_empty(&self) -> bool {
        self.marker.is_empty()
            && self.title.is_empty()
            && self.forename.is_empty()
            && self.middlename.is_empty()
            && self.surname.is_empty()
            && self.suffix.is_empty()
    }

    /// True when any name content (anything but the marker) is present.
    pub fn has_name_content(&self) -> bool {
        !self.title.is_empty()
            || !self.forename.is_empty()
            || !self.middlename.is_empty()
            || !self.surname.is_empty()
            || !self.suffix.is_empty()
    }

    pub fn first_name(&self) -> Option<&str> {
        self.forename.get()
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.middlename.get()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.surname.get()
    }

    pub fn marker(&self) -> Option<&str> {
        self.marker.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_person_is_empty() {
        assert!(Person::default().is_empty());
    }

    #[test]
    fn serializes_slots_transparently() {
        let mut p = Person::default();
        p.forename.append("John", false);
        p.surname.append("Smith", false);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["forename"], "John");
        assert_eq!(json["surname"], "Smith");
        assert_eq!(json["marker"], serde_json::Value::Null);
    }

    #[test]
    fn marker_alone_is_not_name_content() {
        let mut p = Person::default();
        p.marker.append("a", false);
        assert!(!p.is_empty());
        assert!(!p.has_name_content());
        p.surname.append("Smith", false);
        assert!(p.has_name_content());
    }
}
