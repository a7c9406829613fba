//! Static tag→element tables, one per entity family.
//!
//! The table decides which XML element wraps each recognized base tag
//! and which closing element `test_closing_tag` emits when the base tag
//! changes. Tags absent from a table (notably `<other>`) render as bare
//! text.

/// Maps base tags to the XML element name wrapping them.
#[derive(Debug, Clone, Copy)]
pub struct ElementTable {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl ElementTable {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        ElementTable { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn element_for(&self, base_tag: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(tag, _)| *tag == base_tag)
            .map(|(_, element)| *element)
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}

pub const PERSON_ELEMENTS: ElementTable = ElementTable::new(
    "person",
    &[
        ("<marker>", "marker"),
        ("<title>", "roleName"),
        ("<forename>", "forename"),
        ("<middlename>", "middlename"),
        ("<surname>", "surname"),
        ("<suffix>", "suffix"),
    ],
);

pub const AFFILIATION_ELEMENTS: ElementTable = ElementTable::new(
    "affiliation",
    &[
        ("<marker>", "marker"),
        ("<institution>", "institution"),
        ("<department>", "department"),
        ("<laboratory>", "laboratory"),
        ("<addrLine>", "addrLine"),
        ("<postCode>", "postCode"),
        ("<postBox>", "postBox"),
        ("<region>", "region"),
        ("<settlement>", "settlement"),
        ("<country>", "country"),
    ],
);

pub const CITATION_ELEMENTS: ElementTable = ElementTable::new(
    "citation",
    &[
        ("<title>", "title"),
        ("<author>", "author"),
        ("<editor>", "editor"),
        ("<journal>", "journal"),
        ("<booktitle>", "booktitle"),
        ("<date>", "date"),
        ("<volume>", "volume"),
        ("<issue>", "issue"),
        ("<pages>", "pages"),
        ("<publisher>", "publisher"),
        ("<location>", "location"),
        ("<institution>", "institution"),
        ("<note>", "note"),
        ("<tech>", "tech"),
        ("<web>", "web"),
        ("<pubnum>", "pubnum"),
    ],
);

pub const ACKNOWLEDGMENT_ELEMENTS: ElementTable = ElementTable::new(
    "acknowledgment",
    &[
        ("<affiliation>", "affiliation"),
        ("<educationalInstitution>", "educationalInstitution"),
        ("<fundingAgency>", "fundingAgency"),
        ("<grantName>", "grantName"),
        ("<grantNumber>", "grantNumber"),
        ("<individual>", "individual"),
        ("<otherInstitution>", "otherInstitution"),
        ("<projectName>", "projectName"),
        ("<researchInstitution>", "researchInstitution"),
    ],
);

pub const FIGURE_ELEMENTS: ElementTable = ElementTable::new(
    "figure",
    &[
        ("<figure_head>", "head"),
        ("<label>", "label"),
        ("<figDesc>", "figDesc"),
        ("<content>", "content"),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(PERSON_ELEMENTS.element_for("<surname>"), Some("surname"));
        assert_eq!(PERSON_ELEMENTS.element_for("<other>"), None);
        assert_eq!(FIGURE_ELEMENTS.element_for("<figure_head>"), Some("head"));
    }

    #[test]
    fn tables_have_no_duplicate_tags() {
        for table in [
            &PERSON_ELEMENTS,
            &AFFILIATION_ELEMENTS,
            &CITATION_ELEMENTS,
            &ACKNOWLEDGMENT_ELEMENTS,
            &FIGURE_ELEMENTS,
        ] {
            let mut tags: Vec<&str> = table.entries().iter().map(|(t, _)| *t).collect();
            tags.sort_unstable();
            let before = tags.len();
            tags.dedup();
            assert_eq!(before, tags.len(), "duplicate tag in {}", table.name());
        }
    }
}
