use serde::Serialize;

use crate::field::{FieldSlot, MultiSlot};

/// A bibliographic item reassembled from a tagged citation string.
///
/// Authors and editors are multi-valued: each segment-start run of the
/// corresponding tag opens a new name, so downstream name parsing can
/// treat the segments independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BiblioItem {
    pub title: FieldSlot,
    pub authors: MultiSlot,
    pub editors: MultiSlot,
    pub journal: FieldSlot,
    pub booktitle: FieldSlot,
    pub date: FieldSlot,
    pub volume: FieldSlot,
    pub issue: FieldSlot,
    pub pages: FieldSlot,
    pub publisher: FieldSlot,
    pub location: FieldSlot,
    pub institution: FieldSlot,
    pub note: FieldSlot,
    pub tech_type: FieldSlot,
    pub web: FieldSlot,
    pub pub_num: FieldSlot,
}

impl BiblioItem {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.authors.is_empty()
            && self.editors.is_empty()
            && self.journal.is_empty()
            && self.booktitle.is_empty()
            && self.date.is_empty()
            && self.volume.is_empty()
            && self.issue.is_empty()
            && self.pages.is_empty()
            && self.publisher.is_empty()
            && self.location.is_empty()
            && self.institution.is_empty()
            && self.note.is_empty()
            && self.tech_type.is_empty()
            && self.web.is_empty()
            && self.pub_num.is_empty()
    }

    /// True once the item carries core publication content. A fresh
    /// author/editor segment after this point belongs to a new item.
    pub fn has_core_content(&self) -> bool {
        !self.title.is_empty()
            || !self.journal.is_empty()
            || !self.booktitle.is_empty()
            || !self.date.is_empty()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.get()
    }

    pub fn publication_date(&self) -> Option<&str> {
        self.date.get()
    }

    pub fn authors(&self) -> &[String] {
        self.authors.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_content_gate() {
        let mut item = BiblioItem::default();
        item.authors.append_segment("J. Smith");
        assert!(!item.has_core_content());
        assert!(!item.is_empty());
        item.title.append("A Study", false);
        assert!(item.has_core_content());
    }
}
