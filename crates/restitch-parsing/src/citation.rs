//! Citation / bibliographic item accumulation.

use restitch_core::BiblioItem;

use crate::engine::{EntityParser, LabeledEntity, SlotRef, TokenCue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiblioField {
    Title,
    Author,
    Editor,
    Journal,
    Booktitle,
    Date,
    Volume,
    Issue,
    Pages,
    Publisher,
    Location,
    Institution,
    Note,
    TechType,
    Web,
    PubNum,
}

impl LabeledEntity for BiblioItem {
    type Field = BiblioField;

    fn field_for(tag: &str) -> Option<BiblioField> {
        match tag {
            "<title>" => Some(BiblioField::Title),
            "<author>" => Some(BiblioField::Author),
            "<editor>" => Some(BiblioField::Editor),
            "<journal>" => Some(BiblioField::Journal),
            "<booktitle>" => Some(BiblioField::Booktitle),
            "<date>" => Some(BiblioField::Date),
            "<volume>" => Some(BiblioField::Volume),
            "<issue>" => Some(BiblioField::Issue),
            "<pages>" => Some(BiblioField::Pages),
            "<publisher>" => Some(BiblioField::Publisher),
            "<location>" => Some(BiblioField::Location),
            "<institution>" => Some(BiblioField::Institution),
            "<note>" => Some(BiblioField::Note),
            "<tech>" => Some(BiblioField::TechType),
            "<web>" => Some(BiblioField::Web),
            "<pubnum>" => Some(BiblioField::PubNum),
            _ => None,
        }
    }

    fn slot(&mut self, field: BiblioField) -> SlotRef<'_> {
        match field {
            BiblioField::Title => SlotRef::Single(&mut self.title),
            BiblioField::Author => SlotRef::Multi(&mut self.authors),
            BiblioField::Editor => SlotRef::Multi(&mut self.editors),
            BiblioField::Journal => SlotRef::Single(&mut self.journal),
            BiblioField::Booktitle => SlotRef::Single(&mut self.booktitle),
            BiblioField::Date => SlotRef::Single(&mut self.date),
            BiblioField::Volume => SlotRef::Single(&mut self.volume),
            BiblioField::Issue => SlotRef::Single(&mut self.issue),
            BiblioField::Pages => SlotRef::Single(&mut self.pages),
            BiblioField::Publisher => SlotRef::Single(&mut self.publisher),
            BiblioField::Location => SlotRef::Single(&mut self.location),
            BiblioField::Institution => SlotRef::Single(&mut self.institution),
            BiblioField::Note => SlotRef::Single(&mut self.note),
            BiblioField::TechType => SlotRef::Single(&mut self.tech_type),
            BiblioField::Web => SlotRef::Single(&mut self.web),
            BiblioField::PubNum => SlotRef::Single(&mut self.pub_num),
        }
    }

    /// A fresh author/editor segment after core publication content
    /// (title, venue, date) starts the next bibliographic item.
    fn starts_new_entity(&self, field: BiblioField, _cue: &TokenCue) -> bool {
        matches!(field, BiblioField::Author | BiblioField::Editor) && self.has_core_content()
    }

    fn is_empty(&self) -> bool {
        BiblioItem::is_empty(self)
    }
}

/// Parser for tagged citation strings.
pub type CitationParser = EntityParser<BiblioItem>;
