//! Person name accumulation (author lists, header name blocks).

use restitch_core::Person;

use crate::engine::{EntityParser, LabeledEntity, SlotRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonField {
    Marker,
    Title,
    Forename,
    Middlename,
    Surname,
    Suffix,
}

impl LabeledEntity for Person {
    type Field = PersonField;

    fn field_for(tag: &str) -> Option<PersonField> {
        match tag {
            "<marker>" => Some(PersonField::Marker),
            "<title>" => Some(PersonField::Title),
            "<forename>" => Some(PersonField::Forename),
            "<middlename>" => Some(PersonField::Middlename),
            "<surname>" => Some(PersonField::Surname),
            "<suffix>" => Some(PersonField::Suffix),
            _ => None,
        }
    }

    fn slot(&mut self, field: PersonField) -> SlotRef<'_> {
        match field {
            PersonField::Marker => SlotRef::Single(&mut self.marker),
            PersonField::Title => SlotRef::Single(&mut self.title),
            PersonField::Forename => SlotRef::Single(&mut self.forename),
            PersonField::Middlename => SlotRef::Single(&mut self.middlename),
            PersonField::Surname => SlotRef::Single(&mut self.surname),
            PersonField::Suffix => SlotRef::Single(&mut self.suffix),
        }
    }

    fn is_marker(field: PersonField) -> bool {
        matches!(field, PersonField::Marker)
    }

    fn is_empty(&self) -> bool {
        Person::is_empty(self)
    }

    fn has_content_besides_marker(&self) -> bool {
        self.has_name_content()
    }
}

/// Parser for tagged person name sequences.
pub type PersonParser = EntityParser<Person>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_splits_two_persons() {
        let wire = "John\t<forename>\nSmith\tI-<surname>\n\nJane\t<forename>\nDoe\tI-<surname>\n";
        let persons = PersonParser::new().parse(wire).unwrap();
        assert_eq!(persons.len(), 2);
        assert_eq!(persons[0].first_name(), Some("John"));
        assert_eq!(persons[0].last_name(), Some("Smith"));
        assert_eq!(persons[1].first_name(), Some("Jane"));
        assert_eq!(persons[1].last_name(), Some("Doe"));
    }

    #[test]
    fn markers_bound_consecutive_persons() {
        let wire = concat!(
            "a\tI-<marker>\n",
            "John\t<forename>\n",
            "Smith\tI-<surname>\n",
            "b\tI-<marker>\n",
            "Jane\t<forename>\n",
            "Doe\tI-<surname>\n",
        );
        let persons = PersonParser::new().parse(wire).unwrap();
        assert_eq!(persons.len(), 2);
        assert_eq!(persons[0].marker(), Some("a"));
        assert_eq!(persons[0].last_name(), Some("Smith"));
        assert_eq!(persons[1].marker(), Some("b"));
        assert_eq!(persons[1].last_name(), Some("Doe"));
    }

    #[test]
    fn continuation_marker_tokens_extend_the_marker() {
        let wire = concat!(
            "1\tI-<marker>\n",
            ",\t<marker>\n",
            "2\t<marker>\n",
            "John\t<forename>\n",
        );
        let persons = PersonParser::new().parse(wire).unwrap();
        assert_eq!(persons.len(), 1);
        assert_eq!(persons[0].marker(), Some("1 , 2"));
    }

    #[test]
    fn segment_start_on_filled_forename_opens_new_person() {
        let wire = concat!(
            "John\t<forename>\n",
            "Smith\tI-<surname>\n",
            "Jane\tI-<forename>\n",
            "Doe\tI-<surname>\n",
        );
        let persons = PersonParser::new().parse(wire).unwrap();
        assert_eq!(persons.len(), 2);
        assert_eq!(persons[1].first_name(), Some("Jane"));
    }

    #[test]
    fn back_to_back_surname_segments_split_persons() {
        // Two prefixed labels in a row are two one-token segments, not
        // one run; the second bounds a new person.
        let wire = "Smith\tI-<surname>\nJones\tI-<surname>\n";
        let persons = PersonParser::new().parse(wire).unwrap();
        assert_eq!(persons.len(), 2);
        assert_eq!(persons[0].last_name(), Some("Smith"));
        assert_eq!(persons[1].last_name(), Some("Jones"));
    }

    #[test]
    fn fresh_marker_after_marker_only_person_splits() {
        let wire = "a\tI-<marker>\nb\tI-<marker>\nJohn\t<forename>\n";
        let persons = PersonParser::new().parse(wire).unwrap();
        assert_eq!(persons.len(), 2);
        assert_eq!(persons[0].marker(), Some("a"));
        assert!(!persons[0].has_name_content());
        assert_eq!(persons[1].marker(), Some("b"));
        assert_eq!(persons[1].first_name(), Some("John"));
    }

    #[test]
    fn multi_token_fields_join_with_spaces() {
        let wire = "Jean\t<forename>\nvan\tI-<surname>\nder\t<surname>\nBerg\t<surname>\n";
        let persons = PersonParser::new().parse(wire).unwrap();
        assert_eq!(persons.len(), 1);
        assert_eq!(persons[0].last_name(), Some("van der Berg"));
    }

    #[test]
    fn unknown_tag_is_dropped_without_effect() {
        let wire = "John\t<forename>\nnoise\t<unknown_tag>\nSmith\t<surname>\n";
        let persons = PersonParser::new().parse(wire).unwrap();
        assert_eq!(persons.len(), 1);
        assert_eq!(persons[0].first_name(), Some("John"));
        assert_eq!(persons[0].last_name(), Some("Smith"));
    }

    #[test]
    fn empty_input_yields_no_persons() {
        let persons = PersonParser::new().parse("").unwrap();
        assert!(persons.is_empty());
    }
}
