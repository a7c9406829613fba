/// The tag emitted when a token belongs to no recognized field.
pub const OTHER: &str = "<other>";

/// Segment-start prefix on a predicted label.
const START_PREFIX: &str = "I-";

/// A predicted label: a base tag plus an optional segment-start prefix.
///
/// `I-<surname>` starts a new surname segment; a bare `<surname>`
/// continues the current one, or opens a fresh single-token segment when
/// no surname segment is in progress. Two labels that normalize to the
/// same base tag drive identical tag-closing decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    base: String,
    segment_start: bool,
}

impl Label {
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(START_PREFIX) {
            Some(base) => Label {
                base: base.to_string(),
                segment_start: true,
            },
            None => Label {
                base: raw.to_string(),
                segment_start: false,
            },
        }
    }

    /// The label with its segment-start prefix stripped.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn is_segment_start(&self) -> bool {
        self.segment_start
    }

    pub fn is_other(&self) -> bool {
        self.base == OTHER
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.segment_start {
            write!(f, "{}{}", START_PREFIX, self.base)
        } else {
            f.write_str(&self.base)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_label_marks_segment_start() {
        let label = Label::parse("I-<surname>");
        assert_eq!(label.base(), "<surname>");
        assert!(label.is_segment_start());
    }

    #[test]
    fn unprefixed_label_is_continuation() {
        let label = Label::parse("<surname>");
        assert_eq!(label.base(), "<surname>");
        assert!(!label.is_segment_start());
    }

    #[test]
    fn prefixed_and_unprefixed_share_a_base() {
        assert_eq!(Label::parse("I-<title>").base(), Label::parse("<title>").base());
    }

    #[test]
    fn other_detection() {
        assert!(Label::parse("<other>").is_other());
        assert!(Label::parse("I-<other>").is_other());
        assert!(!Label::parse("<title>").is_other());
    }

    #[test]
    fn display_round_trips() {
        for raw in ["I-<forename>", "<forename>", "<other>"] {
            assert_eq!(Label::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn parse_display_round_trips_for_arbitrary_strings() {
        fn prop(raw: String) -> bool {
            Label::parse(&raw).to_string() == raw
        }
        quickcheck::QuickCheck::new()
            .tests(500)
            .quickcheck(prop as fn(String) -> bool);
    }
}
