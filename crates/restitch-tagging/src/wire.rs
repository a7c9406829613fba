use thiserror::Error;

use crate::label::Label;

/// Feature value marking a token as the first on its visual line.
const LINESTART: &str = "LINESTART";

#[derive(Error, Debug)]
pub enum WireError {
    #[error("line {line}: empty token text")]
    EmptyToken { line: usize },
}

/// One labeled token from the tagger output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledToken {
    pub text: String,
    /// `None` when the line carried no label column; such tokens
    /// contribute no structured field.
    pub label: Option<Label>,
    /// Layout cue from the feature columns: token starts a visual line.
    pub line_start: bool,
}

/// A record of the label stream: either a labeled token or a paragraph
/// break (blank line in the wire format).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamRecord {
    Token(LabeledToken),
    Break,
}

/// The parsed tagger output: an ordered sequence of labeled tokens and
/// paragraph breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelStream {
    records: Vec<StreamRecord>,
}

impl LabelStream {
    /// Parse the tab-separated tagger output.
    ///
    /// Every non-blank line is `token<TAB>feature...<TAB>label`. Column
    /// counts may vary between lines: index 0 is always the token and
    /// the last index the label. A line with a single column yields an
    /// unlabeled token. Blank lines become [`StreamRecord::Break`].
    pub fn parse(wire: &str) -> Result<Self, WireError> {
        let mut records = Vec::new();
        for (idx, line) in wire.lines().enumerate() {
            if line.trim().is_empty() {
                records.push(StreamRecord::Break);
                continue;
            }
            let cols: Vec<&str> = line.split('\t').collect();
            let text = cols[0].trim();
            if text.is_empty() {
                return Err(WireError::EmptyToken { line: idx + 1 });
            }
            let label = if cols.len() >= 2 {
                Some(Label::parse(cols[cols.len() - 1].trim()))
            } else {
                None
            };
            let line_start = cols.len() > 2
                && cols[1..cols.len() - 1].iter().any(|f| f.trim() == LINESTART);
            records.push(StreamRecord::Token(LabeledToken {
                text: text.to_string(),
                label,
                line_start,
            }));
        }
        Ok(LabelStream { records })
    }

    pub fn records(&self) -> &[StreamRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over labeled tokens only, skipping breaks.
    pub fn tokens(&self) -> impl Iterator<Item = &LabeledToken> {
        self.records.iter().filter_map(|r| match r {
            StreamRecord::Token(t) => Some(t),
            StreamRecord::Break => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_token_features_label() {
        let stream = LabelStream::parse("John\tjohn\tLINESTART\tINITCAP\t<forename>\n").unwrap();
        let tokens: Vec<_> = stream.tokens().collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "John");
        assert_eq!(tokens[0].label.as_ref().unwrap().base(), "<forename>");
        assert!(tokens[0].line_start);
    }

    #[test]
    fn ragged_column_counts_are_tolerated() {
        let wire = "John\t<forename>\nSmith\ta\tb\tc\td\tI-<surname>\n";
        let stream = LabelStream::parse(wire).unwrap();
        let tokens: Vec<_> = stream.tokens().collect();
        assert_eq!(tokens[0].label.as_ref().unwrap().base(), "<forename>");
        let smith = &tokens[1];
        assert_eq!(smith.text, "Smith");
        assert!(smith.label.as_ref().unwrap().is_segment_start());
        assert_eq!(smith.label.as_ref().unwrap().base(), "<surname>");
    }

    #[test]
    fn blank_lines_become_breaks() {
        let wire = "John\t<forename>\n\nJane\t<forename>\n";
        let stream = LabelStream::parse(wire).unwrap();
        assert_eq!(stream.records().len(), 3);
        assert!(matches!(stream.records()[1], StreamRecord::Break));
    }

    #[test]
    fn single_column_line_is_unlabeled() {
        let stream = LabelStream::parse("orphan\n").unwrap();
        let tokens: Vec<_> = stream.tokens().collect();
        assert_eq!(tokens[0].text, "orphan");
        assert!(tokens[0].label.is_none());
    }

    #[test]
    fn empty_token_text_is_rejected() {
        let err = LabelStream::parse("\t<forename>\n").unwrap_err();
        assert!(matches!(err, WireError::EmptyToken { line: 1 }));
    }

    #[test]
    fn empty_input_is_an_empty_stream() {
        let stream = LabelStream::parse("").unwrap();
        assert!(stream.is_empty());
    }

    #[test]
    fn linestart_not_read_from_token_or_label_column() {
        // Two columns: token and label only, no feature columns.
        let stream = LabelStream::parse("LINESTART\t<title>\n").unwrap();
        let tokens: Vec<_> = stream.tokens().collect();
        assert!(!tokens[0].line_start);
    }
}
