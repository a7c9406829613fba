//! Lossless re-rendering of a label stream as annotated training text.
//!
//! The reconstructor walks the stream in document order, wrapping each
//! run of same-tagged tokens in the XML element its [`ElementTable`]
//! names and re-emitting the original whitespace with an `<lb/>` marker
//! ahead of every newline. Tags without a table entry (notably
//! `<other>`) and unlabeled tokens render as bare escaped text.

use quick_xml::escape::escape;
use tracing::debug;

use restitch_tagging::{LabelStream, StreamRecord, Token, TokenCursor};

use crate::TrainingError;
use crate::tables::{
    ACKNOWLEDGMENT_ELEMENTS, AFFILIATION_ELEMENTS, CITATION_ELEMENTS, ElementTable,
    FIGURE_ELEMENTS, PERSON_ELEMENTS,
};
use crate::writer::{test_closing_tag, write_field};

/// A finished rendering plus the alignment accounting that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    pub text: String,
    /// Times the token cursor failed to resynchronize. Non-zero means
    /// whitespace fidelity is best-effort from that point on.
    pub resync_failures: usize,
}

/// Renders a label stream back into tag-annotated training text.
#[derive(Debug, Clone, Copy)]
pub struct TrainingReconstructor {
    table: ElementTable,
}

impl TrainingReconstructor {
    pub fn new(table: ElementTable) -> Self {
        TrainingReconstructor { table }
    }

    pub fn for_persons() -> Self {
        Self::new(PERSON_ELEMENTS)
    }

    pub fn for_affiliations() -> Self {
        Self::new(AFFILIATION_ELEMENTS)
    }

    pub fn for_citations() -> Self {
        Self::new(CITATION_ELEMENTS)
    }

    pub fn for_acknowledgments() -> Self {
        Self::new(ACKNOWLEDGMENT_ELEMENTS)
    }

    pub fn for_figures() -> Self {
        Self::new(FIGURE_ELEMENTS)
    }

    pub fn table(&self) -> &ElementTable {
        &self.table
    }

    /// Render without the original tokenization: consecutive tokens are
    /// separated by single spaces and paragraph breaks by newlines.
    pub fn render(&self, stream: &LabelStream) -> String {
        let mut buf = String::new();
        let mut prev_base: Option<String> = None;
        let mut pending_space = false;

        for record in stream.records() {
            match record {
                StreamRecord::Break => {
                    self.close_open(&mut buf, &prev_base);
                    prev_base = None;
                    buf.push('\n');
                    pending_space = false;
                }
                StreamRecord::Token(token) => {
                    let sep = if pending_space { " " } else { "" };
                    self.emit(&mut buf, token, &mut prev_base, sep);
                    pending_space = true;
                }
            }
        }
        self.close_open(&mut buf, &prev_base);
        buf
    }

    /// Render in lock-step with the original tokenization, preserving
    /// the literal whitespace between tokens and marking every newline
    /// with `<lb/>`.
    pub fn render_with_tokens(&self, stream: &LabelStream, tokens: &[Token]) -> RenderOutcome {
        let mut cursor = TokenCursor::new(tokens);
        let mut buf = String::new();
        let mut prev_base: Option<String> = None;

        for record in stream.records() {
            match record {
                StreamRecord::Break => {
                    // The newline itself arrives as whitespace ahead of
                    // the next aligned token.
                    self.close_open(&mut buf, &prev_base);
                    prev_base = None;
                }
                StreamRecord::Token(token) => {
                    let spacing = cursor.align(&token.text);
                    let sep = with_line_markers(&spacing.whitespace);
                    self.emit(&mut buf, token, &mut prev_base, &sep);
                }
            }
        }
        self.close_open(&mut buf, &prev_base);

        let resync_failures = cursor.resync_failures();
        if resync_failures > 0 {
            debug!(
                table = self.table.name(),
                resync_failures, "training rendering finished with alignment gaps"
            );
        }
        RenderOutcome {
            text: buf,
            resync_failures,
        }
    }

    /// Parse the raw tagger output and render it without tokenization.
    pub fn render_wire(&self, wire: &str) -> Result<String, TrainingError> {
        let stream = LabelStream::parse(wire)?;
        Ok(self.render(&stream))
    }

    /// Close the element for `prev_base`, unconditionally on base tag.
    fn close_open(&self, buf: &mut String, prev_base: &Option<String>) {
        test_closing_tag(buf, None, prev_base.as_deref(), &self.table);
    }

    fn emit(
        &self,
        buf: &mut String,
        token: &restitch_tagging::LabeledToken,
        prev_base: &mut Option<String>,
        sep: &str,
    ) {
        let Some(label) = &token.label else {
            self.close_open(buf, prev_base);
            *prev_base = None;
            buf.push_str(sep);
            buf.push_str(&escape(&token.text));
            return;
        };

        // A fresh segment of the currently open element must close and
        // reopen it, otherwise two annotated runs would fuse into one.
        let reopens = label.is_segment_start() && prev_base.as_deref() == Some(label.base());
        let current = if reopens { None } else { Some(label.base()) };
        test_closing_tag(buf, current, prev_base.as_deref(), &self.table);

        buf.push_str(sep);
        if let Some(element) = self.table.element_for(label.base()) {
            let opening = format!("<{element}>");
            let prev = if reopens { None } else { prev_base.as_deref() };
            write_field(
                buf,
                label,
                prev,
                &token.text,
                label.base(),
                &opening,
                false,
            );
        } else {
            buf.push_str(&escape(&token.text));
        }
        *prev_base = Some(label.base().to_string());
    }
}

/// Re-emit whitespace verbatim with an `<lb/>` marker ahead of every
/// newline.
fn with_line_markers(whitespace: &str) -> String {
    let mut out = String::with_capacity(whitespace.len());
    for ch in whitespace.chars() {
        if ch == '\n' {
            out.push_str("<lb/>");
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use restitch_tagging::tokenize;

    #[test]
    fn single_person_wraps_each_field() {
        let wire = "John\tI-<forename>\nSmith\tI-<surname>\n";
        let text = TrainingReconstructor::for_persons()
            .render_wire(wire)
            .unwrap();
        assert_eq!(
            text,
            "<forename>John</forename> <surname>Smith</surname>"
        );
    }

    #[test]
    fn continuation_tokens_stay_in_one_element() {
        let wire = "van\tI-<surname>\nder\t<surname>\nBerg\t<surname>\n";
        let text = TrainingReconstructor::for_persons()
            .render_wire(wire)
            .unwrap();
        assert_eq!(text, "<surname>van der Berg</surname>");
    }

    #[test]
    fn same_tag_segment_restart_closes_and_reopens() {
        let wire = "Smith\tI-<surname>\nJones\tI-<surname>\n";
        let text = TrainingReconstructor::for_persons()
            .render_wire(wire)
            .unwrap();
        assert_eq!(text, "<surname>Smith</surname> <surname>Jones</surname>");
    }

    #[test]
    fn other_and_unlabeled_tokens_render_bare() {
        let wire = "Smith\tI-<surname>\nand\t<other>\norphan\nJones\tI-<surname>\n";
        let text = TrainingReconstructor::for_persons()
            .render_wire(wire)
            .unwrap();
        assert_eq!(
            text,
            "<surname>Smith</surname> and orphan <surname>Jones</surname>"
        );
    }

    #[test]
    fn paragraph_break_closes_and_emits_newline() {
        let wire = "Smith\tI-<surname>\n\nJones\tI-<surname>\n";
        let text = TrainingReconstructor::for_persons()
            .render_wire(wire)
            .unwrap();
        assert_eq!(text, "<surname>Smith</surname>\n<surname>Jones</surname>");
    }

    #[test]
    fn token_mode_preserves_whitespace_with_line_markers() {
        let source = "John Smith\nMIT";
        let tokens = tokenize(source);
        let wire = "John\tI-<forename>\nSmith\tI-<surname>\nMIT\t<other>\n";
        let stream = LabelStream::parse(wire).unwrap();
        let outcome =
            TrainingReconstructor::for_persons().render_with_tokens(&stream, &tokens);
        assert_eq!(outcome.resync_failures, 0);
        assert_eq!(
            outcome.text,
            "<forename>John</forename> <surname>Smith</surname><lb/>\nMIT"
        );
    }

    #[test]
    fn glued_punctuation_gets_no_separator() {
        let source = "J.Smith";
        let tokens = tokenize(source);
        let wire = "J\tI-<forename>\n.\t<forename>\nSmith\tI-<surname>\n";
        let stream = LabelStream::parse(wire).unwrap();
        let outcome =
            TrainingReconstructor::for_persons().render_with_tokens(&stream, &tokens);
        assert_eq!(
            outcome.text,
            "<forename>J.</forename><surname>Smith</surname>"
        );
    }

    #[test]
    fn text_is_entity_encoded() {
        let wire = "AT&T\tI-<institution>\n";
        let text = TrainingReconstructor::for_affiliations()
            .render_wire(wire)
            .unwrap();
        assert_eq!(text, "<institution>AT&amp;T</institution>");
    }

    #[test]
    fn empty_stream_renders_empty() {
        let text = TrainingReconstructor::for_citations().render_wire("").unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn unclosed_element_is_closed_at_end_of_stream() {
        let wire = "Deep\tI-<title>\nParsing\t<title>\n";
        let text = TrainingReconstructor::for_citations()
            .render_wire(wire)
            .unwrap();
        assert_eq!(text, "<title>Deep Parsing</title>");
    }
}
