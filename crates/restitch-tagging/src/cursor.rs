use tracing::warn;

use crate::token::Token;

/// Default bounded lookahead when the stream and the tokenization have
/// drifted apart.
pub const DEFAULT_LOOKAHEAD: usize = 3;

/// Whitespace observed between the previous aligned token and the
/// current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spacing {
    pub space_before: bool,
    pub newline_before: bool,
    /// The literal whitespace text, in source order. Reconstruction
    /// re-emits this verbatim; accumulators only look at the flags.
    pub whitespace: String,
}

/// A cursor over the original tokenization, walked in lock-step with the
/// label stream.
///
/// Label-driven mutations upstream (dehyphenization, token merging) can
/// desynchronize the stream from the tokenization. `align` detects a
/// text mismatch and scans a bounded window ahead; if no match is found
/// it logs and keeps the last known good position rather than aborting
/// the document.
#[derive(Debug)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    lookahead: usize,
    resync_failures: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_lookahead(tokens, DEFAULT_LOOKAHEAD)
    }

    pub fn with_lookahead(tokens: &'a [Token], lookahead: usize) -> Self {
        TokenCursor {
            tokens,
            pos: 0,
            lookahead,
            resync_failures: 0,
        }
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Number of times `align` gave up on resynchronizing.
    pub fn resync_failures(&self) -> usize {
        self.resync_failures
    }

    /// Align the cursor with the next stream token `text`, consuming any
    /// whitespace tokens in between and reporting them as [`Spacing`].
    ///
    /// On a text mismatch, up to `lookahead` further word tokens are
    /// tried; on failure the cursor stays at the last good position so
    /// the remainder of the document still lines up best-effort.
    pub fn align(&mut self, text: &str) -> Spacing {
        let mut spacing = Spacing::default();
        let mut probe = self.pos;

        // Consume leading whitespace tokens.
        while let Some(token) = self.tokens.get(probe) {
            if !token.is_whitespace() {
                break;
            }
            if token.text.contains('\n') {
                spacing.newline_before = true;
            } else {
                spacing.space_before = true;
            }
            spacing.whitespace.push_str(&token.text);
            probe += 1;
        }

        // Exact position, then bounded forward scan over word tokens.
        let mut tried = 0;
        let mut scan = probe;
        while let Some(token) = self.tokens.get(scan) {
            if token.is_whitespace() {
                scan += 1;
                continue;
            }
            if matches_token(&token.text, text) {
                self.pos = scan + 1;
                return spacing;
            }
            tried += 1;
            if tried > self.lookahead {
                break;
            }
            scan += 1;
        }

        self.resync_failures += 1;
        warn!(
            position = self.pos,
            token = text,
            lookahead = self.lookahead,
            "failed to resynchronize label stream with tokenization"
        );
        // Alignment is lost; a separating space is the safer default for
        // field accumulation. The literal whitespace stays as observed.
        spacing.space_before = true;
        spacing
    }
}

/// A stream token matches a source token on exact text, or when the
/// source token carries a trailing hyphen the stream lost to
/// dehyphenization.
fn matches_token(source: &str, stream: &str) -> bool {
    source == stream || source.strip_suffix('-') == Some(stream)
}
