/// Kind of an atomic input token. Whitespace and line breaks are kept as
/// tokens of their own so reconstruction can restore original spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Space,
    Newline,
}

/// An atomic unit of input text.
///
/// Produced once by tokenization and shared read-only by every
/// accumulator processing the same input. `position` is the index in the
/// global tokenization, used to resynchronize after label-driven
/// mutations such as dehyphenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    pub fn is_whitespace(&self) -> bool {
        matches!(self.kind, TokenKind::Space | TokenKind::Newline)
    }
}

/// Split raw text into word, space and newline tokens.
///
/// Words are maximal alphanumeric runs; any other non-whitespace
/// character is a single-character token; runs of non-newline whitespace
/// collapse into one space token; each `\n` is its own token. This is an
/// adapter for tests and plain-text inputs; real layout tokenization
/// happens upstream and only needs to agree on token texts.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut space_pending = false;

    let mut push_word = |tokens: &mut Vec<Token>, word: &mut String| {
        if !word.is_empty() {
            tokens.push(Token {
                text: std::mem::take(word),
                kind: TokenKind::Word,
                position: tokens.len(),
            });
        }
    };
    let mut push_space = |tokens: &mut Vec<Token>, pending: &mut bool| {
        if *pending {
            tokens.push(Token {
                text: " ".to_string(),
                kind: TokenKind::Space,
                position: tokens.len(),
            });
            *pending = false;
        }
    };

    for c in text.chars() {
        if c == '\n' {
            push_word(&mut tokens, &mut word);
            push_space(&mut tokens, &mut space_pending);
            tokens.push(Token {
                text: "\n".to_string(),
                kind: TokenKind::Newline,
                position: tokens.len(),
            });
        } else if c.is_whitespace() {
            push_word(&mut tokens, &mut word);
            space_pending = true;
        } else if c.is_alphanumeric() {
            push_space(&mut tokens, &mut space_pending);
            word.push(c);
        } else {
            push_word(&mut tokens, &mut word);
            push_space(&mut tokens, &mut space_pending);
            tokens.push(Token {
                text: c.to_string(),
                kind: TokenKind::Word,
                position: tokens.len(),
            });
        }
    }
    push_word(&mut tokens, &mut word);
    push_space(&mut tokens, &mut space_pending);
    tokens
}
