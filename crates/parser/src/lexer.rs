//! Tokenizer for Starry source text.
//!
//! Spaces are counted, newlines bump the line number and every other
//! character that is not a marker is dropped. Neither newlines nor ignored
//! characters break a run of spaces.

/// The six command characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Marker {
    /// `+`: stack manipulation or push.
    Stack,
    /// `*`: arithmetic.
    Arithmetic,
    /// `.`: output.
    Output,
    /// `,`: input.
    Input,
    /// `` ` ``: label definition.
    Label,
    /// `'`: jump if nonzero.
    Jump,
}

impl Marker {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Marker::Stack),
            '*' => Some(Marker::Arithmetic),
            '.' => Some(Marker::Output),
            ',' => Some(Marker::Input),
            '`' => Some(Marker::Label),
            '\'' => Some(Marker::Jump),
            _ => None,
        }
    }
}

/// A marker with the run of spaces that preceded it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub marker: Marker,
    pub spaces: usize,
    /// Source line of the marker, counting from 0.
    pub line: usize,
}

/// Tokenize a whole source text.
pub(crate) fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut spaces = 0;
    let mut line = 0;

    for c in source.chars() {
        match c {
            ' ' => spaces += 1,
            '\n' => line += 1,
            _ => {
                if let Some(marker) = Marker::from_char(c) {
                    tokens.push(Token {
                        marker,
                        spaces,
                        line,
                    });
                    spaces = 0;
                }
            }
        }
    }

    tokens
}
