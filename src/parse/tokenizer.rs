use super::ParseError;
use crate::input::WHITESPACE;

const QUOTES: &[char] = &['"', '\''];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Whitespace,
    Char(char),
}

impl Delimiter {
    fn matches(self, c: char) -> bool {
        match self {
            Delimiter::Whitespace => WHITESPACE.contains(&c),
            Delimiter::Char(d) => c == d,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum State {
    Outside,
    Inside(char),
}

/// Single-pass splitter shared by command lines and `PATH`-style lists.
///
/// Outside quotes, a delimiter ends the pending word and a quote character
/// ends it too before opening a quoted token. Inside quotes everything up to
/// the matching quote is taken literally, including delimiters and the other
/// quote kind. Closing a quote always emits a token, so `""` yields an empty
/// string, while runs of delimiters never do.
///
/// [`Tokenizer::fields`] turns quoting off and keeps empty fields instead,
/// which is what colon-separated search lists need: `"/bin:"` has two fields,
/// the second one empty.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    delimiter: Delimiter,
    quotes: &'static [char],
    keep_empty: bool,
}

impl Tokenizer {
    /// Whitespace-delimited words with `"` and `'` quoting.
    pub const fn shell() -> Self {
        Self {
            delimiter: Delimiter::Whitespace,
            quotes: QUOTES,
            keep_empty: false,
        }
    }

    /// Fields separated by `delimiter`, no quoting. Empty input has no
    /// fields; otherwise `n` delimiters give `n + 1` fields.
    pub const fn fields(delimiter: char) -> Self {
        Self {
            delimiter: Delimiter::Char(delimiter),
            quotes: &[],
            keep_empty: true,
        }
    }

    pub fn tokenize(&self, input: &str) -> Result<Vec<String>, ParseError> {
        let mut tokens = Vec::new();
        if input.is_empty() {
            return Ok(tokens);
        }

        let mut word = String::new();
        // Whether `word` holds a token that must be emitted, even if empty.
        let mut pending = self.keep_empty;
        let mut state = State::Outside;

        for c in input.chars() {
            match state {
                State::Inside(open) if c == open => {
                    tokens.push(std::mem::take(&mut word));
                    state = State::Outside;
                }
                State::Inside(_) => word.push(c),
                State::Outside if self.quotes.contains(&c) => {
                    if pending {
                        tokens.push(std::mem::take(&mut word));
                        pending = false;
                    }
                    state = State::Inside(c);
                }
                State::Outside if self.delimiter.matches(c) => {
                    if pending {
                        tokens.push(std::mem::take(&mut word));
                    }
                    pending = self.keep_empty;
                }
                State::Outside => {
                    word.push(c);
                    pending = true;
                }
            }
        }

        match state {
            State::Inside(open) => Err(ParseError::UnterminatedQuote(open)),
            State::Outside => {
                if pending {
                    tokens.push(word);
                }
                Ok(tokens)
            }
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::shell()
    }
}

/// Splits a colon-separated search list such as `PATH`.
pub fn split_search_path(value: &str) -> Vec<String> {
    // Quoting is off in field mode, so there is nothing that can fail.
    Tokenizer::fields(':').tokenize(value).unwrap_or_default()
}
