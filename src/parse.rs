use thiserror::Error;
use tracing::trace;

use crate::scan::{is_digit, is_identifier_char, Scanner, Space};
use crate::value::{Map, Value};

/// Maximum container nesting the grammar will follow before refusing the
/// document. Keeps pathological input from exhausting the call stack.
pub const MAX_DEPTH: usize = 128;

/// Why a parse stopped. Every variant carries the byte offset the scanner
/// was looking at when the rule failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of input at offset {position}")]
    UnexpectedEndOfInput { position: usize },
    #[error("expected {expected:?} but found {found:?} at offset {position}")]
    Mismatch {
        expected: char,
        found: char,
        position: usize,
    },
    #[error("empty key token at offset {position}")]
    EmptyToken { position: usize },
    #[error("malformed number at offset {position}")]
    MalformedNumber { position: usize },
    #[error("expected the word {expected:?} at offset {position}")]
    InvalidReservedWord {
        expected: &'static str,
        position: usize,
    },
    #[error("no value can start with {found:?} at offset {position}")]
    InvalidValue { found: char, position: usize },
    #[error("nesting deeper than {limit} levels at offset {position}", limit = MAX_DEPTH)]
    NestingTooDeep { position: usize },
}

/// Parse one JSON document into a [`Value`] tree.
///
/// On success the cursor rests just past the root value's closing
/// delimiter; trailing text after it is not examined. On failure the whole
/// parse is abandoned and the deepest error is returned as-is.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    let mut p = Parser::new(input);
    p.scan.skip_whitespace();
    p.value()
}

/// The grammar engine: one method per production, mutually recursive over
/// the scanner. No state machine enum; the call stack encodes where in the
/// grammar we are.
struct Parser<'a> {
    scan: Scanner<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            scan: Scanner::new(input),
            depth: 0,
        }
    }

    fn value(&mut self) -> Result<Value, ParseError> {
        match self.scan.peek()? {
            '"' => self.string(),
            '{' => self.object(),
            '[' => self.array(),
            c if is_digit(c) || c == '-' => self.number(),
            _ => self.reserved_word(),
        }
    }

    fn object(&mut self) -> Result<Value, ParseError> {
        let position = self.scan.pos();
        trace!("object at offset {}", position);
        self.enter(position)?;
        self.scan.expect('{', Space::Skip)?;
        let mut map = Map::new();
        if self.scan.try_peek() == Some('"') {
            loop {
                let key = self.key()?;
                self.scan.expect(':', Space::Skip)?;
                let value = self.value()?;
                // Last write wins; the key keeps its original slot.
                map.insert(key, value);
                if self.scan.try_peek() == Some(',') {
                    self.scan.expect(',', Space::Skip)?;
                } else {
                    break;
                }
            }
        }
        self.scan.expect('}', Space::Skip)?;
        self.leave();
        Ok(Value::Object(map))
    }

    fn array(&mut self) -> Result<Value, ParseError> {
        let position = self.scan.pos();
        trace!("array at offset {}", position);
        self.enter(position)?;
        self.scan.expect('[', Space::Skip)?;
        let mut items = Vec::new();
        if self.scan.try_peek() != Some(']') {
            loop {
                items.push(self.value()?);
                if self.scan.try_peek() == Some(',') {
                    self.scan.expect(',', Space::Skip)?;
                } else {
                    break;
                }
            }
        }
        self.scan.expect(']', Space::Skip)?;
        self.leave();
        Ok(Value::Array(items))
    }

    /// A key is a quoted, non-empty token of identifier characters and
    /// spaces. Anything else stops the token and must be the closing quote.
    fn key(&mut self) -> Result<String, ParseError> {
        self.scan.expect('"', Space::Skip)?;
        let start = self.scan.pos();
        while let Some(c) = self.scan.try_peek() {
            if is_identifier_char(c) || c == ' ' {
                self.scan.bump(c);
            } else {
                break;
            }
        }
        if self.scan.pos() == start {
            return Err(ParseError::EmptyToken { position: start });
        }
        let key = self.scan.slice(start, self.scan.pos()).to_owned();
        self.scan.expect('"', Space::Skip)?;
        Ok(key)
    }

    /// String contents are taken verbatim up to the next `"`. A backslash
    /// has no special meaning, so a quote directly after one still ends the
    /// string. Note the opening quote is matched in skip mode, which also
    /// eats whitespace sitting right after it.
    fn string(&mut self) -> Result<Value, ParseError> {
        self.scan.expect('"', Space::Skip)?;
        let start = self.scan.pos();
        loop {
            match self.scan.peek()? {
                '"' => break,
                c => self.scan.bump(c),
            }
        }
        let text = self.scan.slice(start, self.scan.pos()).to_owned();
        self.scan.expect('"', Space::Skip)?;
        Ok(Value::String(text))
    }

    /// Scan the maximal run of digits, `.`, and `-`, then let the float
    /// parser judge it. The one place the grammar backtracks: on a bad run
    /// the cursor is restored to the rule's entry point.
    fn number(&mut self) -> Result<Value, ParseError> {
        let start = self.scan.pos();
        trace!("number at offset {}", start);
        while let Some(c) = self.scan.try_peek() {
            if is_digit(c) || c == '.' || c == '-' {
                self.scan.bump(c);
            } else {
                break;
            }
        }
        let text = self.scan.slice(start, self.scan.pos());
        match text.parse::<f64>() {
            Ok(n) => Ok(Value::Number(n)),
            Err(_) => {
                self.scan.rewind(start);
                Err(ParseError::MalformedNumber { position: start })
            }
        }
    }

    fn reserved_word(&mut self) -> Result<Value, ParseError> {
        let position = self.scan.pos();
        trace!("reserved word at offset {}", position);
        match self.scan.peek()? {
            'n' => {
                self.literal("null", position)?;
                Ok(Value::Null)
            }
            't' => {
                self.literal("true", position)?;
                Ok(Value::Bool(true))
            }
            'f' => {
                self.literal("false", position)?;
                Ok(Value::Bool(false))
            }
            found => Err(ParseError::InvalidValue { found, position }),
        }
    }

    /// Match `word` character by character, no whitespace allowed inside;
    /// whitespace after the word is consumed like after any other match.
    fn literal(&mut self, word: &'static str, position: usize) -> Result<(), ParseError> {
        for c in word.chars() {
            if self.scan.expect(c, Space::Keep).is_err() {
                return Err(ParseError::InvalidReservedWord {
                    expected: word,
                    position,
                });
            }
        }
        self.scan.skip_whitespace();
        Ok(())
    }

    fn enter(&mut self, position: usize) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::NestingTooDeep { position });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}
