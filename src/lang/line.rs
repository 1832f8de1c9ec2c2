use super::token::*;
use super::{Error, LineNumber};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// ## One numbered source line
///
/// The leading token is the line number; the rest is a single statement.

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: u16,
    tokens: Vec<Token>,
    source: String,
}

impl Line {
    pub fn new(s: &str) -> Result<Line> {
        let source = s.trim_end_matches(&['\r', '\n'][..]).to_string();
        let mut tokens = lex(&source);
        if tokens.is_empty() {
            return Err(error!(SyntaxError; "MISSING LINE NUMBER"));
        }
        let header = tokens.remove(0);
        let number = match header.text().parse::<u16>() {
            Ok(number) => number,
            Err(_) => return Err(error!(SyntaxError, ..header.col(); "INVALID LINE NUMBER")),
        };
        Ok(Line {
            number,
            tokens,
            source,
        })
    }

    pub fn number(&self) -> LineNumber {
        Some(self.number)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The command keyword of the statement, if the line has one.
    pub fn word(&self) -> Result<Option<Word>> {
        match self.tokens.first() {
            None => Ok(None),
            Some(token) => match Word::from_token(token) {
                Some(word) => Ok(Some(word)),
                None => Err(error!(SyntaxError, self.number(), ..token.col(); "UNKNOWN COMMAND")),
            },
        }
    }

    /// Raw source text following `token`, for statements such as `DATA`
    /// that split their operands on something other than whitespace.
    pub fn text_after(&self, token: &Token) -> String {
        self.source.chars().skip(token.col().end).collect()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<String> = self.tokens.iter().map(|t| t.to_string()).collect();
        if s.is_empty() {
            write!(f, "{}", self.number)
        } else {
            write!(f, "{} {}", self.number, s.join(" "))
        }
    }
}
