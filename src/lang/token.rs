use super::Column;

/// Split a statement on whitespace. A double-quoted run is one token,
/// quotes included, even when it holds whitespace.
pub fn lex(s: &str) -> Vec<Token> {
    Lexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c.is_whitespace()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    col: Column,
    text: String,
}

impl Token {
    pub fn new(col: Column, text: &str) -> Token {
        Token {
            col,
            text: text.to_string(),
        }
    }

    pub fn col(&self) -> &Column {
        &self.col
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Case-insensitive keyword test.
    pub fn is(&self, word: &str) -> bool {
        self.text.eq_ignore_ascii_case(word)
    }

    pub fn is_quoted(&self) -> bool {
        self.text.len() >= 2 && self.text.starts_with('"') && self.text.ends_with('"')
    }

    pub fn is_unterminated(&self) -> bool {
        self.text.starts_with('"') && !self.is_quoted()
    }

    pub fn unquoted(&self) -> &str {
        if self.is_quoted() {
            &self.text[1..self.text.len() - 1]
        } else {
            &self.text
        }
    }

    pub fn integer(&self) -> Option<i64> {
        self.text.parse::<i64>().ok()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// ## Command keywords
///
/// Every statement starts with one of these.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word {
    Data,
    End,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    Next,
    Print,
    Read,
    Rem,
    Return,
}

impl Word {
    pub fn from_token(token: &Token) -> Option<Word> {
        use Word::*;
        [
            Data, End, For, Gosub, Goto, If, Input, Let, Next, Print, Read, Rem, Return,
        ]
        .iter()
        .copied()
        .find(|word| token.is(&word.to_string()))
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Data => write!(f, "DATA"),
            End => write!(f, "END"),
            For => write!(f, "FOR"),
            Gosub => write!(f, "GOSUB"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            Next => write!(f, "NEXT"),
            Print => write!(f, "PRINT"),
            Read => write!(f, "READ"),
            Rem => write!(f, "REM"),
            Return => write!(f, "RETURN"),
        }
    }
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    col: usize,
}

impl<'a> Lexer<'a> {
    fn lex(s: &str) -> Vec<Token> {
        let mut lexer = Lexer {
            chars: s.chars().peekable(),
            col: 0,
        };
        let mut tokens: Vec<Token> = vec![];
        while let Some(&pk) = lexer.chars.peek() {
            if is_basic_whitespace(pk) {
                lexer.next();
                continue;
            }
            let token = if pk == '"' {
                lexer.string()
            } else {
                lexer.word()
            };
            tokens.push(token);
        }
        tokens
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.chars.next();
        if ch.is_some() {
            self.col += 1;
        }
        ch
    }

    fn string(&mut self) -> Token {
        let start = self.col;
        let mut s = String::new();
        if let Some(quote) = self.next() {
            s.push(quote);
        }
        while let Some(ch) = self.next() {
            s.push(ch);
            if ch == '"' {
                break;
            }
        }
        Token::new(start..self.col, &s)
    }

    fn word(&mut self) -> Token {
        let start = self.col;
        let mut s = String::new();
        while let Some(&pk) = self.chars.peek() {
            if is_basic_whitespace(pk) {
                break;
            }
            s.push(pk);
            self.next();
        }
        Token::new(start..self.col, &s)
    }
}
