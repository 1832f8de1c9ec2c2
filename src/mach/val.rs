use serde::{Deserialize, Serialize};

/// ## Runtime value
///
/// Variables hold integers or strings. Floats appear only as the
/// result of `DIV` or of arithmetic mixing in a float.
/// Untagged on the wire: a bytecode operand is a bare JSON number or string.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Val {
    Integer(i64),
    Float(f64),
    String(String),
}

pub const TRUE: Val = Val::Integer(-1);
pub const FALSE: Val = Val::Integer(0);

impl Val {
    pub fn from_bool(b: bool) -> Val {
        if b {
            TRUE
        } else {
            FALSE
        }
    }

    pub fn is_true(&self) -> bool {
        match self {
            Val::Integer(n) => *n != 0,
            Val::Float(n) => *n != 0.0,
            Val::String(s) => !s.is_empty(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Val::String(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Val::Integer(_) => "INTEGER",
            Val::Float(_) => "FLOAT",
            Val::String(_) => "STRING",
        }
    }

    /// Text typed at an `INPUT` prompt: an integer if it parses as one.
    pub fn from_input(s: &str) -> Val {
        match s.trim().parse::<i64>() {
            Ok(n) => Val::Integer(n),
            Err(_) => Val::String(s.to_string()),
        }
    }
}

impl From<i64> for Val {
    fn from(n: i64) -> Val {
        Val::Integer(n)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Val {
        Val::String(s.to_string())
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Float(n) => write!(f, "{}", n),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}
