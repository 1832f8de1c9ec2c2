/*!
# Rust Language Module

This Rust module splits ByteBasic source into numbered lines and
statement tokens. Statements have no expression grammar; each
command reads its operands from fixed token positions.

*/

pub type LineNumber = Option<u16>;
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod line;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use line::Line;
pub use token::{lex, Token, Word};

#[cfg(test)]
mod tests;
