/*!
## Rust Machine Module

This Rust module is the ByteBasic compiler and virtual machine.
`compile` turns numbered source lines into a linked `Program`,
which saves to and loads from the JSON bytecode document, and
`Runtime` executes it.

*/

pub type Address = usize;

mod compile;
mod link;
mod opcode;
mod operation;
mod program;
mod runtime;
mod stack;
mod val;
mod var;

pub use compile::compile;
pub use compile::Compiler;
pub use link::Link;
pub use opcode::Opcode;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::CYCLES;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;
