//! # ByteBasic
//!
//! A small line-numbered BASIC, compiled to a JSON bytecode document
//! and run on a stack virtual machine.
//!
//! Two executables are included. `basc -c program.bas` compiles to
//! `program.bbcode`, and `bas -f program.bbcode` runs it.
//!
//! ```
//! use bytebasic::mach::{compile, Runtime};
//!
//! let program = compile("10 LET X = 5\n20 PRINT X").unwrap();
//! let mut output: Vec<u8> = vec![];
//! Runtime::new(program).run(&mut std::io::empty(), &mut output).unwrap();
//! assert_eq!(output, b"5\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
