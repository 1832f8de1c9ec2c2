//! # basc
//!
//! Compiles a ByteBasic source file to a `.bbcode` bytecode file.

use bytebasic::term;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "basc", about = "Compile ByteBasic source to bytecode")]
struct Cli {
    /// Source file to compile
    #[arg(short = 'c', long = "compile", value_name = "FILE")]
    compile: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let path = match cli.compile {
        Some(path) => path,
        None => {
            println!("Usage: basc -c <file.bas>");
            return;
        }
    };
    match term::compile_file(&path) {
        Ok(out_path) => println!("Compiled to {}", out_path.display()),
        Err(error) => {
            term::print_error(&error);
            std::process::exit(1);
        }
    }
}
