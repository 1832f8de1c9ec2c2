//! # bas
//!
//! Runs a ByteBasic `.bbcode` bytecode file.

use bytebasic::term;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bas", about = "Run ByteBasic bytecode")]
struct Cli {
    /// Bytecode file to run
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print every instruction before it executes
    #[arg(long)]
    trace: bool,
}

fn main() {
    let cli = Cli::parse();
    let path = match cli.file {
        Some(path) => path,
        None => {
            println!("Usage: bas -f <file.bbcode> [--trace]");
            return;
        }
    };
    if let Err(error) = term::run_file(&path, cli.trace) {
        term::print_error(&error);
        std::process::exit(1);
    }
}
