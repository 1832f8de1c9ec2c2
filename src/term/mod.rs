/*!
## Terminal front end

File handling and the console loop shared by the `basc` and `bas`
executables. Interactive input goes through linefeed when stdin is a
terminal; otherwise stdin is read one plain line at a time.

*/

extern crate ansi_term;
extern crate ctrlc;
use crate::mach::{compile, Event, Program, Runtime, CYCLES};
use crate::{error, lang::Error};
use ansi_term::Style;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod interactive;

type Result<T> = std::result::Result<T, Error>;

/// Compiles `path` and writes the bytecode beside it with the
/// `.bbcode` extension. Returns the path written.
pub fn compile_file(path: &Path) -> Result<PathBuf> {
    let mut source = String::new();
    open(path)?
        .read_to_string(&mut source)
        .map_err(io_error)?;
    let program = compile(&source)?;
    let out_path = path.with_extension("bbcode");
    let file = File::create(&out_path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    program.save(&mut writer)?;
    writer.flush().map_err(io_error)?;
    Ok(out_path)
}

pub fn load_file(path: &Path) -> Result<Program> {
    Program::load(BufReader::new(open(path)?))
}

/// Loads and runs a bytecode file on the console until it stops.
/// CTRL-C interrupts the program with `BREAK`.
pub fn run_file(path: &Path, trace: bool) -> Result<()> {
    let program = load_file(path)?;
    let mut runtime = Runtime::new(program);
    runtime.tron(trace);

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .map_err(|e| error!(InternalError; &e.to_string()))?;

    if std::io::stdin().is_terminal() {
        let mut console = interactive::LineEditor::new().map_err(io_error)?;
        main_loop(&mut runtime, &interrupted, &mut console)
    } else {
        main_loop(&mut runtime, &interrupted, &mut Plain)
    }
}

/// Errors print bold, with the classic `?` in front.
pub fn print_error(error: &Error) {
    eprintln!("{}", Style::new().bold().paint(format!("?{}", error)));
}

/// What came back from asking the user for a line.
enum Reply {
    Line(String),
    Interrupt,
    Eof,
}

trait Console {
    fn print(&mut self, s: &str) -> std::io::Result<()>;
    fn trace(&mut self, s: &str) -> std::io::Result<()>;
    fn read_line(&mut self, prompt: &str) -> std::io::Result<Reply>;
}

fn main_loop<C: Console>(
    runtime: &mut Runtime,
    interrupted: &AtomicBool,
    console: &mut C,
) -> Result<()> {
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(CYCLES) {
            Event::Stopped => return Ok(()),
            Event::Running => {}
            Event::Print(s) => console.print(&s).map_err(io_error)?,
            Event::Trace(addr, s) => console
                .trace(&format!("[{}] {}", addr, s))
                .map_err(io_error)?,
            Event::Input(prompt) => match console.read_line(&prompt).map_err(io_error)? {
                Reply::Line(s) => runtime.input(&s)?,
                Reply::Interrupt => runtime.interrupt(),
                Reply::Eof => return Err(runtime.input_past_end()),
            },
            Event::Error(error) => return Err(error),
        }
    }
}

/// Console for piped or redirected stdin.
struct Plain;

impl Console for Plain {
    fn print(&mut self, s: &str) -> std::io::Result<()> {
        let mut stdout = std::io::stdout();
        stdout.write_all(s.as_bytes())?;
        stdout.flush()
    }

    fn trace(&mut self, s: &str) -> std::io::Result<()> {
        self.print(&format!("{}\n", s))
    }

    fn read_line(&mut self, prompt: &str) -> std::io::Result<Reply> {
        self.print(prompt)?;
        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            return Ok(Reply::Eof);
        }
        Ok(Reply::Line(
            line.trim_end_matches(&['\r', '\n'][..]).to_string(),
        ))
    }
}

fn open(path: &Path) -> Result<File> {
    match File::open(path) {
        Ok(file) => Ok(file),
        Err(error) => {
            let msg = format!("{}: {}", path.display(), error);
            match error.kind() {
                ErrorKind::NotFound => Err(error!(FileNotFound; &msg)),
                _ => Err(error!(DiskIoError; &msg)),
            }
        }
    }
}

fn io_error(error: std::io::Error) -> Error {
    error!(DiskIoError; &error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_compile_file_writes_bbcode() {
        let dir = std::env::temp_dir().join(format!("bytebasic-term-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let src = dir.join("hello.bas");
        std::fs::write(&src, "10 PRINT \"HI\"\n").unwrap();
        let out = compile_file(&src).unwrap();
        assert_eq!(out, dir.join("hello.bbcode"));
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            r#"[["LOAD_CONST","HI"],["PRINT"]]"#
        );
        assert_eq!(load_file(&out).unwrap().len(), 2);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let e = load_file(Path::new("no/such/program.bbcode")).unwrap_err();
        assert_eq!(e.code(), ErrorCode::FileNotFound);
    }
}
