extern crate linefeed;
use super::{Console, Reply};
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};

/// Console on a real terminal: line editing and history for `INPUT`.
pub struct LineEditor {
    interface: Interface<DefaultTerminal>,
}

impl LineEditor {
    pub fn new() -> std::io::Result<LineEditor> {
        let interface = Interface::new("ByteBasic")?;
        interface.set_report_signal(Signal::Interrupt, true);
        Ok(LineEditor { interface })
    }
}

impl Console for LineEditor {
    fn print(&mut self, s: &str) -> std::io::Result<()> {
        self.interface.write_fmt(format_args!("{}", s))
    }

    fn trace(&mut self, s: &str) -> std::io::Result<()> {
        self.interface
            .write_fmt(format_args!("{}\n", Style::new().dimmed().paint(s)))
    }

    fn read_line(&mut self, prompt: &str) -> std::io::Result<Reply> {
        self.interface.set_prompt(prompt)?;
        match self.interface.read_line()? {
            ReadResult::Input(string) => {
                self.interface.add_history_unique(string.clone());
                Ok(Reply::Line(string))
            }
            ReadResult::Signal(Signal::Interrupt) => {
                self.interface.set_buffer("")?;
                self.interface.lock_reader().cancel_read_line()?;
                Ok(Reply::Interrupt)
            }
            ReadResult::Signal(_) | ReadResult::Eof => Ok(Reply::Eof),
        }
    }
}
