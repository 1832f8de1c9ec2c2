use super::{Address, Opcode, Operation, Program, Stack, Val, Var};
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Instructions executed per call to `execute` by the blocking driver.
pub const CYCLES: usize = 5000;

/// ## Virtual machine
///
/// Owns everything one run of a program mutates: the program counter,
/// the operand stack, the call stack, variables and the DATA cursor.
/// The user interface drives it with `execute` and reacts to the
/// returned `Event`.

pub struct Runtime {
    program: Program,
    labels: HashMap<Address, Address>,
    data: Vec<Val>,
    data_pointer: usize,
    pc: Address,
    stack: Stack<Val>,
    calls: Stack<Address>,
    vars: Var,
    state: State,
    tron: bool,
    traced: bool,
}

/// ## Events for the user interface

#[derive(Debug, PartialEq)]
pub enum Event {
    /// Program halted. Further calls to `execute` keep returning this.
    Stopped,
    /// Cycle budget used up; call `execute` again.
    Running,
    /// Output text, newline included.
    Print(String),
    /// Prompt text. Answer with `Runtime::input`.
    Input(String),
    /// Trace mode: the instruction at this address is about to execute.
    Trace(Address, String),
    /// The run ended with this error.
    Error(Error),
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Running,
    Input(Rc<str>),
    Interrupt,
    Stopped,
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        let mut labels: HashMap<Address, Address> = HashMap::new();
        let mut data: Vec<Val> = vec![];
        for (addr, op) in program.ops().iter().enumerate() {
            match op {
                Opcode::Label(label) => {
                    labels.insert(*label, addr);
                }
                Opcode::Data(val) => data.push(val.clone()),
                _ => {}
            }
        }
        Runtime {
            program,
            labels,
            data,
            data_pointer: 0,
            pc: 0,
            stack: Stack::new("EXPRESSION STACK FULL"),
            calls: Stack::new("GOSUB NESTED TOO DEEP"),
            vars: Var::new(),
            state: State::Running,
            tron: false,
            traced: false,
        }
    }

    /// Trace on or off.
    pub fn tron(&mut self, on: bool) {
        self.tron = on;
        self.traced = false;
    }

    pub fn interrupt(&mut self) {
        if self.state != State::Stopped {
            self.state = State::Interrupt;
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.state == State::Stopped
    }

    pub fn var(&self, var_name: &str) -> Val {
        self.vars.fetch(var_name)
    }

    /// Answer to an `Event::Input`. Text that parses as an integer is
    /// stored as one; anything else is stored as typed.
    pub fn input(&mut self, s: &str) -> Result<()> {
        if let State::Input(var_name) = &self.state {
            let var_name = var_name.clone();
            self.state = State::Running;
            if let Err(error) = self.vars.store(&var_name, Val::from_input(s)) {
                self.state = State::Stopped;
                return Err(error.at_address(self.pc.saturating_sub(1)));
            }
        }
        Ok(())
    }

    /// Input ended while an answer was pending. Stops the program.
    pub fn input_past_end(&mut self) -> Error {
        self.state = State::Stopped;
        error!(InputPastEnd).at_address(self.pc.saturating_sub(1))
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        match &self.state {
            State::Stopped => return Event::Stopped,
            State::Input(var_name) => return Event::Input(format!("{}? ", var_name)),
            State::Interrupt => {
                self.state = State::Stopped;
                return Event::Error(error!(Break).at_address(self.pc));
            }
            State::Running => {}
        }
        for _ in 0..cycles {
            match self.step() {
                Ok(None) => {}
                Ok(Some(event)) => return event,
                Err(error) => {
                    self.state = State::Stopped;
                    return Event::Error(error.at_address(self.pc));
                }
            }
        }
        Event::Running
    }

    /// Run to completion, reading `INPUT` answers from `input` and
    /// writing output and prompts to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            match self.execute(CYCLES) {
                Event::Stopped => return Ok(()),
                Event::Running => {}
                Event::Print(s) => output.write_all(s.as_bytes()).map_err(io_error)?,
                Event::Trace(addr, s) => writeln!(output, "[{}] {}", addr, s).map_err(io_error)?,
                Event::Input(prompt) => {
                    output.write_all(prompt.as_bytes()).map_err(io_error)?;
                    output.flush().map_err(io_error)?;
                    let mut line = String::new();
                    if input.read_line(&mut line).map_err(io_error)? == 0 {
                        return Err(self.input_past_end());
                    }
                    self.input(line.trim_end_matches(&['\r', '\n'][..]))?;
                }
                Event::Error(error) => return Err(error),
            }
        }
    }

    fn step(&mut self) -> Result<Option<Event>> {
        let op = match self.program.op(self.pc) {
            Some(op) => op.clone(),
            None => {
                self.state = State::Stopped;
                return Ok(Some(Event::Stopped));
            }
        };
        if self.tron && !self.traced {
            self.traced = true;
            return Ok(Some(Event::Trace(self.pc, op.to_string())));
        }
        self.traced = false;
        let mut next = self.pc + 1;
        let mut event: Option<Event> = None;
        match op {
            Opcode::Literal(val) => self.stack.push(val)?,
            Opcode::Push(var_name) => self.stack.push(self.vars.fetch(&var_name))?,
            Opcode::Pop(var_name) => {
                let val = self.stack.pop()?;
                self.vars.store(&var_name, val)?;
            }

            Opcode::Jump(addr) => next = self.jump_target(addr)?,
            Opcode::JumpIfTrue(addr) => {
                if self.pop_resolved()?.is_true() {
                    next = self.jump_target(addr)?;
                }
            }
            Opcode::ReturnIfTrue => {
                if self.pop_resolved()?.is_true() {
                    next = self.return_address()?;
                }
            }
            Opcode::Gosub(addr) => {
                next = self.jump_target(addr)?;
                self.calls.push(self.pc + 1)?;
            }
            Opcode::Return => next = self.return_address()?,
            Opcode::Label(_) => {}

            Opcode::End => {
                self.state = State::Stopped;
                return Ok(Some(Event::Stopped));
            }
            Opcode::Nop | Opcode::Data(_) => {}
            Opcode::Print => {
                let val = self.pop_resolved()?;
                event = Some(Event::Print(format!("{}\n", val)));
            }
            Opcode::Input(var_name) => {
                event = Some(Event::Input(format!("{}? ", var_name)));
                self.state = State::Input(var_name);
            }
            Opcode::Read(var_name) => {
                let val = match self.data.get(self.data_pointer) {
                    Some(val) => val.clone(),
                    None => return Err(error!(OutOfData)),
                };
                self.data_pointer += 1;
                self.vars.store(&var_name, val)?;
            }

            Opcode::Add => self.binary(Operation::sum)?,
            Opcode::Sub => self.binary(Operation::subtract)?,
            Opcode::Mul => self.binary(Operation::multiply)?,
            Opcode::Div => self.binary(Operation::divide)?,
            Opcode::Eq => self.binary(Operation::equal)?,
            Opcode::NotEq => self.binary(Operation::not_equal)?,
            Opcode::Lt => self.binary(Operation::less)?,
            Opcode::LtEq => self.binary(Operation::less_equal)?,
            Opcode::Gt => self.binary(Operation::greater)?,
            Opcode::GtEq => self.binary(Operation::greater_equal)?,
        }
        self.pc = next;
        Ok(event)
    }

    fn pop_resolved(&mut self) -> Result<Val> {
        let val = self.stack.pop()?;
        Ok(self.vars.resolve(val))
    }

    fn binary(&mut self, f: fn(Val, Val) -> Result<Val>) -> Result<()> {
        let (lhs, rhs) = self.stack.pop_2()?;
        let lhs = self.vars.resolve(lhs);
        let rhs = self.vars.resolve(rhs);
        self.stack.push(f(lhs, rhs)?)
    }

    /// Branch targets are instruction addresses; a target past the end
    /// of the program names a `LABEL` instead.
    fn jump_target(&self, addr: Address) -> Result<Address> {
        if addr < self.program.len() {
            return Ok(addr);
        }
        match self.labels.get(&addr) {
            Some(dest) => Ok(*dest),
            None => Err(error!(InvalidJumpTarget; &format!("NO ADDRESS OR LABEL {}", addr))),
        }
    }

    fn return_address(&mut self) -> Result<Address> {
        self.calls.pop().map_err(|_| error!(ReturnWithoutGosub))
    }
}

fn io_error(e: std::io::Error) -> Error {
    error!(DiskIoError; &e.to_string())
}
