use super::{Address, Link, Opcode, Program, Stack, Val};
use crate::error;
use crate::lang::{Column, Error, Line, LineNumber, Token, Word};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Compile ByteBasic source into a linked program.
pub fn compile(source: &str) -> Result<Program> {
    Compiler::new().compile(source)
}

/// One operand token: a literal or a variable reference.
#[derive(Debug, Clone)]
enum Operand {
    Integer(i64),
    String(String),
    Var(Rc<str>),
}

impl Operand {
    fn load(&self) -> Opcode {
        match self {
            Operand::Integer(n) => Opcode::Literal(Val::Integer(*n)),
            Operand::String(s) => Opcode::Literal(Val::String(s.clone())),
            Operand::Var(name) => Opcode::Push(name.clone()),
        }
    }
}

/// An open `FOR` waiting for its `NEXT`.
#[derive(Debug)]
struct LoopFrame {
    var_name: Rc<str>,
    to: Operand,
    step: Operand,
    line_number: LineNumber,
    body: Address,
}

pub struct Compiler {
    ops: Stack<Opcode>,
    link: Link,
    loops: Stack<LoopFrame>,
    data: Vec<Val>,
    line_number: LineNumber,
}

impl Default for Compiler {
    fn default() -> Compiler {
        Compiler::new()
    }
}

impl Compiler {
    pub fn new() -> Compiler {
        Compiler {
            ops: Stack::new("PROGRAM TOO LARGE"),
            link: Link::new(),
            loops: Stack::new("FOR LOOPS NESTED TOO DEEP"),
            data: vec![],
            line_number: None,
        }
    }

    pub fn clear(&mut self) {
        self.ops.clear();
        self.link.clear();
        self.loops.clear();
        self.data.clear();
        self.line_number = None;
    }

    /// Compiles every line, then links branches. The compiler is reset
    /// first so one instance can compile any number of sources.
    pub fn compile(&mut self, source: &str) -> Result<Program> {
        self.clear();
        for text in source.lines() {
            if text.trim().is_empty() {
                continue;
            }
            let line = Line::new(text)?;
            self.line_number = line.number();
            if let Some(number) = self.line_number {
                self.link.insert(number, self.ops.len())?;
            }
            self.statement(&line)?;
        }
        self.link.link(&mut self.ops)?;
        if self.link.is_label(self.ops.len()) {
            self.ops.push(Opcode::End)?;
        }
        for val in std::mem::take(&mut self.data) {
            self.ops.push(Opcode::Data(val))?;
        }
        let ops = std::mem::replace(&mut self.ops, Stack::new("PROGRAM TOO LARGE"));
        Ok(Program::new(ops.into_vec()))
    }

    fn statement(&mut self, line: &Line) -> Result<()> {
        let word = match line.word()? {
            Some(word) => word,
            None => return Ok(()),
        };
        let tokens = line.tokens();
        match word {
            Word::Data => self.r#data(line),
            Word::End => self.r#end(tokens),
            Word::For => self.r#for(tokens),
            Word::Gosub => self.r#gosub(tokens),
            Word::Goto => self.r#goto(tokens),
            Word::If => self.r#if(tokens),
            Word::Input => self.r#input(tokens),
            Word::Let => self.r#let(tokens),
            Word::Next => self.r#next(tokens),
            Word::Print => self.r#print(tokens),
            Word::Read => self.r#read(tokens),
            Word::Rem => self.r#rem(),
            Word::Return => self.r#return(tokens),
        }
    }

    fn syntax_error(&self, tokens: &[Token], msg: &str) -> Error {
        let col = column_of(tokens);
        error!(SyntaxError, self.line_number, ..&col; msg)
    }

    fn operand(&self, token: &Token) -> Result<Operand> {
        if let Some(n) = token.integer() {
            Ok(Operand::Integer(n))
        } else if token.is_quoted() {
            Ok(Operand::String(token.unquoted().to_string()))
        } else if token.is_unterminated() {
            Err(self.syntax_error(std::slice::from_ref(token), "UNTERMINATED STRING"))
        } else {
            Ok(Operand::Var(token.text().into()))
        }
    }

    fn var_name(&self, token: &Token) -> Result<Rc<str>> {
        match self.operand(token)? {
            Operand::Var(name) => Ok(name),
            _ => Err(self.syntax_error(std::slice::from_ref(token), "EXPECTED VARIABLE")),
        }
    }

    fn line_target(&self, token: &Token) -> Result<u16> {
        match token.text().parse::<u16>() {
            Ok(n) => Ok(n),
            Err(_) => Err(self.syntax_error(std::slice::from_ref(token), "INVALID LINE NUMBER")),
        }
    }

    /// Emit a branch that `Link` will point at `target`'s address.
    fn push_branch(&mut self, op: fn(Address) -> Opcode, target: &Token) -> Result<()> {
        let line_target = self.line_target(target)?;
        let addr = self.ops.len();
        self.link
            .link_addr_to_line(addr, self.line_number, target.col(), line_target);
        self.ops.push(op(line_target as Address))
    }

    fn r#data(&mut self, line: &Line) -> Result<()> {
        let text = match line.tokens().first() {
            Some(token) => line.text_after(token),
            None => return Ok(()),
        };
        if text.trim().is_empty() {
            return Ok(());
        }
        for item in text.split(',') {
            let item = item.trim();
            let val = if !item.is_empty() && item.chars().all(|c| c.is_ascii_digit()) {
                match item.parse::<i64>() {
                    Ok(n) => Val::Integer(n),
                    Err(_) => Val::String(item.to_string()),
                }
            } else {
                Val::String(item.trim_matches('"').to_string())
            };
            self.data.push(val);
        }
        Ok(())
    }

    fn r#end(&mut self, tokens: &[Token]) -> Result<()> {
        if tokens.len() != 1 {
            return Err(self.syntax_error(tokens, "END"));
        }
        self.ops.push(Opcode::End)
    }

    fn r#for(&mut self, tokens: &[Token]) -> Result<()> {
        let shape_ok = (tokens.len() == 6 || tokens.len() == 8)
            && tokens[2].is("=")
            && tokens[4].is("TO")
            && (tokens.len() == 6 || tokens[6].is("STEP"));
        if !shape_ok {
            return Err(self.syntax_error(tokens, "FOR var = start TO end [STEP step]"));
        }
        let var_name = self.var_name(&tokens[1])?;
        let from = self.operand(&tokens[3])?;
        let to = self.operand(&tokens[5])?;
        let step = match tokens.get(7) {
            Some(token) => self.operand(token)?,
            None => Operand::Integer(1),
        };
        self.ops.push(from.load())?;
        self.ops.push(Opcode::Pop(var_name.clone()))?;
        self.loops.push(LoopFrame {
            var_name,
            to,
            step,
            line_number: self.line_number,
            body: self.ops.len(),
        })
    }

    fn r#gosub(&mut self, tokens: &[Token]) -> Result<()> {
        if tokens.len() != 2 {
            return Err(self.syntax_error(tokens, "GOSUB line"));
        }
        self.push_branch(Opcode::Gosub, &tokens[1])
    }

    fn r#goto(&mut self, tokens: &[Token]) -> Result<()> {
        if tokens.len() != 2 {
            return Err(self.syntax_error(tokens, "GOTO line"));
        }
        self.push_branch(Opcode::Jump, &tokens[1])
    }

    fn r#if(&mut self, tokens: &[Token]) -> Result<()> {
        const SHAPE: &str = "IF a op b THEN RETURN | IF a op b THEN GOTO line";
        if tokens.len() < 6 || !tokens[4].is("THEN") {
            return Err(self.syntax_error(tokens, SHAPE));
        }
        let compare = match tokens[2].text() {
            "<" => Opcode::Lt,
            ">" => Opcode::Gt,
            "=" => Opcode::Eq,
            "<=" => Opcode::LtEq,
            ">=" => Opcode::GtEq,
            "<>" => Opcode::NotEq,
            _ => {
                return Err(self.syntax_error(&tokens[2..3], "UNKNOWN COMPARISON"));
            }
        };
        let lhs = self.operand(&tokens[1])?;
        let rhs = self.operand(&tokens[3])?;
        if tokens.len() == 6 && tokens[5].is("RETURN") {
            self.ops.push(lhs.load())?;
            self.ops.push(rhs.load())?;
            self.ops.push(compare)?;
            self.ops.push(Opcode::ReturnIfTrue)
        } else if tokens.len() == 7 && tokens[5].is("GOTO") {
            self.ops.push(lhs.load())?;
            self.ops.push(rhs.load())?;
            self.ops.push(compare)?;
            self.push_branch(Opcode::JumpIfTrue, &tokens[6])
        } else {
            Err(self.syntax_error(tokens, SHAPE))
        }
    }

    fn r#input(&mut self, tokens: &[Token]) -> Result<()> {
        if tokens.len() != 2 {
            return Err(self.syntax_error(tokens, "INPUT var"));
        }
        let var_name = self.var_name(&tokens[1])?;
        self.ops.push(Opcode::Input(var_name))
    }

    fn r#let(&mut self, tokens: &[Token]) -> Result<()> {
        if (tokens.len() != 4 && tokens.len() != 6) || !tokens[2].is("=") {
            return Err(self.syntax_error(tokens, "LET var = value [op value]"));
        }
        let var_name = self.var_name(&tokens[1])?;
        let lhs = self.operand(&tokens[3])?;
        self.ops.push(lhs.load())?;
        if tokens.len() == 6 {
            let op = match tokens[4].text() {
                "+" => Opcode::Add,
                "-" => Opcode::Sub,
                "*" => Opcode::Mul,
                "/" => Opcode::Div,
                _ => return Err(self.syntax_error(&tokens[4..5], "UNKNOWN OPERATOR")),
            };
            let rhs = self.operand(&tokens[5])?;
            self.ops.push(rhs.load())?;
            self.ops.push(op)?;
        }
        self.ops.push(Opcode::Pop(var_name))
    }

    /// `NEXT` steps the loop variable and branches back to the top of the
    /// loop body while the variable is `<=` the limit, whatever the sign
    /// of the step.
    fn r#next(&mut self, tokens: &[Token]) -> Result<()> {
        if tokens.len() > 2 {
            return Err(self.syntax_error(tokens, "NEXT [var]"));
        }
        let col = column_of(tokens);
        let frame = match self.loops.pop() {
            Ok(frame) => frame,
            Err(_) => return Err(error!(NextWithoutFor, self.line_number, ..&col)),
        };
        if let Some(token) = tokens.get(1) {
            if token.text() != &*frame.var_name {
                return Err(error!(NextWithoutFor, self.line_number, ..&col;
                    &format!("INNERMOST FOR {} IS IN LINE {}", frame.var_name,
                        frame.line_number.unwrap_or_default())));
            }
        }
        let var_name = frame.var_name;
        self.ops.push(Opcode::Push(var_name.clone()))?;
        self.ops.push(frame.step.load())?;
        self.ops.push(Opcode::Add)?;
        self.ops.push(Opcode::Pop(var_name.clone()))?;
        self.ops.push(Opcode::Push(var_name))?;
        self.ops.push(frame.to.load())?;
        self.ops.push(Opcode::LtEq)?;
        self.ops.push(Opcode::JumpIfTrue(frame.body))
    }

    fn r#print(&mut self, tokens: &[Token]) -> Result<()> {
        match tokens.len() {
            1 => self.ops.push(Opcode::Literal(Val::String(String::new())))?,
            2 => {
                let val = self.operand(&tokens[1])?;
                self.ops.push(val.load())?
            }
            _ => return Err(self.syntax_error(tokens, "PRINT value")),
        }
        self.ops.push(Opcode::Print)
    }

    fn r#read(&mut self, tokens: &[Token]) -> Result<()> {
        let mut names: Vec<Rc<str>> = vec![];
        for token in &tokens[1..] {
            for name in token.text().split(',').filter(|s| !s.is_empty()) {
                let part = Token::new(token.col().clone(), name);
                names.push(self.var_name(&part)?);
            }
        }
        if names.is_empty() {
            return Err(self.syntax_error(tokens, "READ var [var ...]"));
        }
        for name in names {
            self.ops.push(Opcode::Read(name))?;
        }
        Ok(())
    }

    fn r#rem(&mut self) -> Result<()> {
        self.ops.push(Opcode::Nop)
    }

    fn r#return(&mut self, tokens: &[Token]) -> Result<()> {
        if tokens.len() != 1 {
            return Err(self.syntax_error(tokens, "RETURN"));
        }
        self.ops.push(Opcode::Return)
    }
}

fn column_of(tokens: &[Token]) -> Column {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => first.col().start..last.col().end,
        _ => 0..0,
    }
}
