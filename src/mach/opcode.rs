use super::{Address, Val};
use crate::error;
use crate::lang::Error;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Virtual machine instruction set
///
/// The ByteBasic virtual machine has no registers.
/// Every operation is performed on the stack.
///
/// For example: `LET A = B / 2` compiles to
/// `[LOAD_VAR(B), LOAD_CONST(2), DIV, STORE_VAR(A)]`
///
/// This enum is shared by the compiler and the runtime. The bytecode
/// document names each instruction by its wire name, see [`Opcode::name`].

#[derive(Clone, PartialEq)]
pub enum Opcode {
    // *** Stack manipulation
    /// Push literal value on to the stack.
    Literal(Val),
    /// Push value of named variable. Unset variables push 0.
    Push(Rc<str>),
    /// Pop stack value to named variable.
    Pop(Rc<str>),

    // *** Branch control
    /// Unconditional branch to Address.
    Jump(Address),
    /// Pop stack and branch to Address if true.
    JumpIfTrue(Address),
    /// Pop stack and return from subroutine if true.
    ReturnIfTrue,
    /// Push return address on the call stack and branch to Address.
    Gosub(Address),
    /// Pop the call stack or else error: RETURN WITHOUT GOSUB.
    Return,
    /// Symbolic branch destination. Branches whose Address is past the
    /// end of the program are looked up among the labels.
    Label(Address),

    // *** Statements
    End,
    Nop,
    Print,
    Input(Rc<str>),
    Read(Rc<str>),
    /// One entry of the DATA table. Does nothing when executed.
    Data(Val),

    // *** Expression operations
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl Opcode {
    /// Wire name used in the bytecode document.
    pub fn name(&self) -> &'static str {
        use Opcode::*;
        match self {
            Literal(_) => "LOAD_CONST",
            Push(_) => "LOAD_VAR",
            Pop(_) => "STORE_VAR",
            Jump(_) => "JUMP",
            JumpIfTrue(_) => "JUMP_IF_TRUE",
            ReturnIfTrue => "JUMP_IF_TRUE_RETURN",
            Gosub(_) => "GOSUB",
            Return => "RETURN",
            Label(_) => "LABEL",
            End => "END",
            Nop => "NOP",
            Print => "PRINT",
            Input(_) => "INPUT",
            Read(_) => "READ_VAR",
            Data(_) => "DATA",
            Add => "ADD",
            Sub => "SUB",
            Mul => "MUL",
            Div => "DIV",
            Eq => "COMPARE_EQ",
            NotEq => "COMPARE_NE",
            Lt => "COMPARE_LT",
            LtEq => "COMPARE_LE",
            Gt => "COMPARE_GT",
            GtEq => "COMPARE_GE",
        }
    }

    pub fn operand(&self) -> Option<Val> {
        use Opcode::*;
        match self {
            Literal(v) | Data(v) => Some(v.clone()),
            Push(s) | Pop(s) | Input(s) | Read(s) => Some(Val::String(s.to_string())),
            Jump(a) | JumpIfTrue(a) | Gosub(a) | Label(a) => Some(Val::Integer(*a as i64)),
            ReturnIfTrue | Return | End | Nop | Print | Add | Sub | Mul | Div | Eq | NotEq
            | Lt | LtEq | Gt | GtEq => None,
        }
    }

    /// The jump target of a branch, if this is one.
    pub fn target(&self) -> Option<Address> {
        match self {
            Opcode::Jump(a) | Opcode::JumpIfTrue(a) | Opcode::Gosub(a) => Some(*a),
            _ => None,
        }
    }

    /// Rebuild an instruction from its wire form.
    pub fn decode(name: &str, operand: Option<Val>) -> Result<Opcode> {
        use Opcode::*;
        fn none(op: Opcode, operand: Option<Val>) -> Result<Opcode> {
            match operand {
                None => Ok(op),
                Some(_) => Err(error!(IllegalBytecode; &format!("{} TAKES NO OPERAND", op.name()))),
            }
        }
        fn val(name: &str, operand: Option<Val>) -> Result<Val> {
            match operand {
                Some(val) => Ok(val),
                None => Err(error!(IllegalBytecode; &format!("{} NEEDS AN OPERAND", name))),
            }
        }
        fn ident(name: &str, operand: Option<Val>) -> Result<Rc<str>> {
            match val(name, operand)? {
                Val::String(s) => Ok(s.into()),
                _ => Err(error!(IllegalBytecode; &format!("{} NEEDS A VARIABLE NAME", name))),
            }
        }
        fn address(name: &str, operand: Option<Val>) -> Result<Address> {
            match val(name, operand)? {
                Val::Integer(n) if n >= 0 => Ok(n as Address),
                _ => Err(error!(IllegalBytecode; &format!("{} NEEDS AN ADDRESS", name))),
            }
        }
        match name {
            "LOAD_CONST" => Ok(Literal(val(name, operand)?)),
            "LOAD_VAR" => Ok(Push(ident(name, operand)?)),
            "STORE_VAR" => Ok(Pop(ident(name, operand)?)),
            "JUMP" => Ok(Jump(address(name, operand)?)),
            "JUMP_IF_TRUE" => Ok(JumpIfTrue(address(name, operand)?)),
            "JUMP_IF_TRUE_RETURN" => none(ReturnIfTrue, operand),
            "GOSUB" => Ok(Gosub(address(name, operand)?)),
            "RETURN" => none(Return, operand),
            "LABEL" => Ok(Label(address(name, operand)?)),
            "END" => none(End, operand),
            "NOP" => none(Nop, operand),
            "PRINT" => none(Print, operand),
            "INPUT" => Ok(Input(ident(name, operand)?)),
            "READ_VAR" => Ok(Read(ident(name, operand)?)),
            "DATA" => Ok(Data(val(name, operand)?)),
            "ADD" => none(Add, operand),
            "SUB" => none(Sub, operand),
            "MUL" => none(Mul, operand),
            "DIV" => none(Div, operand),
            "COMPARE_EQ" => none(Eq, operand),
            "COMPARE_NE" => none(NotEq, operand),
            "COMPARE_LT" => none(Lt, operand),
            "COMPARE_LE" => none(LtEq, operand),
            "COMPARE_GT" => none(Gt, operand),
            "COMPARE_GE" => none(GtEq, operand),
            _ => Err(error!(UnknownInstruction; &format!("{:?}", name))),
        }
    }
}

impl Serialize for Opcode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let operand = self.operand();
        let len = if operand.is_some() { 2 } else { 1 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(self.name())?;
        if let Some(val) = &operand {
            seq.serialize_element(val)?;
        }
        seq.end()
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.operand() {
            Some(Val::String(s)) if matches!(self, Opcode::Literal(_) | Opcode::Data(_)) => {
                write!(f, "{}({:?})", self.name(), s)
            }
            Some(val) => write!(f, "{}({})", self.name(), val),
            None => write!(f, "{}", self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_display() {
        assert_eq!(Opcode::Literal(Val::Integer(5)).to_string(), "LOAD_CONST(5)");
        assert_eq!(Opcode::Literal("HI".into()).to_string(), "LOAD_CONST(\"HI\")");
        assert_eq!(Opcode::Pop("X".into()).to_string(), "STORE_VAR(X)");
        assert_eq!(Opcode::NotEq.to_string(), "COMPARE_NE");
    }

    #[test]
    fn test_decode_every_name() {
        const NAMES: [&str; 25] = [
            "LOAD_CONST",
            "LOAD_VAR",
            "STORE_VAR",
            "JUMP",
            "JUMP_IF_TRUE",
            "JUMP_IF_TRUE_RETURN",
            "GOSUB",
            "RETURN",
            "LABEL",
            "END",
            "NOP",
            "PRINT",
            "INPUT",
            "READ_VAR",
            "DATA",
            "ADD",
            "SUB",
            "MUL",
            "DIV",
            "COMPARE_EQ",
            "COMPARE_NE",
            "COMPARE_LT",
            "COMPARE_LE",
            "COMPARE_GT",
            "COMPARE_GE",
        ];
        for name in NAMES.iter() {
            let decoded = Opcode::decode(name, None)
                .or_else(|_| Opcode::decode(name, Some(Val::Integer(1))))
                .or_else(|_| Opcode::decode(name, Some(Val::from("A"))));
            assert_eq!(decoded.unwrap().name(), *name);
        }
    }

    #[test]
    fn test_decode_unknown() {
        let e = Opcode::decode("COMPARE_NEQ", None).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UnknownInstruction);
    }

    #[test]
    fn test_decode_bad_operands() {
        let e = Opcode::decode("PRINT", Some(Val::Integer(1))).unwrap_err();
        assert_eq!(e.code(), ErrorCode::IllegalBytecode);
        let e = Opcode::decode("JUMP", Some(Val::Integer(-1))).unwrap_err();
        assert_eq!(e.code(), ErrorCode::IllegalBytecode);
        let e = Opcode::decode("STORE_VAR", None).unwrap_err();
        assert_eq!(e.code(), ErrorCode::IllegalBytecode);
    }
}
