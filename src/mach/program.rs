use super::{Address, Opcode, Val};
use crate::error;
use crate::lang::Error;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::Serialize;
use std::io::{Read, Write};

type Result<T> = std::result::Result<T, Error>;

/// ## A linked program
///
/// The unit the compiler produces, the bytecode document stores, and
/// the runtime executes. Saved as JSON: an array of instructions, each
/// `[name]` or `[name, operand]`.

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Program {
    ops: Vec<Opcode>,
}

impl Program {
    pub fn new(ops: Vec<Opcode>) -> Program {
        Program { ops }
    }

    pub fn ops(&self) -> &[Opcode] {
        &self.ops
    }

    pub fn op(&self, addr: Address) -> Option<&Opcode> {
        self.ops.get(addr)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn save<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, self)
            .map_err(|e| error!(DiskIoError; &e.to_string()))
    }

    /// Decodes a bytecode document. The document is not checked for
    /// branch targets; the runtime reports those when they are taken.
    pub fn load<R: Read>(reader: R) -> Result<Program> {
        let instructions: Vec<Instruction> = match serde_json::from_reader(reader) {
            Ok(instructions) => instructions,
            Err(e) if e.is_io() => return Err(error!(DiskIoError; &e.to_string())),
            Err(e) => return Err(error!(IllegalBytecode; &e.to_string())),
        };
        let mut ops = Vec::with_capacity(instructions.len());
        for (addr, instruction) in instructions.into_iter().enumerate() {
            let op = Opcode::decode(&instruction.name, instruction.operand)
                .map_err(|e| e.at_address(addr))?;
            ops.push(op);
        }
        Ok(Program { ops })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| error!(InternalError; &e.to_string()))
    }

    pub fn from_json(s: &str) -> Result<Program> {
        Program::load(s.as_bytes())
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (addr, op) in self.ops.iter().enumerate() {
            writeln!(f, "{:>5} {}", addr, op)?;
        }
        Ok(())
    }
}

/// Wire form of one instruction, before its name is checked.
struct Instruction {
    name: String,
    operand: Option<Val>,
}

impl<'de> Deserialize<'de> for Instruction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct InstructionVisitor;

        impl<'de> Visitor<'de> for InstructionVisitor {
            type Value = Instruction;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "an instruction [name] or [name, operand]")
            }

            fn visit_seq<A: SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> std::result::Result<Instruction, A::Error> {
                let name: String = match seq.next_element()? {
                    Some(name) => name,
                    None => return Err(de::Error::invalid_length(0, &self)),
                };
                let operand: Option<Val> = seq.next_element()?;
                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(3, &self));
                }
                Ok(Instruction { name, operand })
            }
        }

        deserializer.deserialize_seq(InstructionVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_document_shape() {
        let p = Program::new(vec![
            Opcode::Literal(Val::Integer(5)),
            Opcode::Pop("X".into()),
            Opcode::Push("X".into()),
            Opcode::Print,
            Opcode::Jump(0),
        ]);
        assert_eq!(
            p.to_json().unwrap(),
            r#"[["LOAD_CONST",5],["STORE_VAR","X"],["LOAD_VAR","X"],["PRINT"],["JUMP",0]]"#
        );
    }

    #[test]
    fn test_round_trip_keeps_value_kinds() {
        let p = Program::new(vec![
            Opcode::Literal(Val::Float(2.0)),
            Opcode::Literal(Val::from("7")),
            Opcode::Data(Val::Integer(7)),
        ]);
        assert_eq!(Program::from_json(&p.to_json().unwrap()).unwrap(), p);
    }

    #[test]
    fn test_unknown_instruction() {
        let e = Program::from_json(r#"[["NOP"],["COMPARE_NEQ"]]"#).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UnknownInstruction);
        assert_eq!(e.address(), Some(1));
    }

    #[test]
    fn test_malformed_documents() {
        for doc in &[r#"{"ops": []}"#, r#"[[]]"#, r#"[["JUMP", 1, 2]]"#, r#"[["NOP""#] {
            let e = Program::from_json(doc).unwrap_err();
            assert_eq!(e.code(), ErrorCode::IllegalBytecode, "{}", doc);
        }
    }

    #[test]
    fn test_listing() {
        let p = Program::new(vec![Opcode::Gosub(1), Opcode::Return]);
        assert_eq!(p.to_string(), "    0 GOSUB(1)\n    1 RETURN\n");
    }
}
