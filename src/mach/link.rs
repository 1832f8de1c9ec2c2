use super::{Address, Opcode, Stack};
use crate::error;
use crate::lang::{Column, Error, LineNumber};
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Line number linker
///
/// Branches are emitted with the target line number in place of the
/// address. Once every line has been compiled, `link` rewrites them.

#[derive(Debug, Default)]
pub struct Link {
    labels: BTreeMap<u16, Address>,
    unlinked: BTreeMap<Address, (LineNumber, Column, u16)>,
}

impl Link {
    pub fn new() -> Link {
        Link::default()
    }

    pub fn clear(&mut self) {
        self.labels.clear();
        self.unlinked.clear();
    }

    /// Record where the code for `line_number` begins.
    pub fn insert(&mut self, line_number: u16, addr: Address) -> Result<()> {
        if self.labels.insert(line_number, addr).is_some() {
            return Err(error!(SyntaxError, Some(line_number); "DUPLICATE LINE NUMBER"));
        }
        Ok(())
    }

    /// True if some line begins at `addr`.
    pub fn is_label(&self, addr: Address) -> bool {
        self.labels.values().any(|&a| a == addr)
    }

    pub fn link_addr_to_line(
        &mut self,
        addr: Address,
        line_number: LineNumber,
        col: &Column,
        target: u16,
    ) {
        self.unlinked.insert(addr, (line_number, col.clone(), target));
    }

    pub fn link(&mut self, ops: &mut Stack<Opcode>) -> Result<()> {
        for (op_addr, (line_number, col, target)) in std::mem::take(&mut self.unlinked) {
            let dest = match self.labels.get(&target) {
                Some(dest) => *dest,
                None => {
                    return Err(error!(UndefinedLine, line_number, ..&col;
                        &format!("NO LINE {}", target)))
                }
            };
            if let Some(op) = ops.get_mut(op_addr) {
                if let Some(new_op) = match op {
                    Opcode::JumpIfTrue(_) => Some(Opcode::JumpIfTrue(dest)),
                    Opcode::Jump(_) => Some(Opcode::Jump(dest)),
                    Opcode::Gosub(_) => Some(Opcode::Gosub(dest)),
                    _ => None,
                } {
                    *op = new_op;
                    continue;
                }
            }
            return Err(error!(InternalError, line_number, ..&col; "LINK FAILURE"));
        }
        Ok(())
    }
}
