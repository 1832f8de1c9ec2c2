use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Entries a `Stack` may hold before pushes fail with `OUT OF MEMORY`.
pub const STACK_LIMIT: usize = u16::max_value() as usize;

/// ## Stack enforced and size limited vector
///
/// Used for the operand stack, the call stack, the compiler's loop
/// frames and the instruction buffer. A failed push leaves the stack
/// unchanged.

pub struct Stack<T> {
    overflow_message: &'static str,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(overflow_message: &'static str) -> Stack<T> {
        Stack {
            overflow_message,
            vec: vec![],
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.vec.get_mut(index)
    }

    pub fn clear(&mut self) {
        self.vec.clear()
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= STACK_LIMIT {
            return Err(error!(OutOfMemory; self.overflow_message));
        }
        self.vec.push(val);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T> {
        self.vec
            .pop()
            .ok_or_else(|| error!(InternalError; "STACK UNDERFLOW"))
    }

    /// Pops `(lhs, rhs)`: the value pushed first comes back first.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        let rhs = self.pop()?;
        let lhs = self.pop()?;
        Ok((lhs, rhs))
    }

    pub fn into_vec(self) -> Vec<T> {
        self.vec
    }
}
