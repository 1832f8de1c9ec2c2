use super::Val;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    /// Unset variables read as integer zero.
    pub fn fetch(&self, var_name: &str) -> Val {
        match self.vars.get(var_name) {
            Some(val) => val.clone(),
            None => Val::Integer(0),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: Val) -> Result<()> {
        if self.vars.len() > u16::max_value() as usize {
            return Err(error!(OutOfMemory; "TOO MANY VARIABLES"));
        }
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.clone(), value);
            }
        };
        Ok(())
    }

    /// Value resolution, shared by printing, arithmetic and comparison.
    ///
    /// A string naming a bound variable becomes that variable's value.
    /// A string that then parses as an integer becomes the integer.
    /// Anything else is used as it is.
    pub fn resolve(&self, val: Val) -> Val {
        let val = match val {
            Val::String(s) => match self.vars.get(s.as_str()) {
                Some(bound) => bound.clone(),
                None => Val::String(s),
            },
            val => val,
        };
        match val {
            Val::String(s) => match s.trim().parse::<i64>() {
                Ok(n) => Val::Integer(n),
                Err(_) => Val::String(s),
            },
            val => val,
        }
    }
}
