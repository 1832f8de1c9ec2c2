use super::Val;
use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

/// Binary operations over already resolved values.
pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (String(l), String(r)) => Ok(String(l + &r)),
            (Integer(l), Integer(r)) => match l.checked_add(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (lhs, rhs) => Operation::float(lhs, rhs, "ADD", |l, r| l + r),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_sub(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (lhs, rhs) => Operation::float(lhs, rhs, "SUBTRACT", |l, r| l - r),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_mul(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (lhs, rhs) => Operation::float(lhs, rhs, "MULTIPLY", |l, r| l * r),
        }
    }

    /// True division. The quotient is a float even for two integers.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let divisor = match rhs {
            Val::Integer(r) => r as f64,
            Val::Float(r) => r,
            Val::String(_) => return Err(Operation::mismatch("DIVIDE", &lhs, &rhs)),
        };
        if divisor == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Operation::float(lhs, rhs, "DIVIDE", |l, r| l / r)
    }

    fn float(lhs: Val, rhs: Val, verb: &str, f: fn(f64, f64) -> f64) -> Result<Val> {
        match (Operation::as_f64(&lhs), Operation::as_f64(&rhs)) {
            (Some(l), Some(r)) => Ok(Val::Float(f(l, r))),
            _ => Err(Operation::mismatch(verb, &lhs, &rhs)),
        }
    }

    fn as_f64(val: &Val) -> Option<f64> {
        match val {
            Val::Integer(n) => Some(*n as f64),
            Val::Float(n) => Some(*n),
            Val::String(_) => None,
        }
    }

    fn mismatch(verb: &str, lhs: &Val, rhs: &Val) -> Error {
        error!(TypeMismatch; &format!(
            "CANNOT {} {:?} ({}) AND {:?} ({})",
            verb,
            lhs.to_string(),
            lhs.type_name(),
            rhs.to_string(),
            rhs.type_name()
        ))
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::ordering(lhs, rhs)?;
        Ok(Val::from_bool(ord == Some(Ordering::Equal)))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::ordering(lhs, rhs)?;
        Ok(Val::from_bool(ord != Some(Ordering::Equal)))
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::ordering(lhs, rhs)?;
        Ok(Val::from_bool(ord == Some(Ordering::Less)))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::ordering(lhs, rhs)?;
        Ok(Val::from_bool(ord == Some(Ordering::Greater)))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::ordering(lhs, rhs)?;
        Ok(Val::from_bool(matches!(
            ord,
            Some(Ordering::Less) | Some(Ordering::Equal)
        )))
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::ordering(lhs, rhs)?;
        Ok(Val::from_bool(matches!(
            ord,
            Some(Ordering::Greater) | Some(Ordering::Equal)
        )))
    }

    /// Numbers compare numerically and strings lexicographically. A
    /// numeric-looking string facing a number is read as a number; any
    /// other string facing a number is a type mismatch.
    /// `None` means unordered (a NaN was involved).
    fn ordering(lhs: Val, rhs: Val) -> Result<Option<Ordering>> {
        use Val::*;
        let (lhs, rhs) = match (lhs, rhs) {
            (l, String(r)) if l.is_numeric() => match r.trim().parse::<i64>() {
                Ok(n) => (l, Integer(n)),
                Err(_) => return Err(Operation::compare_mismatch(&l, &String(r))),
            },
            (String(l), r) if r.is_numeric() => match l.trim().parse::<i64>() {
                Ok(n) => (Integer(n), r),
                Err(_) => return Err(Operation::compare_mismatch(&String(l), &r)),
            },
            pair => pair,
        };
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(Some(l.cmp(&r))),
            (String(l), String(r)) => Ok(Some(l.cmp(&r))),
            (lhs, rhs) => match (Operation::as_f64(&lhs), Operation::as_f64(&rhs)) {
                (Some(l), Some(r)) => Ok(l.partial_cmp(&r)),
                _ => Err(Operation::compare_mismatch(&lhs, &rhs)),
            },
        }
    }

    fn compare_mismatch(lhs: &Val, rhs: &Val) -> Error {
        Operation::mismatch("COMPARE", lhs, rhs)
    }
}
