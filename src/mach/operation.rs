use crate::error;
use crate::lang::Error;
use std::num::IntErrorKind;

type Result<T> = std::result::Result<T, Error>;

/// ## Integer arithmetic on string values
///
/// The accumulator and every variable hold strings. Arithmetic parses
/// both sides as 32-bit signed integers and renders the result back to
/// a string. Sums, differences and products wrap on overflow.

pub struct Operation {}

impl Operation {
    pub fn integer(s: &str) -> Result<i32> {
        match s.trim().parse::<i32>() {
            Ok(n) => Ok(n),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(error!(Overflow; &format!("\"{}\"", s)))
                }
                _ => Err(error!(TypeMismatch; &format!("\"{}\"", s))),
            },
        }
    }

    pub fn sum(lhs: &str, rhs: &str) -> Result<String> {
        let l = Operation::integer(lhs)?;
        let r = Operation::integer(rhs)?;
        Ok(l.wrapping_add(r).to_string())
    }

    pub fn subtract(lhs: &str, rhs: &str) -> Result<String> {
        let l = Operation::integer(lhs)?;
        let r = Operation::integer(rhs)?;
        Ok(l.wrapping_sub(r).to_string())
    }

    pub fn multiply(lhs: &str, rhs: &str) -> Result<String> {
        let l = Operation::integer(lhs)?;
        let r = Operation::integer(rhs)?;
        Ok(l.wrapping_mul(r).to_string())
    }

    /// Returns `None` for a zero divisor without looking at `lhs`.
    pub fn divide(lhs: &str, rhs: &str) -> Result<Option<String>> {
        let r = Operation::integer(rhs)?;
        if r == 0 {
            return Ok(None);
        }
        let l = Operation::integer(lhs)?;
        match l.checked_div(r) {
            Some(i) => Ok(Some(i.to_string())),
            None => Err(error!(Overflow)),
        }
    }

    /// Sign of `lhs - rhs` as `"-1"`, `"0"` or `"1"`.
    pub fn compare(lhs: &str, rhs: &str) -> Result<String> {
        let l = Operation::integer(lhs)?;
        let r = Operation::integer(rhs)?;
        let sign: i32 = match l.cmp(&r) {
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => 1,
        };
        Ok(sign.to_string())
    }
}
