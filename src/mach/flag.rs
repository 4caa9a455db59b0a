use super::FLAG_COUNT;
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

/// User visible flags, addressed by index from `setf` and `rstf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// Disables variable substitution in operands.
    StringMode = 0,
}

impl Flag {
    pub const ALL: [Flag; FLAG_COUNT] = [Flag::StringMode];
}

impl TryFrom<i32> for Flag {
    type Error = Error;
    fn try_from(index: i32) -> Result<Self, Self::Error> {
        match usize::try_from(index) {
            Ok(i) if i < FLAG_COUNT => Ok(Flag::ALL[i]),
            _ => Err(error!(FlagOutOfRange; &index.to_string())),
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Flag::StringMode => write!(f, "StringMode"),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Flags {
    set: [bool; FLAG_COUNT],
}

impl Flags {
    pub fn set(&mut self, flag: Flag) {
        self.set[flag as usize] = true;
    }

    pub fn reset(&mut self, flag: Flag) {
        self.set[flag as usize] = false;
    }

    pub fn is_set(&self, flag: Flag) -> bool {
        self.set[flag as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Flag, bool)> + '_ {
        (0..FLAG_COUNT).map(move |i| (Flag::ALL[i], self.set[i]))
    }
}
