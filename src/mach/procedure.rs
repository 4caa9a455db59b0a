use super::Address;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Procedure entry points
///
/// Filled while scanning ahead of `begin`. Each entry is the line of
/// the `procdef` header, not the first line of the body.

#[derive(Debug, Default)]
pub struct Procedures {
    entries: HashMap<String, Address>,
}

impl Procedures {
    pub fn new() -> Procedures {
        Procedures::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn register(&mut self, name: &str, entry: Address) -> Result<()> {
        if self.entries.contains_key(name) {
            return Err(error!(DuplicateProcedure; name));
        }
        self.entries.insert(name.to_string(), entry);
        Ok(())
    }

    pub fn entry(&self, name: &str) -> Result<Address> {
        match self.entries.get(name) {
            Some(entry) => Ok(*entry),
            None => Err(error!(UndefinedProcedure; name)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
