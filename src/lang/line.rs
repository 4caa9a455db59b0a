use super::{lex, Error};
use crate::error;

/// Marks a procedure definition header, e.g. `procdef greet`.
pub const PROCEDURE_HEADER: &str = "procdef";

/// One line of source as whitespace separated tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    tokens: Vec<String>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        Line { tokens: lex(s) }
    }

    pub fn from_tokens<T: Into<String>, I: IntoIterator<Item = T>>(tokens: I) -> Line {
        Line {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The leading token, or `""` for an empty line.
    pub fn command(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or("")
    }

    /// Comments and empty lines occupy a line number but never run.
    pub fn is_blank(&self) -> bool {
        let command = self.command();
        command.is_empty() || command.starts_with('#')
    }

    pub fn is_procedure_header(&self) -> bool {
        self.command().starts_with(PROCEDURE_HEADER)
    }

    pub fn operand(&self, index: usize) -> Result<&str, Error> {
        match self.tokens.get(index) {
            Some(token) => Ok(token.as_str()),
            None => Err(error!(MissingOperand; self.command())),
        }
    }

    /// Every token from `index` onward glued back together
    /// without separators.
    pub fn operands_joined(&self, index: usize) -> Result<String, Error> {
        self.operand(index)?;
        Ok(self.tokens[index..].concat())
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}
