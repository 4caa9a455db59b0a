/*!
# Rust Language Module

This Rust module turns source text into tokenized lines and
owns the error type shared with the machine.

*/

/// 1-indexed source line, if known.
pub type LineNumber = Option<usize>;

#[macro_use]
mod error;
mod address;
mod lex;
mod line;

pub use address::address;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
