/*!
## Rust Machine Module

This Rust module is the line-driven interpreter for the accumulator machine.

*/

/// Index of a line in the program, 0-based.
pub type Address = usize;
/// Program counter. Jumps may park it one line before the start.
pub type Symbol = isize;

/// Number of user visible flags.
pub const FLAG_COUNT: usize = 1;
/// Deepest allowed nesting of `proc` calls.
pub const MAX_CALL_DEPTH: usize = u16::MAX as usize;
/// Longest line accepted from the terminal or a file.
pub const MAX_LINE_LEN: usize = 1024;

mod command;
mod flag;
mod flow;
mod log;
mod opcode;
mod operation;
mod procedure;
mod program;
mod runtime;
mod stack;
mod var;

pub use command::Command;
pub use command::Mnemonic;
pub use flag::Flag;
pub use flag::Flags;
pub use flow::Flow;
pub use log::Log;
pub use opcode::Opcode;
pub use operation::Operation;
pub use procedure::Procedures;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use var::Var;
pub use var::Variable;

#[cfg(test)]
mod tests;
