use super::Address;

/// What the engine does with the program counter after an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Fall through to the next line.
    Next,
    /// Fall through, reporting a non-zero status from the instruction.
    Status(u16),
    /// Continue at a 1-indexed source line.
    Jump(i32),
    /// Save the program counter and continue after a procedure header.
    Call(Address),
    /// Resume after the most recent call site.
    Return,
    /// Stop before the next line that would run.
    Halt,
}
