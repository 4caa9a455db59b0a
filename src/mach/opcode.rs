use super::{Command, Flag, Mnemonic, Operation};
use crate::lang::{address, Error, Line};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Decoded instruction
///
/// One line of source after the command table has identified it and
/// its operands have been parsed. Operands that name a value are kept
/// as written; they are resolved against the variables only when the
/// instruction runs, because string mode may change in between.
///
/// Conditional jump targets stay unparsed until the jump is taken.
///
/// For example: `jmp 12` decodes to `Jmp(12)`, `jaz 12` to
/// `Jaz(Some("12"))`, `def x &vars+4` to `Def("x", 4)` and `add x`
/// to `Add("x")`.

#[derive(Clone, PartialEq)]
pub enum Opcode {
    // *** Module
    Begin,
    End,

    // *** Data
    /// Variable name and address offset.
    Def(String, i32),
    Ld(String),
    Sav(String),

    // *** Arithmetic
    Add(String),
    Sub(String),
    Mul(String),
    Div(String),
    Cmp(String),

    // *** Flags
    Setf(Flag),
    Rstf(Flag),

    // *** Procedures
    Proc(String),
    Endproc,

    // *** Branch control, targets are 1-indexed source lines
    Jmp(i32),
    Jaz(Option<String>),
    Jap(Option<String>),
    Jan(Option<String>),

    // *** Utility
    Dump,
    Print,
    Help,
}

impl Opcode {
    pub fn decode(command: &Command, line: &Line) -> Result<Opcode> {
        use Mnemonic::*;
        let arg = |index: usize| line.operand(index).map(String::from);
        let target = || Operation::integer(line.operand(1)?);
        let flag = || Flag::try_from(Operation::integer(line.operand(1)?)?);
        Ok(match command.mnemonic() {
            Begin => Opcode::Begin,
            End => Opcode::End,
            Def => {
                let name = arg(1)?;
                Opcode::Def(name, address(&line.operands_joined(2)?)?)
            }
            Ld => Opcode::Ld(arg(1)?),
            Sav => Opcode::Sav(arg(1)?),
            Add => Opcode::Add(arg(1)?),
            Sub => Opcode::Sub(arg(1)?),
            Mul => Opcode::Mul(arg(1)?),
            Div => Opcode::Div(arg(1)?),
            Cmp => Opcode::Cmp(arg(1)?),
            Setf => Opcode::Setf(flag()?),
            Rstf => Opcode::Rstf(flag()?),
            Proc => Opcode::Proc(arg(1)?),
            Endproc => Opcode::Endproc,
            Jmp => Opcode::Jmp(target()?),
            Jaz => Opcode::Jaz(line.tokens().get(1).cloned()),
            Jap => Opcode::Jap(line.tokens().get(1).cloned()),
            Jan => Opcode::Jan(line.tokens().get(1).cloned()),
            Dump => Opcode::Dump,
            Print => Opcode::Print,
            Help => Opcode::Help,
        })
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Begin => write!(f, "BEGIN"),
            End => write!(f, "END"),

            Def(s, a) => write!(f, "DEF({}, &{})", s, a),
            Ld(s) => write!(f, "LD({})", s),
            Sav(s) => write!(f, "SAV({})", s),

            Add(s) => write!(f, "ADD({})", s),
            Sub(s) => write!(f, "SUB({})", s),
            Mul(s) => write!(f, "MUL({})", s),
            Div(s) => write!(f, "DIV({})", s),
            Cmp(s) => write!(f, "CMP({})", s),

            Setf(flag) => write!(f, "SETF({})", flag),
            Rstf(flag) => write!(f, "RSTF({})", flag),

            Proc(s) => write!(f, "PROC({})", s),
            Endproc => write!(f, "ENDPROC"),

            Jmp(n) => write!(f, "JMP({})", n),
            Jaz(s) => write!(f, "JAZ({})", s.as_deref().unwrap_or("")),
            Jap(s) => write!(f, "JAP({})", s.as_deref().unwrap_or("")),
            Jan(s) => write!(f, "JAN({})", s.as_deref().unwrap_or("")),

            Dump => write!(f, "DUMP"),
            Print => write!(f, "PRINT"),
            Help => write!(f, "HELP"),
        }
    }
}
