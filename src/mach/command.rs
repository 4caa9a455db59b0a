/// ## Command table
///
/// The fixed, ordered registry of instructions. Order is significant:
/// `begin` must sit at index 0 because it is the only instruction
/// allowed before the module has begun.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Begin,
    End,
    Def,
    Ld,
    Sav,
    Add,
    Sub,
    Mul,
    Div,
    Setf,
    Rstf,
    Proc,
    Endproc,
    Cmp,
    Jmp,
    Jaz,
    Jap,
    Jan,
    Dump,
    Print,
    Help,
}

#[derive(Debug)]
pub struct Command {
    mnemonic: Mnemonic,
    name: &'static str,
    description: &'static str,
}

macro_rules! command {
    ($mnemonic:ident, $name:expr, $description:expr) => {
        Command {
            mnemonic: Mnemonic::$mnemonic,
            name: $name,
            description: $description,
        }
    };
}

static COMMANDS: [Command; 21] = [
    command!(Begin, "begin", "Denotes the start of the module."),
    command!(End, "end", "Denotes the end of the module."),
    command!(Def, "def", "Defines an alias to a memory address."),
    command!(Ld, "ld", "Loads a value into accumulator."),
    command!(Sav, "sav", "Stores accumulated data into a memory address."),
    command!(Add, "add", "Adds a number to accumulator."),
    command!(Sub, "sub", "Subtracts a number from accumulator."),
    command!(Mul, "mul", "Multiplies a number to accumulator."),
    command!(Div, "div", "Divides the accumulator by a given non-zero number."),
    command!(Setf, "setf", "Sets a specified flag."),
    command!(Rstf, "rstf", "Resets a specified flag."),
    command!(
        Proc,
        "proc",
        "Calls a previously declared procedure. Create procedure with procdef <proc name>"
    ),
    command!(Endproc, "endproc", "Returns control to parent procedure."),
    command!(
        Cmp,
        "cmp",
        "Returns the sign of the difference between ACC and the given value."
    ),
    command!(Jmp, "jmp", "Jumps program control to the given line."),
    command!(Jaz, "jaz", "Jumps to the given line if ACC is zero."),
    command!(Jap, "jap", "Jumps to the given line if ACC is positive."),
    command!(Jan, "jan", "Jumps to the given line if ACC is negative."),
    command!(Dump, "dump", "Provides a dump of the current state of memory."),
    command!(Print, "print", "Logs accumulator value to the terminal."),
    command!(
        Help,
        "help",
        "Prints a list of available commands to the terminal."
    ),
];

impl Command {
    pub fn all() -> &'static [Command] {
        &COMMANDS
    }

    /// Case sensitive lookup by name.
    pub fn find(token: &str) -> Option<(usize, &'static Command)> {
        COMMANDS
            .iter()
            .enumerate()
            .find(|(_, command)| command.name == token)
    }

    pub fn mnemonic(&self) -> Mnemonic {
        self.mnemonic
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}\t{}", self.name, self.description)
    }
}
