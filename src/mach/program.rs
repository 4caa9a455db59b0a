use super::{Address, MAX_LINE_LEN};
use crate::error;
use crate::lang::{Error, Line};

/// The tokenized source, one entry per line of text. Comments and
/// blank lines are kept so line numbers match the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn from_source(source: &str) -> Result<Program, Error> {
        let mut program = Program::new();
        for line in source.lines() {
            program.load_str(line)?;
        }
        Ok(program)
    }

    /// Appends one line of text. Errors carry the line number the
    /// text would have had.
    pub fn load_str(&mut self, line: &str) -> Result<(), Error> {
        if line.len() > MAX_LINE_LEN {
            return Err(error!(LineBufferOverflow, self.lines.len() + 1));
        }
        self.push(Line::new(line));
        Ok(())
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line)
    }

    pub fn line(&self, addr: Address) -> Option<&Line> {
        self.lines.get(addr)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<Vec<Line>> for Program {
    fn from(lines: Vec<Line>) -> Program {
        Program { lines }
    }
}
