use crate::lang::Error;

/// Sink for diagnostic text. The machine only ever writes to it.
pub trait Log {
    fn log(&mut self, line: &str);

    fn error(&mut self, error: &Error) {
        self.log(&error.to_string())
    }
}

impl Log for Vec<String> {
    fn log(&mut self, line: &str) {
        self.push(line.to_string())
    }
}
