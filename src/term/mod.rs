extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::error;
use crate::lang::Error;
use crate::mach::{Event, Log, Program, Runtime};
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Terminal};
use std::io::ErrorKind;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const CYCLES: usize = 5000;

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let success = match std::env::args().nth(1) {
        Some(filename) => run_file(&filename, &interrupted),
        None => match main_loop(&interrupted) {
            Ok(success) => success,
            Err(error) => {
                eprintln!("{}", error);
                false
            }
        },
    };
    if !success {
        std::process::exit(1);
    }
}

fn run_file(filename: &str, interrupted: &AtomicBool) -> bool {
    let mut console = Console;
    let program = match load(filename) {
        Ok(program) => program,
        Err(error) => {
            console.error(&error);
            return false;
        }
    };
    let mut runtime = Runtime::default();
    runtime.load(program);
    match execute(&mut runtime, interrupted, &mut console) {
        Ok(_) => {
            println!("Reached end of program.");
            true
        }
        Err(_) => false,
    }
}

fn main_loop(interrupted: &AtomicBool) -> std::io::Result<bool> {
    let interface = Interface::new("asm")?;
    interface.set_prompt("> ")?;
    interface.write_fmt(format_args!("ASSEMBLER\nREADY.\n"))?;
    let mut runtime = Runtime::default();

    loop {
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => return Ok(true),
        };
        let mut screen = Screen {
            interface: &interface,
        };
        interrupted.store(false, Ordering::SeqCst);
        let event = enter_line(&mut runtime, &string, interrupted, &mut screen);
        interface.add_history_unique(string);
        if event == Some(Event::Halted) {
            interface.write_fmt(format_args!("Reached end of program.\n"))?;
            return Ok(true);
        }
    }
}

/// Appends one typed line and runs as far as the program goes. After a
/// fatal error the program is cleared and the next line starts over.
fn enter_line(
    runtime: &mut Runtime,
    line: &str,
    interrupted: &AtomicBool,
    log: &mut dyn Log,
) -> Option<Event> {
    if let Err(error) = runtime.enter(line) {
        log.error(&error);
        return None;
    }
    match execute(runtime, interrupted, log) {
        Ok(event) => Some(event),
        Err(_) => {
            runtime.load(Program::new());
            None
        }
    }
}

fn execute(
    runtime: &mut Runtime,
    interrupted: &AtomicBool,
    log: &mut dyn Log,
) -> Result<Event, Error> {
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(CYCLES, log)? {
            Event::Running => {}
            event => return Ok(event),
        }
    }
}

fn load(filename: &str) -> Result<Program, Error> {
    let source = match std::fs::read_to_string(filename) {
        Ok(source) => source,
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; filename)),
                _ => return Err(error!(InternalError; msg.as_str())),
            }
        }
    };
    Program::from_source(&source)
}

/// Diagnostics for a program run from a file.
struct Console;

impl Log for Console {
    fn log(&mut self, line: &str) {
        println!("{}", line);
    }

    fn error(&mut self, error: &Error) {
        println!("{}", Style::new().bold().paint(error.to_string()));
    }
}

/// Diagnostics for the interactive prompt.
struct Screen<'a, T: Terminal> {
    interface: &'a Interface<T>,
}

impl<'a, T: Terminal> Log for Screen<'a, T> {
    fn log(&mut self, line: &str) {
        let _ = self.interface.write_fmt(format_args!("{}\n", line));
    }

    fn error(&mut self, error: &Error) {
        let _ = self.interface.write_fmt(format_args!(
            "{}\n",
            Style::new().bold().paint(error.to_string())
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_lines(runtime: &mut Runtime, lines: &[&str], log: &mut Vec<String>) -> Option<Event> {
        let interrupted = AtomicBool::new(false);
        let mut event = None;
        for line in lines {
            event = enter_line(runtime, line, &interrupted, log);
        }
        event
    }

    #[test]
    fn test_prompt_runs_each_line() {
        let mut runtime = Runtime::default();
        let mut log = vec![];
        let event = type_lines(&mut runtime, &["begin", "ld 3", "print"], &mut log);
        assert_eq!(event, Some(Event::Stopped));
        assert_eq!(log, vec!["ACC : \"3\""]);
    }

    #[test]
    fn test_prompt_survives_a_fatal_error() {
        let mut runtime = Runtime::default();
        let mut log = vec![];
        type_lines(&mut runtime, &["begin", "add x"], &mut log);
        assert_eq!(log, vec!["TYPE MISMATCH IN 2; \"\""]);
        assert!(runtime.program().is_empty());
        log.clear();
        let event = type_lines(&mut runtime, &["begin", "ld 9", "print", "end", "ld 1"], &mut log);
        assert_eq!(event, Some(Event::Halted));
        assert_eq!(log, vec!["ACC : \"9\""]);
    }

    #[test]
    fn test_prompt_rejects_long_line() {
        let mut runtime = Runtime::default();
        let mut log = vec![];
        let long = "9".repeat(crate::mach::MAX_LINE_LEN + 1);
        assert_eq!(type_lines(&mut runtime, &["begin", long.as_str()], &mut log), None);
        assert_eq!(log, vec!["LINE BUFFER OVERFLOW IN 2"]);
        assert_eq!(runtime.program().len(), 1);
    }
}
