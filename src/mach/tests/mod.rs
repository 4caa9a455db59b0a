use crate::lang::{Error, ErrorCode};
use crate::mach::{Event, Program, Runtime};


fn runtime(source: &str) -> Runtime {
    let mut r = Runtime::default();
    r.load(Program::from_source(source).unwrap());
    r
}

fn run(r: &mut Runtime) -> (Vec<String>, Result<Event, Error>) {
    let mut log: Vec<String> = vec![];
    let result = r.run(&mut log);
    (log, result)
}

fn code(result: Result<Event, Error>) -> Option<ErrorCode> {
    result.err().map(|e| e.code())
}

#[test]
fn test_jump_to_line_one_restarts() {
    let mut r = runtime(
        "begin\n\
         ld 1\n\
         jmp 1\n",
    );
    let mut log: Vec<String> = vec![];
    assert_eq!(r.execute(3, &mut log), Ok(Event::Running));
    assert_eq!(r.program_counter(), 0);
}

#[test]
fn test_execute_stops_at_end_of_program() {
    let mut r = runtime("begin\nld 4\nprint");
    let (log, result) = run(&mut r);
    assert_eq!(result, Ok(Event::Stopped));
    assert_eq!(log, vec!["ACC : \"4\""]);
    assert_eq!(r.program_counter(), 3);
}

#[test]
fn test_entered_lines_continue_the_run() {
    let mut r = runtime("begin\nld 4");
    assert_eq!(run(&mut r).1, Ok(Event::Stopped));
    r.enter("add 1").unwrap();
    r.enter("print").unwrap();
    let (log, result) = run(&mut r);
    assert_eq!(result, Ok(Event::Stopped));
    assert_eq!(log, vec!["ACC : \"5\""]);
}

#[test]
fn test_interrupt() {
    let mut r = runtime("begin\njmp 2");
    let mut log: Vec<String> = vec![];
    assert_eq!(r.execute(100, &mut log), Ok(Event::Running));
    r.interrupt();
    let result = r.execute(100, &mut log);
    assert_eq!(code(result), Some(ErrorCode::Break));
    assert_eq!(log, vec!["BREAK IN 2"]);
}

#[test]
fn test_jump_before_first_line_is_fatal() {
    let mut r = runtime("begin\njmp 0");
    let (log, result) = run(&mut r);
    assert_eq!(code(result), Some(ErrorCode::UndefinedLine));
    assert_eq!(log, vec!["UNDEFINED LINE; 0"]);
}

#[test]
fn test_jump_past_last_line_stops() {
    let mut r = runtime("begin\njmp 99\nprint");
    let (log, result) = run(&mut r);
    assert_eq!(result, Ok(Event::Stopped));
    assert!(log.is_empty());
}

#[test]
fn test_load_resets_state() {
    let mut r = Runtime::with_accumulator("7");
    r.load(Program::from_source("begin\ndef x &vars+0\nld 1\nsetf 0").unwrap());
    run(&mut r).1.unwrap();
    assert_eq!(r.accumulator(), "1");
    assert!(r.is_begun());
    r.load(Program::from_source("print").unwrap());
    assert_eq!(r.accumulator(), "7");
    assert!(r.vars().is_empty());
    assert!(!r.is_begun());
    let (log, result) = run(&mut r);
    assert_eq!(code(result), Some(ErrorCode::NoBegin));
    assert_eq!(log, vec!["NO BEGIN IN 1; print"]);
}
