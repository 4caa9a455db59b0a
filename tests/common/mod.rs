use asm::lang::Error;
use asm::mach::{Event, Program, Runtime};

pub fn exec(source: &str) -> String {
    exec_result(source).0
}

pub fn exec_result(source: &str) -> (String, Result<Event, Error>) {
    let mut runtime = Runtime::default();
    exec_on(&mut runtime, source)
}

pub fn exec_on(runtime: &mut Runtime, source: &str) -> (String, Result<Event, Error>) {
    let program = match Program::from_source(source) {
        Ok(program) => program,
        Err(error) => return (format!("{}\n", error), Err(error)),
    };
    runtime.load(program);
    let mut log: Vec<String> = vec![];
    let result = runtime.run(&mut log);
    let mut s = String::new();
    for line in log {
        s.push_str(&format!("{}\n", line));
    }
    (s, result)
}
