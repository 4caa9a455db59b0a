use super::{
    Address, Command, Flag, Flags, Flow, Log, Mnemonic, Opcode, Operation, Procedures, Program,
    Stack, Symbol, Var,
};
use crate::error;
use crate::lang::{Error, ErrorCode};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Lines processed per call of `execute` when running to completion.
const CYCLES: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The cycle budget ran out. Call `execute` again.
    Running,
    /// The program counter is past the last line.
    Stopped,
    /// An `end` took effect.
    Halted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    NotBegun,
    Begun,
    HaltScheduled,
}

/// ## Execution engine
///
/// Fetches one line per cycle. Before `begin`, lines are scanned only
/// to register procedure headers; bodies are skipped until their
/// `endproc`. After `end`, the next line that would run stops the
/// machine instead.
pub struct Runtime {
    program: Program,
    pc: Symbol,
    initial_accumulator: String,
    accumulator: String,
    flags: Flags,
    mode: Mode,
    in_procedure_definition: bool,
    vars: Var,
    procedures: Procedures,
    calls: Stack<Symbol>,
    interrupted: bool,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::with_accumulator("")
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn with_accumulator(accumulator: &str) -> Runtime {
        Runtime {
            program: Program::new(),
            pc: 0,
            initial_accumulator: accumulator.to_string(),
            accumulator: accumulator.to_string(),
            flags: Flags::default(),
            mode: Mode::NotBegun,
            in_procedure_definition: false,
            vars: Var::new(),
            procedures: Procedures::new(),
            calls: Stack::new(ErrorCode::EndprocWithoutProc, "CALL STACK"),
            interrupted: false,
        }
    }

    /// Replaces the program and resets every register for a fresh run.
    pub fn load(&mut self, program: Program) {
        self.program = program;
        self.pc = 0;
        self.accumulator = self.initial_accumulator.clone();
        self.flags = Flags::default();
        self.mode = Mode::NotBegun;
        self.in_procedure_definition = false;
        self.vars.clear();
        self.procedures.clear();
        self.calls.clear();
        self.interrupted = false;
    }

    /// Appends a line of source to the running program.
    pub fn enter(&mut self, line: &str) -> Result<()> {
        self.program.load_str(line)
    }

    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn accumulator(&self) -> &str {
        &self.accumulator
    }

    pub fn program_counter(&self) -> Symbol {
        self.pc
    }

    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn procedures(&self) -> &Procedures {
        &self.procedures
    }

    pub fn call_depth(&self) -> usize {
        self.calls.len()
    }

    pub fn is_begun(&self) -> bool {
        self.mode == Mode::Begun
    }

    pub fn is_halt_scheduled(&self) -> bool {
        self.mode == Mode::HaltScheduled
    }

    /// Runs until the program stops, halts or fails.
    pub fn run(&mut self, log: &mut dyn Log) -> Result<Event> {
        loop {
            match self.execute(CYCLES, log)? {
                Event::Running => continue,
                event => return Ok(event),
            }
        }
    }

    /// Processes at most `cycles` lines. A fatal error is written to
    /// `log` and returned; the run cannot continue after one.
    pub fn execute(&mut self, cycles: usize, log: &mut dyn Log) -> Result<Event> {
        let result = self.execute_cycles(cycles, log);
        if let Err(error) = &result {
            log.error(error);
        }
        result
    }

    fn execute_cycles(&mut self, cycles: usize, log: &mut dyn Log) -> Result<Event> {
        if self.interrupted {
            self.interrupted = false;
            return Err(match Address::try_from(self.pc) {
                Ok(addr) => error!(Break, addr + 1),
                Err(_) => error!(Break),
            });
        }
        for _ in 0..cycles {
            if let Some(event) = self.step(log)? {
                return Ok(event);
            }
        }
        Ok(Event::Running)
    }

    fn step(&mut self, log: &mut dyn Log) -> Result<Option<Event>> {
        let addr = match Address::try_from(self.pc) {
            Ok(addr) => addr,
            Err(_) => return Err(error!(UndefinedLine; &(self.pc + 1).to_string())),
        };
        if addr >= self.program.len() {
            return Ok(Some(match self.mode {
                Mode::HaltScheduled => Event::Halted,
                _ => Event::Stopped,
            }));
        }
        self.step_line(addr, log)
            .map_err(|error| error.in_line_number(addr + 1))
    }

    fn step_line(&mut self, addr: Address, log: &mut dyn Log) -> Result<Option<Event>> {
        let line = match self.program.line(addr) {
            Some(line) => line,
            None => return Err(error!(InternalError)),
        };
        if line.is_blank() {
            self.pc += 1;
            return Ok(None);
        }
        if self.mode == Mode::HaltScheduled {
            return Ok(Some(Event::Halted));
        }
        let found = Command::find(line.command());
        if self.mode == Mode::NotBegun {
            if line.is_procedure_header() {
                self.procedures.register(line.operand(1)?, addr)?;
                self.in_procedure_definition = true;
                self.pc += 1;
                return Ok(None);
            }
            if self.in_procedure_definition {
                if let Some((_, command)) = found {
                    if command.mnemonic() == Mnemonic::Endproc {
                        self.in_procedure_definition = false;
                    }
                }
                self.pc += 1;
                return Ok(None);
            }
        }
        let (index, command) = match found {
            Some(found) => found,
            None => {
                log.log(&format!(
                    "UNIDENTIFIED TOKEN ON LINE {}: \"{}\"",
                    addr + 1,
                    line.command()
                ));
                self.pc += 1;
                return Ok(None);
            }
        };
        if self.mode == Mode::NotBegun && index != 0 {
            return Err(error!(NoBegin; command.name()));
        }
        let opcode = Opcode::decode(command, line)?;
        let flow = self.dispatch(opcode, log)?;
        self.apply(command, flow, log)?;
        Ok(None)
    }

    fn apply(&mut self, command: &Command, flow: Flow, log: &mut dyn Log) -> Result<()> {
        match flow {
            Flow::Next => {}
            Flow::Status(code) => log.log(&format!(
                "Command \"{}\" returned error code \"{}\".",
                command.name(),
                code
            )),
            // One back for the 1-indexed line, one back for the increment below.
            Flow::Jump(line) => self.pc = (line as Symbol).saturating_sub(2),
            Flow::Call(entry) => {
                self.calls.push(self.pc)?;
                self.pc = entry as Symbol;
            }
            Flow::Return => self.pc = self.calls.pop()?,
            Flow::Halt => self.mode = Mode::HaltScheduled,
        }
        self.pc += 1;
        Ok(())
    }

    /// Variable contents for a bound name unless string mode is on.
    fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        if !self.flags.is_set(Flag::StringMode) {
            if let Some(value) = self.vars.read(token) {
                return value;
            }
        }
        token
    }

    /// The target is only read once the condition holds.
    fn jump_if(
        &self,
        command: &str,
        target: Option<String>,
        condition: fn(i32) -> bool,
    ) -> Result<Flow> {
        if !condition(Operation::integer(&self.accumulator)?) {
            return Ok(Flow::Next);
        }
        match target {
            Some(line) => Ok(Flow::Jump(Operation::integer(&line)?)),
            None => Err(error!(MissingOperand; command)),
        }
    }

    fn dispatch(&mut self, opcode: Opcode, log: &mut dyn Log) -> Result<Flow> {
        match opcode {
            Opcode::Begin => {
                self.mode = Mode::Begun;
                Ok(Flow::Next)
            }
            Opcode::End => Ok(Flow::Halt),
            Opcode::Def(name, address) => {
                self.vars.bind(address, &name)?;
                Ok(Flow::Next)
            }
            Opcode::Ld(arg) => {
                self.accumulator = self.resolve(&arg).to_string();
                Ok(Flow::Next)
            }
            Opcode::Sav(name) => {
                self.vars.write(&name, &self.accumulator);
                Ok(Flow::Next)
            }
            Opcode::Add(arg) => {
                self.accumulator = Operation::sum(&self.accumulator, self.resolve(&arg))?;
                Ok(Flow::Next)
            }
            Opcode::Sub(arg) => {
                self.accumulator = Operation::subtract(&self.accumulator, self.resolve(&arg))?;
                Ok(Flow::Next)
            }
            Opcode::Mul(arg) => {
                self.accumulator = Operation::multiply(&self.accumulator, self.resolve(&arg))?;
                Ok(Flow::Next)
            }
            Opcode::Div(arg) => {
                let quotient = Operation::divide(&self.accumulator, self.resolve(&arg))?;
                match quotient {
                    Some(quotient) => {
                        self.accumulator = quotient;
                        Ok(Flow::Next)
                    }
                    None => Ok(Flow::Status(1)),
                }
            }
            Opcode::Cmp(arg) => {
                self.accumulator = Operation::compare(&self.accumulator, self.resolve(&arg))?;
                Ok(Flow::Next)
            }
            Opcode::Setf(flag) => {
                self.flags.set(flag);
                Ok(Flow::Next)
            }
            Opcode::Rstf(flag) => {
                self.flags.reset(flag);
                Ok(Flow::Next)
            }
            Opcode::Proc(name) => Ok(Flow::Call(self.procedures.entry(&name)?)),
            Opcode::Endproc => Ok(Flow::Return),
            Opcode::Jmp(line) => Ok(Flow::Jump(line)),
            Opcode::Jaz(target) => self.jump_if("jaz", target, |n| n == 0),
            Opcode::Jap(target) => self.jump_if("jap", target, |n| n > 0),
            Opcode::Jan(target) => self.jump_if("jan", target, |n| n < 0),
            Opcode::Dump => {
                self.dump(log);
                Ok(Flow::Next)
            }
            Opcode::Print => {
                log.log(&format!("ACC : \"{}\"", self.accumulator));
                Ok(Flow::Next)
            }
            Opcode::Help => {
                help(log);
                Ok(Flow::Next)
            }
        }
    }

    fn dump(&self, log: &mut dyn Log) {
        log.log("----- DUMP -----");
        log.log(&format!("ACC   : {}", self.accumulator));
        log.log(&format!("PC    : {}", self.pc));
        log.log("DATA  : ");
        for var in self.vars.iter() {
            log.log(&format!(
                "&{} \"{}\" : {}",
                var.address(),
                var.name(),
                var.value()
            ));
        }
        log.log("FLAGS : ");
        for (flag, set) in self.flags.iter() {
            log.log(&format!("{} : {}", flag, set));
        }
        log.log("--- END-DUMP ---");
    }
}

fn help(log: &mut dyn Log) {
    log.log("-----------");
    log.log("LIST OF COMMANDS");
    log.log(&format!("Count: {}", Command::all().len()));
    for command in Command::all() {
        log.log(&command.to_string());
    }
    log.log("-----------");
}
