mod common;
use asm::lang::ErrorCode;
use asm::mach::{Event, Runtime};
use common::*;

#[test]
fn test_store_and_add() {
    let (s, result) = exec_result(
        "begin\n\
         def x &vars+0\n\
         ld 5\n\
         sav x\n\
         ld x\n\
         add 3\n\
         print\n\
         end",
    );
    assert_eq!(result, Ok(Event::Halted));
    assert_eq!(s, "ACC : \"8\"\n");
}

#[test]
fn test_greet_procedure() {
    let mut r = Runtime::default();
    let (s, result) = exec_on(
        &mut r,
        "# say hello\n\
         procdef greet\n\
         print\n\
         endproc\n\
         \n\
         begin\n\
         ld hello\n\
         proc greet\n\
         ld again\n\
         proc greet\n\
         end\n\
         ld never",
    );
    assert_eq!(result, Ok(Event::Halted));
    assert_eq!(s, "ACC : \"hello\"\nACC : \"again\"\n");
    assert_eq!(r.accumulator(), "again");
    assert_eq!(r.call_depth(), 0);
}

#[test]
fn test_factorial() {
    let s = exec(
        "# 5! with a loop\n\
         begin\n\
         def n &vars+0\n\
         def acc &vars+1\n\
         ld 5\n\
         sav n\n\
         ld 1\n\
         sav acc\n\
         # loop starts on line 10\n\
         ld acc\n\
         mul n\n\
         sav acc\n\
         ld n\n\
         sub 1\n\
         sav n\n\
         jap 10\n\
         ld acc\n\
         print\n\
         end",
    );
    assert_eq!(s, "ACC : \"120\"\n");
}

#[test]
fn test_nothing_runs_before_begin() {
    let (s, result) = exec_result("print\nbegin");
    assert_eq!(result.map_err(|e| e.code()), Err(ErrorCode::NoBegin));
    assert_eq!(s, "NO BEGIN IN 1; print\n");
}

#[test]
fn test_indented_source() {
    let s = exec("begin\n    ld 1\n\tprint\nend");
    assert_eq!(s, "ACC : \"1\"\n");
}
