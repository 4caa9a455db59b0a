mod common;
use asm::lang::ErrorCode;
use asm::mach::Event;
use common::*;

#[test]
fn test_jmp_skips_lines() {
    let s = exec(
        "begin\n\
         jmp 4\n\
         ld skipped\n\
         # lines are counted from the top of the file\n\
         ld landed\n\
         print",
    );
    assert_eq!(s, "ACC : \"landed\"\n");
}

#[test]
fn test_countdown_loop() {
    let (s, result) = exec_result(
        "begin\n\
         ld 3\n\
         print\n\
         sub 1\n\
         jap 3\n\
         end",
    );
    assert_eq!(result, Ok(Event::Halted));
    assert_eq!(s, "ACC : \"3\"\nACC : \"2\"\nACC : \"1\"\n");
}

#[test]
fn test_jaz_jap_jan() {
    let program = |value: &str| {
        format!(
            "begin\n\
             ld {}\n\
             jaz 7\n\
             jap 9\n\
             jan 11\n\
             \n\
             ld zero\n\
             jmp 12\n\
             ld positive\n\
             jmp 12\n\
             ld negative\n\
             print",
            value
        )
    };
    assert_eq!(exec(&program("0")), "ACC : \"zero\"\n");
    assert_eq!(exec(&program("5")), "ACC : \"positive\"\n");
    assert_eq!(exec(&program("-5")), "ACC : \"negative\"\n");
}

#[test]
fn test_cmp_then_branch() {
    let s = exec(
        "begin\n\
         def i &vars+0\n\
         ld 0\n\
         sav i\n\
         ld i\n\
         add 1\n\
         sav i\n\
         cmp 4\n\
         jan 5\n\
         ld i\n\
         print",
    );
    assert_eq!(s, "ACC : \"4\"\n");
}

#[test]
fn test_bad_jump_target_is_fatal() {
    let (s, result) = exec_result("begin\njmp top");
    assert_eq!(result.map_err(|e| e.code()), Err(ErrorCode::TypeMismatch));
    assert_eq!(s, "TYPE MISMATCH IN 2; \"top\"\n");
}

#[test]
fn test_conditional_jump_needs_a_number() {
    let (_, result) = exec_result("begin\nld word\njaz 1");
    assert_eq!(result.map_err(|e| e.code()), Err(ErrorCode::TypeMismatch));
}

#[test]
fn test_untaken_jump_ignores_its_target() {
    let (s, result) = exec_result("begin\nld 5\njaz later\njan\nprint");
    assert_eq!(result, Ok(Event::Stopped));
    assert_eq!(s, "ACC : \"5\"\n");
}

#[test]
fn test_taken_jump_needs_a_target() {
    let (s, result) = exec_result("begin\nld 5\njap later");
    assert_eq!(result.map_err(|e| e.code()), Err(ErrorCode::TypeMismatch));
    assert_eq!(s, "TYPE MISMATCH IN 3; \"later\"\n");
    let (s, _) = exec_result("begin\nld 5\njap");
    assert_eq!(s, "MISSING OPERAND IN 3; jap\n");
}
