//! # ASSEMBLER
//!
//! A toy assembly language with a single accumulator, named memory
//! cells, jumps by source line number and procedures.
//!
//! Run a program with `asm filename.asm`. With no file, `asm` reads
//! lines from the terminal and runs each one as it is entered.
//! ```text
//! # hello.asm
//! begin
//! ld hello
//! print
//! end
//! ```
//! ```text
//! $ asm hello.asm
//! ACC : "hello"
//! Reached end of program.
//! ```
//!
//! The chapters below cover the language. The `lang` and `mach`
//! modules are the library for embedding the interpreter.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
