/*!
# Instructions

Instruction names are lower case and must be spelled exactly.
A line whose first word is not an instruction is reported as
`UNIDENTIFIED TOKEN ON LINE <n>` and skipped. Extra operands are
ignored.
*/

#[path = "instructions/begin.rs"]
#[allow(non_snake_case)]
pub mod BEGIN;

#[path = "instructions/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "instructions/def.rs"]
#[allow(non_snake_case)]
pub mod DEF;

pub mod LD {
    /*!
    ## `ld <value>` Loads a value into the accumulator.
    ```text
    ld 12
    print
    ACC : "12"
    ```
    */
}

pub mod SAV {
    /*!
    ## `sav <name>` Copies the accumulator into a memory cell.
    Nothing happens if no cell has that name.
    ```text
    def x &vars+0
    ld 12
    sav x
    ```
    */
}

pub mod ADD {
    /*!
    ## `add <value>` Adds a number to the accumulator.
    ```text
    ld 12
    add 3
    print
    ACC : "15"
    ```
    */
}

pub mod SUB {
    /*!
    ## `sub <value>` Subtracts a number from the accumulator.
    ```text
    ld 12
    sub 15
    print
    ACC : "-3"
    ```
    */
}

pub mod MUL {
    /*!
    ## `mul <value>` Multiplies the accumulator by a number.
    ```text
    ld 12
    mul 3
    print
    ACC : "36"
    ```
    */
}

pub mod DIV {
    /*!
    ## `div <value>` Divides the accumulator by a non-zero number.
    The quotient is rounded toward zero. Dividing by zero leaves the
    accumulator alone and reports error code 1, but the program keeps
    running.
    ```text
    ld 7
    div 2
    print
    ACC : "3"
    div 0
    Command "div" returned error code "1".
    ```
    */
}

pub mod CMP {
    /*!
    ## `cmp <value>` Replaces the accumulator with the sign of the difference.
    The result is `-1`, `0` or `1`, ready for a conditional jump.
    The sign is exact even when the difference does not fit in 32 bits,
    so `-2147483648` compared with `1` is `-1`. Earlier versions of the
    assembler subtracted first and gave `1` here.
    ```text
    ld 3
    cmp 8
    print
    ACC : "-1"
    ```
    */
}

pub mod SETF {
    /*!
    ## `setf <flag>` Turns a flag on.
    ```text
    setf 0
    ```
    */
}

pub mod RSTF {
    /*!
    ## `rstf <flag>` Turns a flag off.
    ```text
    rstf 0
    ```
    */
}

#[path = "instructions/proc.rs"]
#[allow(non_snake_case)]
pub mod PROC;

#[path = "instructions/jmp.rs"]
#[allow(non_snake_case)]
pub mod JMP;

pub mod DUMP {
    /*!
    ## `dump` Shows the accumulator, program counter, memory and flags.
    The program counter counts from 0.
    ```text
    begin
    def x &vars+4
    ld 11
    sav x
    dump
    ----- DUMP -----
    ACC   : 11
    PC    : 4
    DATA  :
    &4 "x" : 11
    FLAGS :
    StringMode : false
    --- END-DUMP ---
    ```
    */
}

pub mod PRINT {
    /*!
    ## `print` Shows the accumulator.
    ```text
    ld hello
    print
    ACC : "hello"
    ```
    */
}

pub mod HELP {
    /*!
    ## `help` Lists every instruction with a short description.
    */
}
