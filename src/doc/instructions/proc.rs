/*!
# `procdef <name>`, `proc <name>`, `endproc`

## Purpose
Defines and calls procedures.

## Remarks
A procedure is written before `begin`, starting with a `procdef` line
and ending with `endproc`. Lines in between are not run when the file
is first read.

`proc <name>` remembers where it was called from and continues with
the first line after the `procdef`. `endproc` returns to the line after
the most recent `proc`. Procedures may call each other and themselves.

Calling a name that was never defined is an `UNDEFINED PROCEDURE`
error. Reaching `endproc` without a `proc` is an
`ENDPROC WITHOUT PROC` error. Calls nested deeper than 65535 are an
`OUT OF MEMORY` error.

## Example
```text
procdef twice
mul 2
endproc

begin
ld 5
proc twice
proc twice
print
end
ACC : "20"
```

*/
