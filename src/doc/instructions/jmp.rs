/*!
# `jmp <line>`, `jaz <line>`, `jap <line>`, `jan <line>`

## Purpose
Move execution to another line.

## Remarks
`jmp` always jumps. `jaz` jumps if the accumulator is zero, `jap` if it
is positive and `jan` if it is negative. A conditional jump that is
not taken never reads its line number, so it may be missing or wrong.

Lines are numbered from 1 at the top of the file, counting comments
and blank lines. Jumping past the last line ends the program. Jumping
to line 0 or below is an `UNDEFINED LINE` error.

## Example
```text
begin
ld 3
print
sub 1
jap 3
end
ACC : "3"
ACC : "2"
ACC : "1"
```

*/
