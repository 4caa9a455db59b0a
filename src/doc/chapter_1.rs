/*!
# Values, Memory and Flags

## Values

Every value is text. The accumulator starts out empty, and so does
each new memory cell. The arithmetic instructions `add`, `sub`, `mul`,
`div` and `cmp` read both the accumulator and their operand as 32-bit
signed integers. Text that is not a whole number causes a
`TYPE MISMATCH` error. A number outside the 32-bit range causes an
`OVERFLOW` error. Results of `add`, `sub` and `mul` that do not fit
wrap around.

```text
ld 2147483647
add 1
print
ACC : "-2147483648"
```

There is no floating point.

## Memory cells

`def <name> <address>` creates a memory cell. The address is written
as `&<base>+<offset>`, for example `&vars+4`. Spaces inside the
address are ignored, so `&vars + 4` is the same address. Only the
offset is kept, and only to label the cell in a `dump`. Cells are
always found by name.

Defining a name twice, or two names at the same offset, is a
`DUPLICATE DEFINITION` error.

## Operand lookup

When an instruction takes a value, the operand is first looked up as
a cell name. If a cell has that name, its contents are used. Otherwise
the operand itself is the value.

```text
def x &vars+0
ld 7
sav x
ld x
print
ACC : "7"
ld y
print
ACC : "y"
```

`sav` to a name that was never defined does nothing at all.

## Flags

Flags are switches addressed by number. `setf <n>` turns flag `n` on
and `rstf <n>` turns it off. There is one flag.

| Flag | Name | Effect |
|---|---|---|
| 0 | StringMode | Operands are never looked up as cell names |

A flag number outside the table is a `FLAG OUT OF RANGE` error.

```text
def x &vars+0
ld 7
sav x
setf 0
ld x
print
ACC : "x"
```

*/
