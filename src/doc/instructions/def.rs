/*!
# `def <name> <address>`

## Purpose
Creates a memory cell and gives it a name.

## Remarks
The address has the form `&<base>+<offset>`. The base is any word and
the offset is a decimal number. The address may be split by spaces or
wrapped in other text; `&vars + 3` and `(&vars+3)` are both offset 3.
Anything else is a `BAD ADDRESS` error.

A cell starts out empty. Reusing a name or an offset is a
`DUPLICATE DEFINITION` error.

## Example
```text
begin
def count &vars+0
def limit &vars+1
ld 10
sav limit
ld limit
print
ACC : "10"
```

*/
