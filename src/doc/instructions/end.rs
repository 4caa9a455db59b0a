/*!
# `end`

## Purpose
Marks the end of the module.

## Remarks
The program stops at the next line that holds an instruction.
Comments and blank lines after `end` are passed over first.

## Example
```text
begin
ld 1
end
# still read
print
```
Nothing is printed.

*/
