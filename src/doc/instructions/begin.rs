/*!
# `begin`

## Purpose
Marks the start of the module.

## Remarks
Nothing but comments, blank lines, unknown words and procedure
definitions may come before `begin`. Any other instruction ahead of it
is a `NO BEGIN` error. Procedure definitions must come before `begin`
because that is the only time they are collected. See [`proc`](../PROC/index.html).

## Example
```text
# comments are fine up here
begin
print
ACC : ""
```

*/
