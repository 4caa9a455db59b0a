/*!
# Introductory Tutorial

Programs are plain text, one instruction per line. Every line starts
with the name of an instruction, followed by its operands separated by
spaces. Lines starting with `#` are comments. Blank lines and comments
are skipped but still count when numbering lines, which matters because
jumps name their destination by line number.

Every program opens with `begin` and closes with `end`.

```text
begin
ld 40
add 2
print
end
```

Running this prints the accumulator.

```text
ACC : "42"
Reached end of program.
```

## The accumulator

There is exactly one register, the accumulator. `ld` puts a value in
it, the arithmetic instructions change it and `print` shows it. The
accumulator holds text. Arithmetic reads that text as a whole number,
so `ld hello` followed by `add 1` is an error while `ld hello` followed
by `print` is fine.

## Memory

`def` gives a name to a memory cell. `sav` copies the accumulator into
the cell and `ld` with the cell's name copies it back.

```text
begin
def total &vars+0
ld 5
sav total
ld 0
ld total
print
end
```

## Interactive use

Without a file name the interpreter reads from the terminal. Each line
you type is appended to the program and runs right away, so you can
build a program one line at a time. Jumps may go back to lines typed
earlier. Type CTRL-D to exit and CTRL-C to stop a runaway loop.

```text
ASSEMBLER
READY.
> begin
> ld 3
> print
ACC : "3"
> end
> print
Reached end of program.
```

*/
