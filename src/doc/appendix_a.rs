/*!
# Error Messages

Errors stop the program. They name the line, counted from 1, and
usually the word that caused them.

```text
TYPE MISMATCH IN 3; "abc"
```

## NO BEGIN
An instruction other than `begin` came before `begin`.

## MISSING OPERAND
The instruction needs more words on its line.

## BAD ADDRESS
A `def` address is not of the form `&<base>+<offset>`.

## DUPLICATE DEFINITION
A `def` reused a name or an offset.

## UNDEFINED PROCEDURE
`proc` named a procedure that was not defined before `begin`.

## DUPLICATE PROCEDURE
Two procedures have the same name.

## ENDPROC WITHOUT PROC
`endproc` was reached without a matching `proc`.

## TYPE MISMATCH
Arithmetic, a jump target or a flag number was not a whole number.

## OVERFLOW
A number does not fit in 32 bits, or the smallest integer was divided by -1.

## FLAG OUT OF RANGE
`setf` or `rstf` named a flag that does not exist.

## UNDEFINED LINE
A jump went to line 0 or below.

## OUT OF MEMORY
Procedure calls nested too deeply.

## LINE BUFFER OVERFLOW
A line is longer than 1024 bytes.

## BREAK
CTRL-C stopped the program.

## FILE NOT FOUND
The program file does not exist.

# Warnings

These are reported and the program keeps running.

## UNIDENTIFIED TOKEN ON LINE n
The first word of a line is not an instruction.

## Command "div" returned error code "1".
Division by zero. The accumulator is unchanged.

*/
