/*!
# `IF a <op> b THEN GOTO <line number>`
# `IF a <op> b THEN RETURN`
Where `<op>` is one of `<`, `>`, `=`, `<=`, `>=`, `<>`.

## Purpose
Branch or return from a subroutine when a comparison is true.

## Remarks
The operands are integers, quoted strings or variable names, and
each must be a separate word. A string that looks like an integer
compares as that integer; comparing other text with a number is a
`TYPE MISMATCH`.

## Example
```text
10 LET N = 0
20 LET N = N + 1
30 IF N < 3 THEN GOTO 20
40 PRINT N
RUN
3
```

*/
