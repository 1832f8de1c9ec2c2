/*!
# `NEXT [<variable>]`

## Purpose
Closes the innermost `FOR` loop.

## Remarks
If a variable is given it must be the variable of the innermost
open `FOR`. Otherwise, or with no open `FOR` at all, the program
fails to compile with `NEXT WITHOUT FOR`.

## Example
```text
10 FOR X = 1 TO 2
20 FOR Y = 5 TO 6
30 PRINT Y
40 NEXT Y
50 NEXT X
```

*/
