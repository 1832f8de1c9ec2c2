/*!
# `GOSUB <line number>`

## Purpose
Calls a subroutine. `RETURN` resumes after the `GOSUB`.

## Remarks
Subroutines may call other subroutines. Return addresses are kept
on a call stack, so the innermost call returns first.
If `<line number>` doesn't exist the program will not compile
and an `UNDEFINED LINE` error is reported.

## Example
```text
10 GOSUB 100
20 PRINT "BACK"
30 END
100 PRINT "IN SUBROUTINE"
110 RETURN
RUN
IN SUBROUTINE
BACK
```

*/
