/*!
# `END`

## Purpose
Stops the program.

## Remarks
Running off the last line also stops the program, so `END` is
only needed to keep execution out of subroutines placed after it.

## Example
```text
10 GOSUB 100
20 END
100 PRINT "SUBROUTINE"
110 RETURN
```

*/
