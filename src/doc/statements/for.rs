/*!
# `FOR <variable> = x TO y [STEP z]`
Where x, y, and z are integers or variable names.
## Purpose
Used with `NEXT` to repeat execution of statements
while iterating over a sequence of numbers.

## Remarks
On the first iteration, x is assigned to the variable.
Statements execute until a `NEXT` statement, which adds z
(1 when there is no `STEP`) and goes around again while the
variable is less than or equal to y.

The first iteration always executes even if starting past the end.
The test is always "less than or equal", so a negative `STEP`
runs the body only once.

## Example
```text
10 FOR I = 1 TO 7 STEP 2
20 PRINT I
30 NEXT I
RUN
1
3
5
7
```

*/
