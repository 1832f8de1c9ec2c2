/*!
# `INPUT <variable>`

## Purpose
Reads one line typed by the user into a variable.

## Remarks
The prompt is the variable name followed by `? `.
A line that parses as an integer is stored as an integer;
anything else is stored as text. Input ending before the
line is typed stops the program with `INPUT PAST END`.

## Example
```text
10 INPUT N
20 PRINT N
RUN
N? 42
42
```

*/
