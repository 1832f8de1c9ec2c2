/*!
# `LET <variable> = a [<op> b]`
Where `<op>` is one of `+`, `-`, `*`, `/`.

## Purpose
Assigns a value to a variable.

## Remarks
There are no expressions beyond one operator. Every word must be
separated by spaces: `LET A = B / 2`. Division always gives a
floating point result.

## Example
```text
10 LET A = 7
20 LET B = A / 2
30 PRINT B
RUN
3.5
```

*/
