/*!
# `PRINT [a]`

## Purpose
Prints a value followed by a newline.

## Remarks
`a` is an integer, a quoted string or a variable name.
A quoted string that names a variable prints that variable.
`PRINT` alone prints an empty line.

## Example
```text
10 PRINT "HELLO WORLD"
RUN
HELLO WORLD
```

*/
