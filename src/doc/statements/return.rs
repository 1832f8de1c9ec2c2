/*!
# `RETURN`

## Purpose
Returns from a subroutine called with `GOSUB`.

## Remarks
A `RETURN` with no `GOSUB` pending stops the program with
`RETURN WITHOUT GOSUB`.

*/
