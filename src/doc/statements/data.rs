/*!
# `DATA <item>[,<item>]`

## Purpose
`DATA` defines a list of constants to be read in sequentially.

## Remarks
The `READ` statement will load the next item into a variable.
Items are split on commas and trimmed. An item made only of digits
is an integer; anything else is a string, with surrounding quotes removed.
Every `DATA` line of the program feeds one table, in line order,
no matter where the lines are placed.
An `OUT OF DATA` error will occur when reading past the end.

## Example
```text
10 READ A, N
20 PRINT A
30 PRINT N
40 DATA "NUGGET", 3
RUN
NUGGET
3
```

*/
