/*!
# Values and Types

Variables hold an integer or a string. A variable that was never
assigned reads as the integer 0. Variable names are any word that is
not an integer or a quoted string; `A`, `COUNT` and `X1` are all fine.

Integers are 64-bit. Arithmetic that overflows stops the program with
`OVERFLOW`. Division always gives a floating point result:

```text
10 LET X = 1 / 2
20 PRINT X
RUN
0.5
```

Text that looks like an integer is treated as one wherever a value
is used. `"5" = 5` is true, and `"5" + 1` is 6. Comparing text that
is not a number with a number is a `TYPE MISMATCH`. Two strings
added together are joined.

Comparisons produce -1 for true and 0 for false.

*/
