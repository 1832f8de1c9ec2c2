/*!
# Errors

Errors print as `?` and the error name, followed by where it happened.
Compile errors give the line number and the columns of the statement.
Runtime errors give the instruction address.

<pre><code>&nbsp;?UNDEFINED LINE IN 10 (8..10); NO LINE 99
&nbsp;?RETURN WITHOUT GOSUB AT 12
</code></pre>

| Code | Error                  |
|------|------------------------|
| 1    | `NEXT WITHOUT FOR`     |
| 2    | `SYNTAX ERROR`         |
| 3    | `RETURN WITHOUT GOSUB` |
| 4    | `OUT OF DATA`          |
| 6    | `OVERFLOW`             |
| 7    | `OUT OF MEMORY`        |
| 8    | `UNDEFINED LINE`       |
| 11   | `DIVISION BY ZERO`     |
| 13   | `TYPE MISMATCH`        |
| 24   | `INVALID JUMP TARGET`  |
| 25   | `UNKNOWN INSTRUCTION`  |
| 27   | `ILLEGAL BYTECODE`     |
| 28   | `BREAK`                |
| 51   | `INTERNAL ERROR`       |
| 53   | `FILE NOT FOUND`       |
| 57   | `DISK I/O ERROR`       |
| 62   | `INPUT PAST END`       |

*/
