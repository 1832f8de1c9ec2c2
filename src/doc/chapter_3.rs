/*!
# Bytecode

`basc` writes a program as a JSON array of instructions. Each
instruction is an array of its name and, for some, one operand.

```text
10 LET X = 5
20 PRINT X
```

compiles to

```text
[["LOAD_CONST",5],["STORE_VAR","X"],["LOAD_VAR","X"],["PRINT"]]
```

| Instruction           | Operand   | Effect                                   |
|-----------------------|-----------|------------------------------------------|
| `LOAD_CONST`          | value     | push the value                           |
| `LOAD_VAR`            | name      | push a variable                          |
| `STORE_VAR`           | name      | pop into a variable                      |
| `PRINT`               |           | pop and print                            |
| `INPUT`               | name      | read a line into a variable              |
| `READ_VAR`            | name      | next `DATA` item into a variable         |
| `DATA`                | value     | one `DATA` item, does nothing when run   |
| `ADD` `SUB` `MUL` `DIV` |         | pop two, push the result                 |
| `COMPARE_EQ` `COMPARE_NE` `COMPARE_LT` `COMPARE_GT` `COMPARE_LE` `COMPARE_GE` | | pop two, push -1 or 0 |
| `JUMP`                | address   | continue at the address                  |
| `JUMP_IF_TRUE`        | address   | pop, continue at the address if true     |
| `JUMP_IF_TRUE_RETURN` |           | pop, return from `GOSUB` if true         |
| `GOSUB`               | address   | call the address                         |
| `RETURN`              |           | return to the caller                     |
| `LABEL`               | number    | a branch destination                     |
| `NOP`                 |           | nothing                                  |
| `END`                 |           | stop                                     |

Addresses count instructions from 0. A branch address past the end
of the program refers to the `LABEL` carrying that number instead.
Unknown names fail to load with `UNKNOWN INSTRUCTION`; other damage
to the document is `ILLEGAL BYTECODE`.

*/
