/*!
# `REM <anything>`

## Purpose
A remark. Everything after `REM` is ignored.

## Example
```text
10 REM THIS PROGRAM DOES NOTHING
```

*/
