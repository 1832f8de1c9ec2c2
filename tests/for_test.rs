mod common;
use common::*;

#[test]
fn test_body_runs_three_times() {
    assert_eq!(
        exec("10 FOR I = 1 TO 3\n20 PRINT I\n30 NEXT I\n40 PRINT \"DONE\""),
        "1\n2\n3\nDONE\n"
    );
}

#[test]
fn test_step() {
    assert_eq!(
        exec("10 FOR I = 1 TO 7 STEP 2\n20 PRINT I\n30 NEXT"),
        "1\n3\n5\n7\n"
    );
}

#[test]
fn test_always_runs_once() {
    assert_eq!(exec("10 FOR I = 3 TO 0\n20 PRINT I\n30 NEXT I"), "3\n");
}

#[test]
fn test_negative_step_keeps_less_or_equal_test() {
    assert_eq!(
        exec("10 FOR I = 5 TO 1 STEP -1\n20 PRINT I\n30 NEXT I\n40 PRINT I"),
        "5\n4\n"
    );
}

#[test]
fn test_variable_bounds() {
    let source = "\
10 LET A = 2
20 LET B = 4
30 FOR I = A TO B
40 PRINT I
50 NEXT I";
    assert_eq!(exec(source), "2\n3\n4\n");
}

#[test]
fn test_nested() {
    let source = "\
10 FOR X = 1 TO 2
20 FOR Y = 5 TO 6
30 PRINT X
40 PRINT Y
50 NEXT Y
60 NEXT X";
    assert_eq!(exec(source), "1\n5\n1\n6\n2\n5\n2\n6\n");
}

#[test]
fn test_breaking_out_with_goto() {
    let source = "\
10 FOR I = 1 TO 9
20 IF I = 3 THEN GOTO 50
30 PRINT I
40 NEXT I
50 PRINT \"OUT\"";
    assert_eq!(exec(source), "1\n2\nOUT\n");
}

#[test]
fn test_next_without_for() {
    assert_eq!(exec("10 NEXT"), "?NEXT WITHOUT FOR IN 10 (3..7)\n");
}

#[test]
fn test_more_fors_than_nexts_compiles() {
    assert_eq!(exec("10 FOR I = 1 TO 3\n20 PRINT I"), "1\n");
}
