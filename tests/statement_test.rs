mod common;
use common::*;

#[test]
fn test_let_then_print() {
    assert_eq!(exec("10 LET X = 5\n20 PRINT X"), "5\n");
}

#[test]
fn test_print_string_with_spaces() {
    assert_eq!(exec("10 PRINT \"HELLO WORLD\""), "HELLO WORLD\n");
}

#[test]
fn test_print_alone() {
    assert_eq!(exec("10 PRINT\n20 PRINT 1"), "\n1\n");
}

#[test]
fn test_unset_variable_is_zero() {
    assert_eq!(exec("10 PRINT Q"), "0\n");
}

#[test]
fn test_variables_are_case_sensitive() {
    assert_eq!(exec("10 LET a = 1\n20 LET A = 2\n30 PRINT a"), "1\n");
}

#[test]
fn test_keywords_any_case() {
    assert_eq!(exec("10 Let X = 3\n20 pRiNt X"), "3\n");
}

#[test]
fn test_goto_skips() {
    let source = "\
10 GOTO 30
20 PRINT \"THIS WILL NOT PRINT\"
30 PRINT \"THIS WILL PRINT\"";
    assert_eq!(exec(source), "THIS WILL PRINT\n");
}

#[test]
fn test_end_stops() {
    assert_eq!(exec("10 PRINT 1\n20 END\n30 PRINT 2"), "1\n");
}

#[test]
fn test_rem_does_nothing() {
    assert_eq!(exec("10 REM PRINT 1\n20 PRINT 2"), "2\n");
}

#[test]
fn test_quoted_name_prints_variable() {
    assert_eq!(exec("10 LET X = 9\n20 PRINT \"X\""), "9\n");
}

#[test]
fn test_endless_loop_keeps_running() {
    assert_eq!(
        exec("10 GOTO 10"),
        "\n5000 Execution cycles exceeded.\n"
    );
}
