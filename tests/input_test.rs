mod common;
use bytebasic::mach::{compile, Runtime};
use common::*;

#[test]
fn test_prompt() {
    assert_eq!(exec("10 INPUT NAME"), "NAME? ");
}

#[test]
fn test_integer_input() {
    assert_eq!(
        exec_with_input("10 INPUT N\n20 LET M = N * 2\n30 PRINT M", &["21"]),
        "N? 21\n42\n"
    );
}

#[test]
fn test_text_input() {
    assert_eq!(
        exec_with_input("10 INPUT S\n20 PRINT S", &["HELLO WORLD"]),
        "S? HELLO WORLD\nHELLO WORLD\n"
    );
}

#[test]
fn test_input_compares_as_number() {
    let source = "\
10 INPUT N
20 IF N > 9 THEN GOTO 50
30 PRINT \"SMALL\"
40 END
50 PRINT \"BIG\"";
    assert_eq!(exec_with_input(source, &["10"]), "N? 10\nBIG\n");
}

#[test]
fn test_input_past_end() {
    let program = compile("10 INPUT N\n20 PRINT N").unwrap();
    let mut input: &[u8] = b"";
    let mut output: Vec<u8> = vec![];
    let e = Runtime::new(program)
        .run(&mut input, &mut output)
        .unwrap_err();
    assert_eq!(e.to_string(), "INPUT PAST END AT 0");
    assert_eq!(output, b"N? ");
}
