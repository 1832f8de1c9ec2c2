use super::*;

#[test]
fn test_lf() {
    let l = Line::new("10 END\n").unwrap();
    assert_eq!(l.number(), Some(10));
    assert_eq!(l.to_string(), "10 END");
}

#[test]
fn test_crlf() {
    let l = Line::new("20 RETURN\r\n").unwrap();
    assert_eq!(l.word().unwrap(), Some(Word::Return));
}

#[test]
fn test_leading_whitespace() {
    let l = Line::new("   30    PRINT X").unwrap();
    assert_eq!(l.number(), Some(30));
    assert_eq!(l.tokens().len(), 2);
}

#[test]
fn test_bad_line_number() {
    let e = Line::new("PRINT X").unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.column(), 0..5);
    let e = Line::new("70000 END").unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    let e = Line::new("10PRINT X").unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
}

#[test]
fn test_number_only() {
    let l = Line::new("40").unwrap();
    assert!(l.is_empty());
    assert_eq!(l.word().unwrap(), None);
}

#[test]
fn test_unknown_command() {
    let l = Line::new("50 WEND").unwrap();
    let e = l.word().unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.line_number(), Some(50));
    assert_eq!(e.column(), 3..7);
}

#[test]
fn test_text_after() {
    let l = Line::new(r#"60 DATA 1, "two", 3"#).unwrap();
    assert_eq!(l.text_after(&l.tokens()[0]), r#" 1, "two", 3"#);
}
