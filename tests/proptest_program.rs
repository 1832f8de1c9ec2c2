//! Property-based tests over generated programs.
//!
//! - Every linked branch lands inside the program
//! - The bytecode document round-trips exactly
//! - Integer arithmetic and comparisons agree with Rust's

mod common;

use bytebasic::mach::{compile, Program};
use common::exec;
use proptest::prelude::*;

const VARS: [&str; 4] = ["A", "B", "X", "COUNT"];
const COMPARE: [&str; 6] = ["<", ">", "=", "<=", ">=", "<>"];

#[derive(Debug, Clone)]
enum Stmt {
    Let(usize, i64),
    Print(usize),
    Goto(usize),
    If(usize, usize, i64, usize),
    IfReturn(usize, usize, i64),
    Gosub(usize),
    Return,
    Rem,
    End,
    Data(Vec<u32>),
    Read(usize),
}

fn arb_stmt() -> impl Strategy<Value = Stmt> {
    prop_oneof![
        (0..VARS.len(), any::<i64>()).prop_map(|(v, n)| Stmt::Let(v, n)),
        (0..VARS.len()).prop_map(Stmt::Print),
        any::<usize>().prop_map(Stmt::Goto),
        (0..VARS.len(), 0..COMPARE.len(), any::<i64>(), any::<usize>())
            .prop_map(|(v, op, n, t)| Stmt::If(v, op, n, t)),
        (0..VARS.len(), 0..COMPARE.len(), any::<i64>())
            .prop_map(|(v, op, n)| Stmt::IfReturn(v, op, n)),
        any::<usize>().prop_map(Stmt::Gosub),
        Just(Stmt::Return),
        Just(Stmt::Rem),
        Just(Stmt::End),
        prop::collection::vec(any::<u32>(), 1..4).prop_map(Stmt::Data),
        (0..VARS.len()).prop_map(Stmt::Read),
    ]
}

/// Numbers lines 10, 20, 30... and points every branch at one of them.
fn render(stmts: &[Stmt]) -> String {
    let line = |t: usize| (t % stmts.len() + 1) * 10;
    let mut source = String::new();
    for (i, stmt) in stmts.iter().enumerate() {
        let text = match stmt {
            Stmt::Let(v, n) => format!("LET {} = {}", VARS[*v], n),
            Stmt::Print(v) => format!("PRINT {}", VARS[*v]),
            Stmt::Goto(t) => format!("GOTO {}", line(*t)),
            Stmt::If(v, op, n, t) => format!(
                "IF {} {} {} THEN GOTO {}",
                VARS[*v],
                COMPARE[*op],
                n,
                line(*t)
            ),
            Stmt::IfReturn(v, op, n) => {
                format!("IF {} {} {} THEN RETURN", VARS[*v], COMPARE[*op], n)
            }
            Stmt::Gosub(t) => format!("GOSUB {}", line(*t)),
            Stmt::Return => "RETURN".to_string(),
            Stmt::Rem => "REM GENERATED".to_string(),
            Stmt::End => "END".to_string(),
            Stmt::Data(items) => {
                let items: Vec<String> = items.iter().map(|n| n.to_string()).collect();
                format!("DATA {}", items.join(", "))
            }
            Stmt::Read(v) => format!("READ {}", VARS[*v]),
        };
        source.push_str(&format!("{} {}\n", (i + 1) * 10, text));
    }
    source
}

fn arb_source() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_stmt(), 1..40).prop_map(|stmts| render(&stmts))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn jump_targets_are_in_bounds(source in arb_source()) {
        let p = compile(&source).unwrap();
        for op in p.ops() {
            if let Some(target) = op.target() {
                prop_assert!(target < p.len(), "{} in\n{}", op, p);
            }
        }
    }

    #[test]
    fn document_round_trips(source in arb_source()) {
        let p = compile(&source).unwrap();
        let json = p.to_json().unwrap();
        prop_assert_eq!(Program::from_json(&json).unwrap(), p);
    }

    #[test]
    fn integer_arithmetic(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        for (op, expected) in &[("+", a + b), ("-", a - b), ("*", a * b)] {
            let source = format!("10 LET R = {} {} {}\n20 PRINT R", a, op, b);
            prop_assert_eq!(exec(&source), format!("{}\n", expected));
        }
    }

    #[test]
    fn comparisons(a in -50i64..50, b in -50i64..50) {
        let expected = [a < b, a > b, a == b, a <= b, a >= b, a != b];
        for (op, truth) in COMPARE.iter().zip(expected.iter()) {
            let source = format!(
                "10 IF {} {} {} THEN GOTO 40\n20 PRINT 0\n30 END\n40 PRINT 1",
                a, op, b
            );
            let want = if *truth { "1\n" } else { "0\n" };
            prop_assert_eq!(exec(&source), want);
        }
    }
}
