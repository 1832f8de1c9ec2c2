use crate::mach::{compile, Event, Opcode, Program, Runtime, Val};


fn ops(source: &str) -> Vec<Opcode> {
    compile(source).unwrap().ops().to_vec()
}

fn run(program: Program) -> String {
    run_cycles(&mut Runtime::new(program), 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => break,
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
                break;
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => s.push_str(ps),
            Event::Trace(addr, ts) => s.push_str(&format!("[{}] {}\n", addr, ts)),
            Event::Input(ps) => {
                s.push_str(ps);
                break;
            }
        }
        prev_running = event == Event::Running;
    }
    s
}

fn lit(n: i64) -> Opcode {
    Opcode::Literal(Val::Integer(n))
}
