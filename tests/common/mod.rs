use bytebasic::mach::{compile, Event, Runtime};

pub fn exec(source: &str) -> String {
    exec_with_input(source, &[])
}

/// Runs `source`, answering `INPUT` prompts from `input` in order.
/// Stops at the first prompt once the answers run out.
pub fn exec_with_input(source: &str, input: &[&str]) -> String {
    let program = match compile(source) {
        Ok(program) => program,
        Err(error) => return format!("?{}\n", error),
    };
    let mut runtime = Runtime::new(program);
    exec_n(&mut runtime, 5000, input)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize, input: &[&str]) -> String {
    let mut s = String::new();
    let mut input = input.iter();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&ps);
            }
            Event::Trace(addr, ts) => {
                s.push_str(&format!("[{}] {}\n", addr, ts));
            }
            Event::Input(ps) => {
                s.push_str(&ps);
                match input.next() {
                    Some(line) => {
                        s.push_str(&format!("{}\n", line));
                        runtime.input(line).unwrap();
                    }
                    None => break,
                }
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}
