use std::fs;
use std::process;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use lispet::{Value, eval, parse, parse_all, standard_env};

fn repl() {
    let env = standard_env();

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to start line editor: {e}");
            return;
        }
    };
    let history = dirs::home_dir().map(|home| home.join(".lispet_history"));
    if let Some(ref path) = history {
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(input);

                match parse(input).and_then(|expr| eval(expr, &env)) {
                    // define/set! results are suppressed
                    Ok(Value::Unspecified) => {}
                    Ok(result) => println!("{result}"),
                    Err(e) => eprintln!("Error: {e}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {e}");
                break;
            }
        }
    }

    if let Some(ref path) = history {
        let _ = rl.save_history(path);
    }
}

fn run_file(path: &str) -> Result<(), String> {
    let source =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file '{path}': {e}"))?;

    let env = standard_env();
    let mut last = Value::Unspecified;
    for expr in parse_all(&source).map_err(|e| e.to_string())? {
        last = eval(expr, &env).map_err(|e| e.to_string())?;
    }

    if last != Value::Unspecified {
        println!("{last}");
    }
    Ok(())
}

fn main() {
    env_logger::init();

    match std::env::args().nth(1) {
        Some(path) => {
            if let Err(e) = run_file(&path) {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        None => repl(),
    }
}
