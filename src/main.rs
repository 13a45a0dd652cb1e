use std::env;
use std::fs;
use std::io::{self, Write};

use rootscore::{Interpreter, StdoutWriter};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "--version" | "-v" => {
            println!("rootscore {}", env!("CARGO_PKG_VERSION"));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "repl" => {
            run_repl();
        }
        filename => {
            if let Err(e) = run_file(filename) {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run_file(filename: &str) -> Result<(), String> {
    let src =
        fs::read_to_string(filename).map_err(|e| format!("Failed to read file: {}", e))?;
    let mut interpreter = Interpreter::new(StdoutWriter);
    interpreter.run(&src).map_err(|e| e.to_string())
}

fn run_repl() {
    let mut interpreter = Interpreter::new(StdoutWriter);

    loop {
        print!(">>> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim_end_matches(['\r', '\n']);

        if line == ":exit" || line == ":quit" {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        // Each submitted line is a complete run with a fresh variable
        // table; bindings do not survive to the next prompt.
        if let Err(e) = interpreter.run(line) {
            eprintln!("{}", e);
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  rootscore <file.rt>");
    eprintln!("  rootscore repl");
    eprintln!("  rootscore --version");
    eprintln!("  rootscore help");
}
