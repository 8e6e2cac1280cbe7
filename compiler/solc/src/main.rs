//! Sol CLI
//!
//! `sol <file>` runs a program, `sol` alone starts the REPL.

use solc::commands::{format_file, parse_file, run_file, run_repl};

fn main() {
    solc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        run_repl();
        return;
    };

    match command.as_str() {
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: sol run <file.sol>");
                std::process::exit(1);
            };
            run_file(path);
        }
        "repl" => run_repl(),
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: sol parse <file.sol>");
                std::process::exit(1);
            };
            parse_file(path);
        }
        "fmt" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: sol fmt <file.sol>");
                std::process::exit(1);
            };
            format_file(path);
        }
        "help" | "--help" | "-h" => print_usage(),
        path if !path.starts_with('-') => run_file(path),
        unknown => {
            eprintln!("error: unknown option '{unknown}'");
            eprintln!();
            eprint_usage();
            std::process::exit(1);
        }
    }
}

const USAGE: &str = "\
Sol interpreter

Usage:
  sol                 Start the interactive REPL
  sol <file.sol>      Run a program
  sol run <file.sol>  Run a program
  sol repl            Start the interactive REPL
  sol parse <file>    Print the syntax tree
  sol fmt <file>      Print the file in canonical form
  sol help            Show this message

Environment:
  RUST_LOG            Enable tracing, e.g. RUST_LOG=sol_eval=trace
  SOL_MAX_CALL_DEPTH  Maximum nested function calls (default 1000)";

fn print_usage() {
    println!("{USAGE}");
}

fn eprint_usage() {
    eprintln!("{USAGE}");
}
