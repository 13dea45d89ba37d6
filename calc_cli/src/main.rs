//! # Calculator CLI Application
//!
//! Terminal adapter for the calculator engine. Three ways in:
//!
//! - `calc_cli 5 + 3 =` evaluates the button labels and prints the display
//! - `calc_cli` with no tokens reads one line of labels at a time
//! - `calc_cli --tui` opens a keypad screen driven by key presses
//!
//! Button labels are the ones on the keypad: digits, `.`, `+ - * / ^`, `=`,
//! `c`, `Backspace`, `sqrt`, `exp`, `sin`, `cos`, `tan`, `rad/deg`, `pi`, `e`.

mod tui;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use calc_core::input::parse_tokens;
use calc_core::{AngleMode, CalcError, CalcResult, Calculator, CalculatorSettings};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "calc_cli", version, about = "Terminal calculator")]
struct Args {
    /// Interpret trig arguments in degrees
    #[arg(long)]
    degrees: bool,

    /// Print the calculator state as JSON after each evaluation
    #[arg(long)]
    json: bool,

    /// Run the interactive keypad screen
    #[arg(long, conflicts_with = "tokens")]
    tui: bool,

    /// Button labels to evaluate, e.g. `5 + 3 =`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

impl Args {
    fn settings(&self) -> CalculatorSettings {
        let mode = if self.degrees {
            AngleMode::Degrees
        } else {
            AngleMode::Radians
        };
        CalculatorSettings::default().with_angle_mode(mode)
    }
}

/// Apply one line of button labels. Nothing is applied if any token is unknown.
fn run_line(calc: &mut Calculator, line: &str) -> CalcResult<()> {
    for intent in parse_tokens(line)? {
        calc.apply(intent);
    }
    Ok(())
}

fn print_state(calc: &Calculator) {
    if let Ok(json) = serde_json::to_string_pretty(calc.state()) {
        println!("{}", json);
    }
}

fn print_error(error: &CalcError) {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!("{}", json);
    }
}

fn repl(calc: &mut Calculator, json: bool) -> ExitCode {
    println!("Calculator - enter button labels separated by spaces, 'quit' to exit");
    println!("Mode: {}", calc.angle_mode());
    println!();

    loop {
        print!("[{}] > ", calc.display());
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }

        let line = input.trim();
        if matches!(line, "quit" | "exit") {
            return ExitCode::SUCCESS;
        }

        match run_line(calc, line) {
            Ok(()) => {
                println!("{}", calc.display());
                if json {
                    print_state(calc);
                }
            }
            Err(e) => print_error(&e),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let mut calc = Calculator::with_settings(args.settings());

    if args.tui {
        return match tui::run(calc) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    if args.tokens.is_empty() {
        return repl(&mut calc, args.json);
    }

    match run_line(&mut calc, &args.tokens.join(" ")) {
        Ok(()) => {
            println!("{}", calc.display());
            if args.json {
                print_state(&calc);
            }
            if calc.is_error() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}
