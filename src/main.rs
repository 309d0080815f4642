// lextrace: token streams and LL(1) derivation traces for a toy language

mod parser;
mod scanner;
mod ui;

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use parser::machine::ParserSession;
use scanner::scanner::Scanner;
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("lextrace")
        .to_string();

    if args.len() < 2 {
        eprintln!("Error: No command provided");
        eprintln!();
        print_usage(&program_name);
        std::process::exit(1);
    }

    match args[1].as_str() {
        "scan" => {
            let file = require_file_arg(&args, &program_name);
            let source = fs::read_to_string(&file)?;
            run_scan(&source);
        }
        "parse" => {
            let symbols = match args.get(2) {
                Some(s) => s.clone(),
                None => {
                    eprintln!("Error: No symbol string provided");
                    eprintln!();
                    eprintln!("Usage: {} parse <symbols>", program_name);
                    eprintln!("Example: {} parse 'i+i*i#'", program_name);
                    std::process::exit(1);
                }
            };
            run_parse(&symbols);
        }
        "tui" => {
            let source = match args.get(2) {
                Some(file) => {
                    if !Path::new(file).exists() {
                        eprintln!("Error: File '{}' not found", file);
                        std::process::exit(1);
                    }
                    Some((file.clone(), fs::read_to_string(file)?))
                }
                None => None,
            };
            run_tui(source)?;
        }
        other => {
            eprintln!("Error: Unknown command '{}'", other);
            eprintln!();
            print_usage(&program_name);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <command> [args]", program_name);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  scan <file>       Tokenize a source file and print the tokens");
    eprintln!("  parse <symbols>   Parse a symbol string (ending in #) and print the trace");
    eprintln!("  tui [file]        Open the interactive viewer, optionally scanning a file");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} scan demos/sample.src", program_name);
    eprintln!("  {} parse 'i+i*i#'", program_name);
    eprintln!("  {} tui demos/sample.src", program_name);
}

fn require_file_arg(args: &[String], program_name: &str) -> String {
    let file = match args.get(2) {
        Some(f) => f.clone(),
        None => {
            eprintln!("Error: No input file provided");
            eprintln!();
            eprintln!("Usage: {} scan <file>", program_name);
            std::process::exit(1);
        }
    };

    if !Path::new(&file).exists() {
        eprintln!("Error: File '{}' not found", file);
        std::process::exit(1);
    }

    file
}

/// Tokenize the source and print one token per line. A lexical error stops
/// the scan after reporting the tokens seen so far.
fn run_scan(source: &str) {
    let mut scanner = Scanner::new(source);
    let mut count = 0usize;

    loop {
        match scanner.scan() {
            Ok(Some(token)) => {
                println!(
                    "{:>4}:{:<4} {}",
                    token.location.line, token.location.column, token
                );
                count += 1;
            }
            Ok(None) => break,
            Err(error) => {
                eprintln!("{}", error);
                std::process::exit(1);
            }
        }
    }

    eprintln!("{} token(s).", count);
}

/// Run the predictive parser and print the derivation trace table and the
/// verdict.
fn run_parse(symbols: &str) {
    let mut session = ParserSession::new(symbols);
    let verdict = session.parse();
    let trace = session.trace();

    if trace.is_empty() {
        println!("{} is {} (input must end with #)", symbols, verdict);
        return;
    }

    let stack_width = trace
        .iter()
        .map(|e| e.stack_display().chars().count())
        .max()
        .unwrap_or(0)
        .max(5);
    let input_width = trace
        .iter()
        .map(|e| e.remaining.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);

    println!(
        "{:<4}  {:<sw$}  {:<iw$}  {}",
        "Step",
        "Stack",
        "Input",
        "Action",
        sw = stack_width,
        iw = input_width
    );
    for entry in trace {
        println!(
            "{:<4}  {:<sw$}  {:<iw$}  {}",
            entry.step,
            entry.stack_display(),
            entry.remaining,
            entry.action,
            sw = stack_width,
            iw = input_width
        );
    }

    println!();
    println!("{} is {}", symbols, verdict);
}

/// Open the interactive token/trace viewer.
fn run_tui(source: Option<(String, String)>) -> Result<(), Box<dyn std::error::Error>> {
    let (source_name, source_text) = match source {
        Some((name, text)) => (Some(name), Some(text)),
        None => (None, None),
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(source_name, source_text.as_deref());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
