//! Vyper diagnostic driver CLI.

use std::io;
use std::process;

use vy_diagnostic::RenderConfig;
use vyc::commands::{
    check_json_file, explain_kind, list_kinds, raise_file, DriverError, RaiseRequest,
};
use vyc::report::{
    catch_panics, report_diagnostic, report_driver_error, report_panic, EXIT_FAILURE,
};

fn main() {
    vyc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    // Configuration is read once and stays fixed for the whole run
    let config = match RenderConfig::from_env() {
        Ok(config) => config,
        Err(err) => process::exit(report_driver_error(&mut io::stderr(), &err.into())),
    };

    let code = match catch_panics(|| run(&args[1], &args[2..], &config)) {
        Ok(code) => code,
        Err(panic) => report_panic(&mut io::stderr(), &panic),
    };
    process::exit(code);
}

fn run(command: &str, rest: &[String], config: &RenderConfig) -> i32 {
    let mut stderr = io::stderr();

    match command {
        "raise" => match RaiseRequest::from_args(rest).and_then(|request| raise_file(&request)) {
            Ok(diag) => report_diagnostic(&mut stderr, &diag, config),
            Err(err) => report_driver_error(&mut stderr, &err),
        },
        "check-json" => {
            let Some(path) = rest.first() else {
                return report_driver_error(
                    &mut stderr,
                    &DriverError::Usage("vyc check-json <input.json>"),
                );
            };
            match check_json_file(path) {
                Ok(document) => {
                    println!("{path}: {} source(s) OK", document.sources.len());
                    0
                }
                Err(err) => report_driver_error(&mut stderr, &err),
            }
        }
        "kinds" => {
            print!("{}", list_kinds());
            0
        }
        "explain" => {
            let Some(name) = rest.first() else {
                return report_driver_error(&mut stderr, &DriverError::Usage("vyc explain <Kind>"));
            };
            match explain_kind(name) {
                Ok(text) => {
                    println!("{text}");
                    0
                }
                Err(err) => report_driver_error(&mut stderr, &err),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            EXIT_FAILURE
        }
    }
}

fn print_usage() {
    println!("vyc - Vyper diagnostic driver");
    println!();
    println!("Usage: vyc <command> [options]");
    println!();
    println!("Commands:");
    println!("  raise <file.vy> <Kind> <LINE[:COLUMN]> <message...>");
    println!("                      Render a diagnostic raised at a location");
    println!("  check-json <file>   Validate a JSON input document");
    println!("  kinds               List every diagnostic kind");
    println!("  explain <Kind>      Describe a diagnostic kind");
    println!("  help                Show this message");
    println!();
    println!("Environment:");
    println!("  VYPER_ERROR_CONTEXT_LINES   Context lines around errors (default 1)");
    println!("  VYPER_ERROR_LINE_NUMBERS    1 to number context lines (default 1)");
    println!("  RUST_LOG                    Enable debug logging (e.g. vyc=debug)");
}
