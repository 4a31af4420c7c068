//! The Anchor programming language compiler CLI.
//!
//! Reads a source file (or standard input when no file is given),
//! compiles it, and writes the result to standard output: the LLVM IR
//! dump for a clean program, or the accumulated diagnostics otherwise.

use std::io::Read;
use std::path::Path;

use clap::Parser;

mod diagnostics;

/// Command-line interface for the Anchor compiler.
#[derive(Parser)]
#[command(name = "anchor")]
#[command(about = "The Anchor programming language compiler", long_about = None)]
struct Cli {
    /// The source file to compile. Standard input is read when omitted.
    file: Option<String>,
}

/// Entry point for the Anchor compiler.
fn main() {
    let cli = Cli::parse();

    let (filename, source) = match read_input(cli.file.as_deref()) {
        Ok(input) => input,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };

    match anchor::compile(&source) {
        Ok(output) => println!("{}", output),
        Err(error) => {
            diagnostics::report_error(&filename, &source, &error);
            std::process::exit(1);
        }
    }
}

/// Reads the compilation input: the named file, or all of stdin.
fn read_input(file: Option<&str>) -> Result<(String, String), String> {
    match file {
        Some(path) => {
            if !Path::new(path).exists() {
                return Err(format!("Could not find file with name {}", path));
            }
            let source = std::fs::read_to_string(path)
                .map_err(|e| format!("Could not read file {}: {}", path, e))?;
            Ok((path.to_string(), source))
        }
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| format!("Could not read standard input: {}", e))?;
            Ok(("<stdin>".to_string(), source))
        }
    }
}
