use clap::{Parser, Subcommand};
use fluxo::prelude::*;

/// A flowchart-to-VisuAlg synthesis engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a saved flowchart document (JSON)
    document_path: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the synthesized VisuAlg program
    Code,
    /// Print the symbolic trace table (teste de mesa)
    Trace,
    /// Print the inferred variable table
    Vars,
}

fn main() {
    let cli = Cli::parse();

    let document = Document::from_file(&cli.document_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load document '{}': {}",
            &cli.document_path, e
        ))
    });
    let chart = document
        .into_chart()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to build chart: {}", e)));

    match cli.command {
        Command::Code => {
            let code = synthesize(&chart)
                .unwrap_or_else(|e| exit_with_error(&format!("Synthesis failed: {}", e)));
            print!("{}", code);
        }
        Command::Trace => {
            let trace = build_trace(&chart)
                .unwrap_or_else(|e| exit_with_error(&format!("Trace failed: {}", e)));
            print!("{}", trace);
        }
        Command::Vars => {
            let table = infer_variables(&chart);
            if table.is_empty() {
                println!("No variables declared");
            } else {
                for variable in table.iter() {
                    println!("{}: {}", variable.name, variable.kind);
                }
            }
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
