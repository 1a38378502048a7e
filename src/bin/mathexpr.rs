//! Command-line front end: parse one expression and print the tree

use clap::Parser as ClapParser;
use mathexpr::parse;
use std::process::ExitCode;

/// Parse a calculator expression and print the resulting tree
#[derive(ClapParser)]
#[command(name = "mathexpr", version, about)]
struct Args {
    /// The expression to parse
    expression: String,

    /// Print the tree structure instead of the re-serialized form
    #[arg(long)]
    tree: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match parse(&args.expression) {
        Ok(expression) => {
            if args.tree {
                println!("{:#?}", expression);
            } else {
                println!("{}", expression);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            let diagnostic = error.to_diagnostic();
            eprintln!("{}", diagnostic);
            ExitCode::FAILURE
        }
    }
}
