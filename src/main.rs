use std::{error::Error, fs};

use clap::{ArgAction, Parser};
use rustyline::{DefaultEditor, error::ReadlineError};
use shork::{parse, position::DEFAULT_FILENAME, tokenize};
use tracing_subscriber::EnvFilter;

/// shork parses Shork scripts and prints their syntax tree.
///
/// Without any contents, shork starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shork to treat the contents as a path to a script file.
    #[arg(short, long)]
    file: bool,

    /// Prints the token stream instead of the syntax tree.
    #[arg(long)]
    tokens: bool,

    /// Raises the log level; pass twice for trace output. `RUST_LOG` takes
    /// precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let Some(contents) = args.contents else {
        if let Err(e) = repl(args.tokens) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let (script, filename) = if args.file {
        let script = fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &contents);
            std::process::exit(1);
        });
        (script, contents)
    } else {
        (contents, DEFAULT_FILENAME.to_string())
    };

    match render(&script, &filename, args.tokens) {
        Ok(output) => println!("{output}"),
        Err(report) => {
            eprintln!("{report}");
            std::process::exit(1);
        },
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "shork=warn",
        1 => "shork=debug",
        _ => "shork=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_ansi(false)
                             .init();
}

/// Runs one script through the front end.
///
/// Returns the printed tokens or tree, or the rendered diagnostic.
fn render(script: &str, filename: &str, tokens_only: bool) -> Result<String, String> {
    if tokens_only {
        let tokens = tokenize(script, filename).map_err(|d| d.report())?;
        let shown: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        return Ok(format!("[{}]", shown.join(", ")));
    }

    parse(script, filename).map(|ast| ast.to_string())
                           .map_err(|d| d.report())
}

/// Reads one line at a time and prints what the front end makes of it.
/// Errors are printed and the loop continues.
fn repl(tokens_only: bool) -> Result<(), Box<dyn Error>> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("-> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                match render(&line, DEFAULT_FILENAME, tokens_only) {
                    Ok(output) => println!("{output}"),
                    Err(report) => eprintln!("{report}"),
                }
            },
            Err(ReadlineError::Interrupted) => println!(),
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(Box::new(e)),
        }
    }

    Ok(())
}
