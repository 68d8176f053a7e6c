use std::{
    error::Error,
    fs::read_to_string,
    io::{self, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use monkey::{
    lexer::lexer::{tokenize, Lexer},
    parser::parser::parse,
    render_error,
};

#[derive(Parser)]
#[command(name = "monkey")]
#[command(about = "Parses Monkey source and prints the resulting tree")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the token stream before parsing
    #[arg(short, long)]
    tokens: bool,

    /// Prompt shown before each REPL line
    #[arg(long, default_value = ">> ")]
    prompt: String,

    /// Parse a file instead of starting the REPL
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    match &cli.file {
        Some(path) => cmd_file(path, cli.tokens),
        None => cmd_repl(&cli.prompt, cli.tokens),
    }
}

fn cmd_file(path: &Path, show_tokens: bool) -> Result<(), Box<dyn Error>> {
    let source = read_to_string(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    info!(file = %file_name, bytes = source.len(), "parsing file");

    if !run(&source, Some(file_name), show_tokens) {
        return Err(format!("failed to parse {}", path.display()).into());
    }

    Ok(())
}

fn cmd_repl(prompt: &str, show_tokens: bool) -> Result<(), Box<dyn Error>> {
    println!("Monkey parser v{}", env!("CARGO_PKG_VERSION"));
    println!("Type a program to see its tree, or an empty line to skip");
    println!();

    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            // EOF
            break;
        }

        let input = input.trim_end();
        if input.is_empty() {
            continue;
        }

        run(input, None, show_tokens);
    }

    Ok(())
}

/// Parses one chunk of source and prints either the tree or every diagnostic.
/// Returns whether the parse was clean.
fn run(source: &str, file: Option<String>, show_tokens: bool) -> bool {
    if show_tokens {
        for token in tokenize(source, file.clone()) {
            println!("{:?} {:?}", token.kind, token.value);
        }
    }

    let (program, errors) = parse(Lexer::new(source, file));

    if errors.is_empty() {
        println!("{}", program);
        return true;
    }

    for error in &errors {
        eprintln!("{}", render_error(error, source));
        eprintln!();
    }

    false
}
