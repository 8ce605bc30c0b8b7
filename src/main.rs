// basic CLI, feeds lines to the tokenizer or the parser and prints the result

use anyhow::{Context, Result};
use basic_front::ast::Statement;
use basic_front::diagnostics::{print_lex_errors, print_parse_error};
use basic_front::lexer_tokenizer::{LexError, lex_with_span};
use basic_front::parse_source;
use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(ClapParser)]
#[command(name = "basic", version = VERSION, about = "Tokenizer and parser for BASIC-style statements")]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tokens of each input line
    Lex {
        /// Source file, read line by line from stdin when omitted
        file: Option<PathBuf>,
    },
    /// Print the syntax tree of each input line
    Parse {
        /// Source file, one statement per line; stdin when omitted
        file: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Tuple)]
        format: Format,
    },
    /// Parse every line of a file and report the ones that fail
    Check { file: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// ('add', ('num', 1), ('num', 2))
    Tuple,
    /// Rust debug form
    Debug,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    match cli.command {
        Command::Lex { file: Some(path) } => {
            let code = read_source(&path)?;
            lex_line(&code);
            Ok(ExitCode::SUCCESS)
        }
        Command::Lex { file: None } => {
            interactive("Lexer >> ", lex_line)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Parse {
            file: Some(path),
            format,
        } => {
            let code = read_source(&path)?;
            for line in code.lines().filter(|l| !l.trim().is_empty()) {
                parse_line(line, format);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Parse { file: None, format } => {
            interactive("Parse >> ", |line| parse_line(line, format))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { file } => check(&file),
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Source not found: {}", path.display()))
}

// Reads stdin until EOF, empty lines are skipped
fn interactive(prompt: &str, mut handle: impl FnMut(&str)) -> Result<()> {
    let show_prompt = Term::stdout().is_term();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if show_prompt {
            print!("{}", style(prompt).cyan().bold());
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if !line.trim().is_empty() {
            handle(&line);
        }
    }
    Ok(())
}

fn lex_line(code: &str) {
    let (tokens, errors) = lex_with_span(code);
    print_lex_errors(&errors, code);
    for token in tokens {
        println!("{}", token);
    }
}

fn parse_line(code: &str, format: Format) {
    let mut lex_errors = Vec::new();
    let result = parse_source(code, &mut |err: LexError| lex_errors.push(err));
    print_lex_errors(&lex_errors, code);
    match result {
        Ok(tree) => print_tree(&tree, format),
        Err(err) => print_parse_error(&err, code),
    }
}

fn print_tree(tree: &Statement, format: Format) {
    match format {
        Format::Tuple => println!("{}", tree),
        Format::Debug => println!("{:#?}", tree),
    }
}

// Batch mode: every non-empty line must parse without lexical or syntax errors
fn check(path: &Path) -> Result<ExitCode> {
    let code = read_source(path)?;
    let lines: Vec<(usize, &str)> = code
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| (i + 1, l))
        .collect();

    println!(
        "{} {} {}",
        style("basic check").cyan().bold(),
        style("•").white().bold(),
        style(path.display()).yellow().bold()
    );

    let bar = ProgressBar::new(lines.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("PIPELINE [{bar:40.green}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("━━-"),
    );

    let mut failed = 0usize;
    for (line_num, line) in &lines {
        bar.set_message(format!("line {}", line_num));
        let mut lex_errors = Vec::new();
        let result = parse_source(line, &mut |err: LexError| lex_errors.push(err));
        if !lex_errors.is_empty() || result.is_err() {
            failed += 1;
            bar.suspend(|| {
                eprintln!("{}", style(format!("{}:{}", path.display(), line_num)).bold());
                print_lex_errors(&lex_errors, line);
                if let Err(err) = &result {
                    print_parse_error(err, line);
                }
            });
        }
        bar.inc(1);
    }
    bar.finish_with_message("done");

    println!();
    if failed == 0 {
        println!(
            "{} {} statements parsed successfully!",
            style("✔").green().bold(),
            lines.len()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} {} of {} statements failed",
            style("✘").red().bold(),
            failed,
            lines.len()
        );
        Ok(ExitCode::FAILURE)
    }
}
