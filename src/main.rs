// booltab: truth tables for boolean expressions

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::LevelFilter;
use ratatui::{Terminal, backend::CrosstermBackend};

use booltab::ui::App;
use booltab::{evaluate_all, parse, BooltabError};

#[derive(Parser, Debug)]
#[command(name = "booltab", version)]
#[command(about = "Print the truth table of a boolean expression")]
#[command(
    long_about = "Print the truth table of a boolean expression.\n\n\
    Variables are single letters. Operators: ! or ~ (not), * (and), ^ (xor), + (or).\n\
    Words on the command line are joined, so `booltab A + !B` works without quotes."
)]
struct Cli {
    /// Expression to evaluate, e.g. "A ^ C + !(A * C)"
    expression: Vec<String>,

    /// Open the interactive viewer (default when no expression is given)
    #[arg(short, long)]
    interactive: bool,

    /// Print the postfix form before the table
    #[arg(long)]
    postfix: bool,

    /// Skip the table and print only the classification
    #[arg(long)]
    no_table: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG still wins when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Print the table (or just its classification) for one expression
fn print_table(cli: &Cli, text: &str) -> Result<(), BooltabError> {
    let parsed = parse(text).map_err(|source| BooltabError::InvalidExpression {
        expression: text.trim().to_string(),
        source,
    })?;
    let table = evaluate_all(&parsed)?;

    if cli.postfix {
        println!("Postfix: {}", parsed.postfix_string());
    }
    if !cli.no_table {
        print!("{}", table);
    }
    println!("Classification: {}", table.classification());
    Ok(())
}

fn run_viewer(initial: String) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(initial);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let text = cli.expression.join(" ");

    if cli.interactive || text.trim().is_empty() {
        run_viewer(text)?;
        return Ok(ExitCode::SUCCESS);
    }

    match print_table(&cli, &text) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
