use std::io::{self, BufRead, Write};

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use simplelog::LevelFilter;

use truth_table::ops::SYMBOLS;
use truth_table::{TableOptions, TruthTable};

#[derive(Parser, Debug)]
#[command(name = "truth-table")]
#[command(about = "Print the truth table of a boolean expression, with a column per subexpression", long_about = None)]
#[command(after_help = "Operators (tightest first): ~ ∧ ∨ ⊕ ↓ ⊽ ↑ → ↔")]
struct Cli {
    /// Expression, e.g. "~a ∧ (b → c)". Read line by line from stdin if omitted.
    expression: Option<String>,

    /// Refuse expressions with more variables than this
    #[arg(long, default_value_t = 12)]
    max_vars: usize,

    /// Spaces after the widest cell of each column
    #[arg(long, default_value_t = 2)]
    padding: usize,

    /// Header of the last column
    #[arg(long, default_value = "result")]
    result_label: String,

    /// Print the operator glyphs and exit
    #[arg(long)]
    operators: bool,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn options(&self) -> TableOptions {
        TableOptions::default()
            .with_max_variables(self.max_vars)
            .with_warn_variables(self.max_vars.min(10))
            .with_padding(self.padding)
            .with_result_label(self.result_label.clone())
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    simplelog::TermLogger::init(
        cli.log_level(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    if cli.operators {
        let glyphs: Vec<String> = SYMBOLS.iter().map(|c| c.to_string()).collect();
        println!("{}", glyphs.join(" "));
        return Ok(());
    }

    let options = cli.options();

    match &cli.expression {
        Some(expression) => {
            let table = TruthTable::generate_with(expression, &options)
                .wrap_err_with(|| format!("Could not build the truth table of '{}'", expression))?;
            print!("{}", table);
        }
        None => {
            let stdin = io::stdin();
            let (total, failed) = run_lines(stdin.lock(), &mut io::stdout().lock(), &options)?;
            if failed > 0 {
                return Err(eyre!("{} of {} expressions failed", failed, total));
            }
        }
    }

    Ok(())
}

/// Print the table of every non-blank line of `input`.
///
/// Returns the number of expressions read and the number that failed. Each
/// failure is logged and does not stop the loop.
fn run_lines(input: impl BufRead, out: &mut impl Write, options: &TableOptions) -> Result<(usize, usize)> {
    let mut total = 0;
    let mut failed = 0;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        total += 1;
        match TruthTable::generate_with(&line, options) {
            Ok(table) => writeln!(out, "{}", table)?,
            Err(e) => {
                log::error!("{}: {}", line.trim(), e);
                failed += 1;
            }
        }
    }
    Ok((total, failed))
}
