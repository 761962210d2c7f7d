use std::io::{self, Write};

use anyhow::{ensure, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use permcycle::{decompose, self_matching, SIZE_LIMIT};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
        std::process::exit(1);
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "permcycle",
    about = "Canonical cycle notation of small permutations, and the permutations that spell out their own."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decompose a permutation given in one-line notation, e.g. `cycles 4 2143`.
    Cycles {
        /// Size of the permutation (at most 9).
        #[arg(value_name = "N")]
        n: usize,
        /// The images of 1, 2, …, N written as one string of digits.
        #[arg(value_name = "PERM")]
        permutation: String,
    },
    /// List every permutation of size N whose one-line notation equals its
    /// canonical cycle notation without punctuation.
    Search {
        #[arg(value_name = "N")]
        n: usize,
        /// Only print the permutations, without the trailing count.
        #[arg(short, long)]
        quiet: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Cycles { n, permutation } => write_cycles(&mut out, n, &permutation),
        Command::Search { n, quiet } => write_search(&mut out, n, quiet),
    }
}

fn write_cycles(out: &mut impl Write, n: usize, permutation: &str) -> Result<()> {
    let decomposition = decompose(n, permutation)
        .with_context(|| format!("cannot read {permutation:?} as a permutation of size {n}"))?;

    writeln!(out, "permutation: {}", decomposition.one_line())?;
    writeln!(out, "cycles:")?;
    for cycle in &decomposition.cycles {
        writeln!(out, "  {cycle}")?;
    }
    writeln!(out, "canonical: {}", decomposition.notation.canonical)?;
    writeln!(out, "normalized: {}", decomposition.notation.normalized)?;
    writeln!(
        out,
        "self-matching: {}",
        if decomposition.is_self_matching() {
            "yes"
        } else {
            "no"
        }
    )?;
    Ok(())
}

fn write_search(out: &mut impl Write, n: usize, quiet: bool) -> Result<()> {
    ensure!(
        n < SIZE_LIMIT,
        "search size must be less than {SIZE_LIMIT}, got {n}"
    );

    let mut search = self_matching(n);
    let mut count = 0;
    for one_line in search.by_ref() {
        writeln!(out, "{one_line}")?;
        count += 1;
    }
    info!(n, examined = search.examined(), count, "search finished");

    if !quiet {
        writeln!(out, "count: {count}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use permcycle::ValidationError;

    use super::*;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> Result<String> {
        let mut buf = Vec::new();
        f(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn cycles_one_per_line() {
        let text = output(|out| write_cycles(out, 4, "4321")).unwrap();
        assert_eq!(
            text,
            "permutation: 4321\n\
             cycles:\n  (1 4)\n  (2 3)\n\
             canonical: (3 2)(4 1)\n\
             normalized: 3241\n\
             self-matching: no\n"
        );
    }

    #[test]
    fn cycles_rejects_bad_permutation() {
        let err = output(|out| write_cycles(out, 4, "123")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot read \"123\" as a permutation of size 4"
        );
        assert!(err.downcast_ref::<ValidationError>().is_some());
    }

    #[test]
    fn search_prints_count() {
        let text = output(|out| write_search(out, 4, false)).unwrap();
        assert_eq!(text, "1234\n1243\n1324\n2134\n2143\ncount: 5\n");
    }

    #[test]
    fn search_quiet_omits_count() {
        let text = output(|out| write_search(out, 3, true)).unwrap();
        assert_eq!(text, "123\n132\n213\n");
    }

    #[test]
    fn search_rejects_ten_or_more() {
        let err = output(|out| write_search(out, 10, false)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "search size must be less than 10, got 10"
        );
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["permcycle", "-vv", "search", "5", "--quiet"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Search { n: 5, quiet: true }));

        let cli = Cli::try_parse_from(["permcycle", "cycles", "3", "312"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Cycles { n: 3, ref permutation } if permutation == "312"
        ));
    }
}
