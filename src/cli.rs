//! Command line interface.

use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use itertools::Itertools;

use int_set::{console::Tokens, demo, expr_parser, Set};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Sets of integers with union, intersection and difference.",
    long_about = None
)]
pub struct Args {
    /// Logging level to use: one of "error", "warn", "info", "debug", "trace"
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read set A from standard input and print the set algebra walkthrough (default).
    Demo,
    /// Read a set from standard input and print its members.
    Members,
    /// Evaluate an expression such as "({1, 2} + {3}) & {2, 3}".
    Eval {
        /// `+` is union, `&` intersection, `-` difference.
        #[arg(value_name = "EXPR")]
        expr: String,
    },
}

/// Return command line args.
pub fn parse_args() -> Args {
    Args::parse()
}

/// Run the selected command against stdin/stdout.
pub fn run(args: &Args) -> Result<()> {
    let stdin = io::stdin();
    let mut tokens = Tokens::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        None | Some(Command::Demo) => demo::run(&mut tokens, &mut out)?,
        Some(Command::Members) => {
            let mut set = Set::new();
            set.input(&mut tokens, &mut out)?;
            match set.members() {
                Ok(members) => writeln!(out, "{}", members.iter().join(" "))?,
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    out.flush()?;
                    std::process::exit(1);
                }
            }
        }
        Some(Command::Eval { expr }) => {
            let set = expr_parser::evaluate(expr)?;
            writeln!(out, "{}", set)?;
        }
    }
    out.flush()?;
    Ok(())
}
