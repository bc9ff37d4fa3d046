mod cli;

use anyhow::Result;

fn main() -> Result<()> {
    let args = cli::parse_args();

    // set up logger, kept off stdout so the printed sets stay untouched
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(args.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    cli::run(&args)
}
