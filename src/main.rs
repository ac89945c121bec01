//! Minimal CLI over the password primitive. Commands are intentionally small
//! and auditable: `hash` prints the record, `check` prints `true` or `false`,
//! and nothing else ever lands on stdout.

mod cli;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};
use hashpass::password::{self, CostParams};

// Exit codes: 0 on normal completion (a failed check still prints `false`
// and exits 0), 1 when hashing itself fails, 2 for usage errors via clap.
fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout stays clean for the record output.
    // Raise with RUST_LOG=debug to see command dispatch and cost profiles.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Hash { password, cost } => {
            let cost = CostParams::from(cost);
            tracing::debug!(
                memory_kib = cost.memory_kib,
                iterations = cost.iterations,
                parallelism = cost.parallelism,
                "hashing with cost profile"
            );
            let record = password::hash_password(&password, &cost)?;
            println!("{record}");
        }
        Command::Check { password, record } => {
            tracing::debug!("checking password against stored record");
            let matches = password::verify_password(&password, &record);
            println!("{matches}");
        }
    }
    Ok(())
}
