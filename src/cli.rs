use clap::{Args, Parser, Subcommand};

use hashpass::password::CostParams;

#[derive(Debug, Parser)]
#[command(name = "hashpass")]
#[command(about = "Hash passwords and check them against stored records")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Hash a password into a self-contained record printed on stdout
    Hash {
        /// Password to hash
        password: String,

        #[command(flatten)]
        cost: CostArgs,
    },

    /// Check a password against a record, printing `true` or `false`
    Check {
        /// Password to check
        password: String,

        /// Record produced earlier by `hash`
        record: String,
    },
}

/// Argon2id work factors for the `hash` command. `check` reads the factors
/// embedded in the record instead.
#[derive(Debug, Args)]
pub struct CostArgs {
    /// Memory cost in KiB
    #[arg(long, default_value_t = CostParams::default().memory_kib)]
    pub memory_kib: u32,

    /// Number of passes over the memory
    #[arg(long, default_value_t = CostParams::default().iterations)]
    pub iterations: u32,

    /// Number of parallel lanes
    #[arg(long, default_value_t = CostParams::default().parallelism)]
    pub parallelism: u32,
}

impl From<CostArgs> for CostParams {
    fn from(args: CostArgs) -> Self {
        Self {
            memory_kib: args.memory_kib,
            iterations: args.iterations,
            parallelism: args.parallelism,
        }
    }
}
