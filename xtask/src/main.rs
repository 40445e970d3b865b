use clap::{Parser, ValueEnum};

mod account_sizes;
mod zero_bytes;

#[derive(Debug, Clone, ValueEnum)]
enum Hash {
    Keccak,
    Sha256,
}

#[derive(Parser)]
pub struct XtaskOptions {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Prints the account space needed by every supported tree size.
    AccountSizes,
    /// Generates the table of empty subtree roots for the given hash.
    GenerateZeroBytes(zero_bytes::Options),
}

fn main() -> Result<(), anyhow::Error> {
    let opts = XtaskOptions::parse();

    match opts.command {
        Command::AccountSizes => account_sizes::account_sizes(),
        Command::GenerateZeroBytes(opts) => zero_bytes::generate_zero_bytes(opts),
    }
}
