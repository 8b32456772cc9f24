use anyhow::Result;
use clap::Parser;

use markpad::cli::{self, CliArgs};
use markpad::store::DocumentStore;

fn main() -> Result<()> {
    markpad::logging::init();

    let args = CliArgs::parse();
    let mut store = DocumentStore::open_default()?;
    cli::run(args, &mut store)
}
