// src/main.rs
use anyhow::Result;
use clap::Parser;

use noisecheckr::cli::{self, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    cli::init_logging(args.verbose);
    cli::run(&args)
}
