//! facdb: command-line interface for facdb-core
//!
//! Loads a facility snapshot and answers one query per invocation.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ facdb -i data/airports.json stats
//!
//! - Look up by primary or alternate code (case-insensitive)
//!   $ facdb get KJFK
//!   $ facdb get lhr
//!
//! - Text search and autocomplete
//!   $ facdb search "international" --limit 10 --offset 10
//!   $ facdb suggest lon
//!
//! - Geography
//!   $ facdb nearby 51.47 -0.46 --radius 80
//!   $ facdb bbox 40 41 -75 -73
//!
//! - Grouping
//!   $ facdb countries
//!   $ facdb regions US
//!   $ facdb country GB
//!
//! Data source
//! -----------
//!
//! The snapshot comes from `--input <path>` or the `FACDB_SNAPSHOT`
//! environment variable. Files ending in `.gz` are decompressed on the fly.
//! Add `--json` to any command for machine-readable output.

use clap::Parser;
use facdb_cli::args::CliArgs;
use facdb_cli::logging::init_logging;
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    facdb_cli::run(args, &mut out)?;
    out.flush()?;

    Ok(())
}
