// crates/facdb-cli/src/args.rs
use clap::{Parser, Subcommand};
use facdb_core::UnitSystem;
use std::convert::Infallible;
use std::path::PathBuf;

/// CLI arguments for facdb
#[derive(Debug, Parser)]
#[command(
    name = "facdb",
    version,
    about = "CLI for querying and inspecting a facdb-core facility snapshot"
)]
pub struct CliArgs {
    /// Path to the snapshot (.json or .json.gz)
    #[arg(short = 'i', long = "input", env = "FACDB_SNAPSHOT", global = true)]
    pub input: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log filter used when RUST_LOG is unset (e.g. debug, facdb_core=trace)
    #[arg(long = "log-level", default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog contents
    Stats,

    /// List countries with their record counts
    Countries,

    /// List regions within a country with their record counts
    Regions {
        /// Country code (e.g. US)
        country: String,
    },

    /// Look a facility up by primary or alternate code
    Get {
        /// Primary or alternate code, case-insensitive (e.g. KJFK, jfk)
        code: String,
    },

    /// Search codes, names and localities
    Search {
        query: String,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },

    /// Autocomplete suggestions (at least two characters)
    Suggest {
        query: String,
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Facilities near a point, nearest first
    Nearby {
        #[arg(allow_hyphen_values = true)]
        lat: f64,
        #[arg(allow_hyphen_values = true)]
        lon: f64,
        /// Search radius in kilometers
        #[arg(long)]
        radius: Option<f64>,
        #[arg(long)]
        limit: Option<usize>,
        /// Unit system for reported distances: metric, m, km or kilometers
        /// select kilometers; anything else reports miles
        #[arg(long, value_parser = parse_units, default_value = "imperial")]
        units: UnitSystem,
    },

    /// Facilities inside a lat/lon box
    Bbox {
        #[arg(allow_hyphen_values = true)]
        min_lat: f64,
        #[arg(allow_hyphen_values = true)]
        max_lat: f64,
        #[arg(allow_hyphen_values = true)]
        min_lon: f64,
        #[arg(allow_hyphen_values = true)]
        max_lon: f64,
    },

    /// List every facility by primary code
    List {
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },

    /// Facilities in a locality
    Locality { name: String },

    /// Facilities in a country
    Country { code: String },

    /// Facilities in a region
    Region { code: String },

    /// Dump the full primary code -> record mapping as JSON
    Export,
}

// Never rejects a value: unknown units fall back to imperial.
fn parse_units(raw: &str) -> Result<UnitSystem, Infallible> {
    Ok(UnitSystem::parse(raw))
}
