//! facdb-cli
//! =========
//!
//! Command-line interface for the `facdb-core` facility catalog.
//!
//! Basic usage:
//!
//! ```text
//! facdb --input data/airports.json stats
//! facdb get jfk
//! facdb search "heathrow" --limit 5
//! facdb nearby 40.64 -73.78 --radius 25 --units imperial
//! FACDB_SNAPSHOT=data/airports.json.gz facdb --json countries
//! ```
//!
//! The binary is a thin wrapper around [`run`]; the modules are public so the
//! command dispatch can be exercised without spawning a process.

pub mod args;
pub mod limits;
pub mod logging;
pub mod render;

use anyhow::{bail, Context};
use args::{CliArgs, Commands};
use facdb_core::{FacilityDb, FacilitySearch};
use render::Format;
use std::io::Write;

/// Loads the snapshot named by the arguments and executes one command.
pub fn run<W: Write>(args: CliArgs, out: &mut W) -> anyhow::Result<()> {
    let Some(path) = args.input else {
        bail!("no snapshot given: pass --input <path> or set FACDB_SNAPSHOT");
    };

    let db = FacilityDb::load_from_path(&path)
        .with_context(|| format!("loading snapshot {}", path.display()))?;

    execute(&db, args.command, Format::from_flag(args.json), out)
}

/// Dispatches one command against an already loaded database.
pub fn execute<W: Write>(
    db: &FacilityDb,
    command: Commands,
    format: Format,
    out: &mut W,
) -> anyhow::Result<()> {
    tracing::debug!(?command, "executing");

    match command {
        Commands::Stats => render::stats(out, format, &db.stats())?,

        Commands::Countries => render::counts(out, format, &db.countries())?,

        Commands::Regions { country } => {
            render::counts(out, format, &db.regions_in_country(&country))?
        }

        Commands::Get { code } => {
            let f = db.get_by_code(&code)?;
            render::facility(out, format, &f)?
        }

        Commands::Search {
            query,
            limit,
            offset,
        } => {
            let hits = db.search(&query, limits::page_limit(limit), offset);
            render::facilities(out, format, &hits)?
        }

        Commands::Suggest { query, limit } => {
            let hits = db.suggest(&query, limits::suggest_limit(limit))?;
            render::facilities(out, format, &hits)?
        }

        Commands::Nearby {
            lat,
            lon,
            radius,
            limit,
            units,
        } => {
            let hits = db.nearby_with_distance(
                lat,
                lon,
                limits::radius_km(radius),
                limits::nearby_limit(limit),
                units,
            );
            render::with_distance(out, format, &hits)?
        }

        Commands::Bbox {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        } => {
            let hits = db.in_bounding_box(min_lat, max_lat, min_lon, max_lon);
            render::facilities(out, format, &hits)?
        }

        Commands::List { limit, offset } => {
            let page = db.all(limits::page_limit(limit), offset);
            render::facilities(out, format, &page)?
        }

        Commands::Locality { name } => render::facilities(out, format, &db.by_locality(&name))?,

        Commands::Country { code } => render::facilities(out, format, &db.by_country(&code))?,

        Commands::Region { code } => render::facilities(out, format, &db.by_region(&code))?,

        // Always JSON: the output is meant to be fed back in as a snapshot.
        Commands::Export => {
            serde_json::to_writer_pretty(&mut *out, &db.raw_data())?;
            writeln!(out)?
        }
    }

    Ok(())
}
