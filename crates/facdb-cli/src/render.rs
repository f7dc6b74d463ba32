// crates/facdb-cli/src/render.rs

//! Text and JSON output for command results.

use facdb_core::{DbStats, Facility, FacilityWithDistance};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub fn from_flag(json: bool) -> Self {
        if json {
            Format::Json
        } else {
            Format::Text
        }
    }
}

fn json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn line<W: Write>(out: &mut W, f: &Facility) -> io::Result<()> {
    let alt = f.alt_code().unwrap_or("-");
    writeln!(
        out,
        "{:<6} {:<4} {}  ({}, {}, {})",
        f.code, alt, f.name, f.locality, f.region, f.country
    )
}

pub fn facility<W: Write>(out: &mut W, format: Format, f: &Facility) -> io::Result<()> {
    match format {
        Format::Json => json(out, f),
        Format::Text => {
            writeln!(out, "Code: {}", f.code)?;
            writeln!(out, "Alternate code: {}", f.alt_code().unwrap_or("-"))?;
            writeln!(out, "Name: {}", f.name)?;
            writeln!(out, "Locality: {}", f.locality)?;
            writeln!(out, "Region: {}", f.region)?;
            writeln!(out, "Country: {}", f.country)?;
            writeln!(out, "Elevation: {} ft", f.elevation_ft)?;
            writeln!(out, "Position: {:.4}, {:.4}", f.lat, f.lon)?;
            writeln!(out, "Timezone: {}", f.timezone)
        }
    }
}

pub fn facilities<W: Write>(out: &mut W, format: Format, items: &[Facility]) -> io::Result<()> {
    match format {
        Format::Json => json(out, items),
        Format::Text if items.is_empty() => writeln!(out, "No facilities found."),
        Format::Text => items.iter().try_for_each(|f| line(out, f)),
    }
}

pub fn with_distance<W: Write>(
    out: &mut W,
    format: Format,
    items: &[FacilityWithDistance],
) -> io::Result<()> {
    match format {
        Format::Json => json(out, items),
        Format::Text if items.is_empty() => writeln!(out, "No facilities found."),
        Format::Text => items.iter().try_for_each(|hit| {
            write!(out, "{:>9.2} {}  ", hit.distance, hit.distance_unit)?;
            line(out, &hit.facility)
        }),
    }
}

pub fn counts<W: Write>(
    out: &mut W,
    format: Format,
    counts: &BTreeMap<String, usize>,
) -> io::Result<()> {
    match format {
        Format::Json => json(out, counts),
        Format::Text => counts
            .iter()
            .try_for_each(|(key, n)| writeln!(out, "{key:<24} {n}")),
    }
}

pub fn stats<W: Write>(out: &mut W, format: Format, stats: &DbStats) -> io::Result<()> {
    match format {
        Format::Json => json(out, stats),
        Format::Text => {
            writeln!(out, "Catalog statistics:")?;
            writeln!(out, "  Facilities: {}", stats.total)?;
            writeln!(out, "  Countries: {}", stats.countries)?;
            writeln!(out, "  Localities: {}", stats.localities)?;
            writeln!(out, "  Regions: {}", stats.regions)?;
            writeln!(out, "  With alternate code: {}", stats.with_alternate_code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facdb_core::{FacilityDb, FacilitySearch, UnitSystem};
    use rstest::{fixture, rstest};

    #[fixture]
    fn db() -> FacilityDb {
        FacilityDb::from_snapshot(
            br#"{"KJFK": {"iata": "JFK", "name": "John F Kennedy", "city": "New York",
                          "state": "New-York", "country": "US", "lat": 40.6398, "lon": -73.7789}}"#,
        )
        .unwrap()
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[rstest]
    fn text_list_line(db: FacilityDb) {
        let out = render(|w| facilities(w, Format::Text, &db.all(10, 0)));
        assert!(out.starts_with("KJFK"));
        assert!(out.contains("JFK"));
        assert!(out.contains("(New York, New-York, US)"));
    }

    #[rstest]
    fn empty_text_list() {
        let out = render(|w| facilities(w, Format::Text, &[]));
        assert_eq!(out, "No facilities found.\n");
    }

    #[rstest]
    fn json_uses_snapshot_field_names(db: FacilityDb) {
        let out = render(|w| facility(w, Format::Json, &db.get_by_code("jfk").unwrap()));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["icao"], "KJFK");
        assert_eq!(value["city"], "New York");
    }

    #[rstest]
    fn distances_carry_their_unit(db: FacilityDb) {
        let hits = db.nearby_with_distance(40.6398, -73.7789, 10.0, 5, UnitSystem::Imperial);
        let out = render(|w| with_distance(w, Format::Text, &hits));
        assert!(out.contains("0.00 mi"));

        let json_out = render(|w| with_distance(w, Format::Json, &hits));
        let value: serde_json::Value = serde_json::from_str(&json_out).unwrap();
        assert_eq!(value[0]["distance_unit"], "mi");
        assert_eq!(value[0]["icao"], "KJFK");
    }
}
