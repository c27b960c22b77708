//! # Whitespace-separated catalog reader
//!
//! Reads star catalogs stored as plain text, one record per line:
//!
//! ```text
//! <id> <right ascension> <declination>
//! 1 0.000911 1.089013
//! 2 0.003797 -19.498837
//! ```
//!
//! ## Format rules
//! -----------------
//! * Fields are separated by any run of spaces or tabs.
//! * `id` is an integer, both angles are decimal degrees.
//! * Blank lines are skipped.
//! * A line with **more than three** fields is a fatal error ([`StarSepError::TooManyColumns`]).
//! * A line with fewer than three fields, or a field that does not parse, is also fatal.
//!
//! ## Error Handling
//! -----------------
//! The reader is fail-fast: the first malformed line aborts the load and nothing
//! is returned. A missing file is reported as [`StarSepError::CatalogNotFound`].
//! Line numbers in errors are **1-based** physical line numbers.
use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
};

use camino::Utf8Path;

use crate::{
    catalog::StarRecord,
    constants::{StarId, CATALOG_COLUMNS},
    StarSepError,
};

/// Read every record of a catalog file.
///
/// Arguments
/// -----------------
/// * `path`: catalog file location.
///
/// Return
/// ----------
/// * The records in file order, or the first error met.
///
/// See also
/// ------------
/// * [`read_catalog`] – Same parsing on any buffered reader.
pub fn read_catalog_file(path: &Utf8Path) -> Result<Vec<StarRecord>, StarSepError> {
    tracing::debug!("idle -> loading catalog {path}");
    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => StarSepError::CatalogNotFound(path.to_string()),
        _ => StarSepError::IoError(err),
    })?;

    let stars = read_catalog(BufReader::new(file))?;
    tracing::debug!("{} records read from {path}", stars.len());
    Ok(stars)
}

/// Read every record from a buffered source.
pub fn read_catalog<R: BufRead>(reader: R) -> Result<Vec<StarRecord>, StarSepError> {
    let mut stars = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(star) = parse_line(&line, index + 1)? {
            stars.push(star);
        }
    }
    Ok(stars)
}

/// Parse one catalog line; `Ok(None)` for blank lines.
fn parse_line(line: &str, line_number: usize) -> Result<Option<StarRecord>, StarSepError> {
    let mut fields = [""; CATALOG_COLUMNS];
    let mut found = 0;

    for token in line.split_whitespace() {
        if found == CATALOG_COLUMNS {
            return Err(StarSepError::TooManyColumns { line: line_number });
        }
        fields[found] = token;
        found += 1;
    }

    match found {
        0 => return Ok(None),
        n if n < CATALOG_COLUMNS => {
            return Err(StarSepError::MissingColumns {
                line: line_number,
                found: n,
            })
        }
        _ => {}
    }

    let invalid = |field: &'static str, value: &str| StarSepError::InvalidField {
        line: line_number,
        field,
        value: value.to_string(),
    };

    let [id, ra, dec] = fields;
    let id: StarId = id.parse().map_err(|_| invalid("id", id))?;
    let right_ascension: f64 = ra.parse().map_err(|_| invalid("right ascension", ra))?;
    let declination: f64 = dec.parse().map_err(|_| invalid("declination", dec))?;

    Ok(Some(StarRecord::new(id, right_ascension, declination)))
}
