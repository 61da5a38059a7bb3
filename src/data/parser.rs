use std::str::FromStr;

use crate::error::{ParseError, ParseErrorKind};

use super::model::{Score, COLUMNS, COL_ID, COL_REGION, COL_YEAR};

/// Positions of the nine subject columns, in [`SUBJECTS`](super::model::SUBJECTS) order.
const SUBJECT_COLUMNS: [usize; 9] = [1, 2, 3, 4, 5, 7, 8, 9, 10];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse one comma-separated line (no quoting) into a [`Score`].
pub fn parse_line(line: &str) -> Result<Score, ParseError> {
    let fields: Vec<&str> = line.split(',').collect();
    parse_fields(&fields)
}

/// Parse an already-split row. Exactly [`COLUMNS`]`.len()` fields are required.
///
/// * `id`, `year` – required integers
/// * subjects – empty means absent, otherwise a finite float
/// * `region_code` – empty means `0`, otherwise an integer
///
/// Surrounding whitespace around a number is tolerated. A field holding only
/// whitespace is not empty and fails like any other non-number.
pub fn parse_fields<S: AsRef<str>>(fields: &[S]) -> Result<Score, ParseError> {
    if fields.len() != COLUMNS.len() {
        return Err(ParseError::new(
            "*",
            "",
            ParseErrorKind::ColumnCount {
                expected: COLUMNS.len(),
                found: fields.len(),
            },
        ));
    }
    let field = |idx: usize| fields[idx].as_ref();

    let id = required::<i64>(COLUMNS[COL_ID], field(COL_ID))?;
    let year = required::<i32>(COLUMNS[COL_YEAR], field(COL_YEAR))?;
    let region_code = defaulted_int(COLUMNS[COL_REGION], field(COL_REGION))?;

    let mut score = Score::new(id, year, region_code);
    for (slot, &col) in score.subjects_mut().into_iter().zip(SUBJECT_COLUMNS.iter()) {
        *slot = optional_float(COLUMNS[col], field(col))?;
    }
    Ok(score)
}

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

fn required<T: FromStr>(column: &'static str, raw: &str) -> Result<T, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::new(column, raw, ParseErrorKind::MissingRequired));
    }
    raw.trim()
        .parse::<T>()
        .map_err(|_| ParseError::new(column, raw, ParseErrorKind::InvalidInteger))
}

/// Empty → 0. Kept apart from [`required`] on purpose: a blank region code is
/// tolerated, a blank id or year is not.
fn defaulted_int(column: &'static str, raw: &str) -> Result<i32, ParseError> {
    if raw.is_empty() {
        return Ok(0);
    }
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ParseError::new(column, raw, ParseErrorKind::InvalidInteger))
}

fn optional_float(column: &'static str, raw: &str) -> Result<Option<f64>, ParseError> {
    if raw.is_empty() {
        return Ok(None);
    }
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::new(column, raw, ParseErrorKind::InvalidFloat))?;
    if !value.is_finite() {
        return Err(ParseError::new(column, raw, ParseErrorKind::NonFinite));
    }
    Ok(Some(value))
}
