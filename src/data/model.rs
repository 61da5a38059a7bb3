use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Column layout of the source file
// ---------------------------------------------------------------------------

/// Column names in file order. Index = column position.
pub const COLUMNS: [&str; 12] = [
    "id",
    "math",
    "literature",
    "physics",
    "biology",
    "foreign_language",
    "year",
    "chemistry",
    "history",
    "geography",
    "civic_education",
    "region_code",
];

pub const COL_ID: usize = 0;
pub const COL_YEAR: usize = 6;
pub const COL_REGION: usize = 11;

/// The nine subject columns, in the order they appear in the file.
pub const SUBJECTS: [&str; 9] = [
    "math",
    "literature",
    "physics",
    "biology",
    "foreign_language",
    "chemistry",
    "history",
    "geography",
    "civic_education",
];

// ---------------------------------------------------------------------------
// Score – one candidate's results for one exam year
// ---------------------------------------------------------------------------

/// One row of the source file.
///
/// Field order matches the file layout so that serializing a `Score` with a
/// header-less `csv::Writer` reproduces the original line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Score {
    /// Candidate number. Supplied by the source, never generated.
    pub id: i64,
    pub math: Option<f64>,
    pub literature: Option<f64>,
    pub physics: Option<f64>,
    pub biology: Option<f64>,
    pub foreign_language: Option<f64>,
    pub year: i32,
    pub chemistry: Option<f64>,
    pub history: Option<f64>,
    pub geography: Option<f64>,
    pub civic_education: Option<f64>,
    /// Administrative region. Zero when the source leaves it blank.
    pub region_code: i32,
}

impl Score {
    /// A record with every subject absent.
    pub fn new(id: i64, year: i32, region_code: i32) -> Self {
        Score {
            id,
            math: None,
            literature: None,
            physics: None,
            biology: None,
            foreign_language: None,
            year,
            chemistry: None,
            history: None,
            geography: None,
            civic_education: None,
            region_code,
        }
    }

    /// Subject scores in [`SUBJECTS`] order.
    pub fn subjects(&self) -> [Option<f64>; 9] {
        [
            self.math,
            self.literature,
            self.physics,
            self.biology,
            self.foreign_language,
            self.chemistry,
            self.history,
            self.geography,
            self.civic_education,
        ]
    }

    /// Mutable access to the subject scores in [`SUBJECTS`] order.
    pub fn subjects_mut(&mut self) -> [&mut Option<f64>; 9] {
        [
            &mut self.math,
            &mut self.literature,
            &mut self.physics,
            &mut self.biology,
            &mut self.foreign_language,
            &mut self.chemistry,
            &mut self.history,
            &mut self.geography,
            &mut self.civic_education,
        ]
    }

    /// Overwrite every non-key field with `other`'s values. `id` is kept.
    pub fn overwrite_from(&mut self, other: &Score) {
        let id = self.id;
        *self = other.clone();
        self.id = id;
    }

    /// Serialize back into one comma-joined line in file order.
    /// Absent scores become empty fields.
    pub fn to_line(&self) -> Result<String, csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.serialize(self)?;
        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        let mut line = String::from_utf8_lossy(&bytes).into_owned();
        if line.ends_with('\n') {
            line.pop();
        }
        Ok(line)
    }
}

// ---------------------------------------------------------------------------
// YearSelection – input of the year filter
// ---------------------------------------------------------------------------

/// Which year the grid shows. `All` is the explicit "no filtering" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearSelection {
    #[default]
    All,
    Year(i32),
}

impl fmt::Display for YearSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearSelection::All => write!(f, "All"),
            YearSelection::Year(y) => write!(f, "{y}"),
        }
    }
}

// ---------------------------------------------------------------------------
// ScoreDataset – the result of one successful load
// ---------------------------------------------------------------------------

/// All records of one file, in file order, plus the distinct years seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreDataset {
    pub records: Vec<Score>,
    /// Distinct `year` values in order of first appearance.
    pub years: Vec<i32>,
}

impl ScoreDataset {
    /// Build the year index from already-parsed records.
    pub fn from_records(records: Vec<Score>) -> Self {
        let mut years = Vec::new();
        for score in &records {
            if !years.contains(&score.year) {
                years.push(score.year);
            }
        }
        ScoreDataset { records, years }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
