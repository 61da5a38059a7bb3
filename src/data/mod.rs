/// Data layer: record type, parsing, loading, and year filtering.
///
/// Architecture:
/// ```text
///   scores.csv
///        │
///        ▼
///   ┌──────────┐     ┌──────────┐
///   │  loader   │ ──▶ │  parser   │  one line → Score
///   └──────────┘     └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ ScoreDataset  │  Vec<Score>, distinct years
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  YearSelection → visible rows
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod parser;
