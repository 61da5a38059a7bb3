use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, warn};

use crate::error::LoadError;

use super::model::{Score, ScoreDataset};
use super::parser::parse_line;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a score file.
///
/// Layout: physical line 1 is a header (discarded, not validated), every
/// following line is a 12-column comma-separated record. Fields are split on
/// `,` only, quotes are data. A blank line is a record like any other and
/// fails to parse. The first malformed line aborts the whole load.
pub fn load_file(path: &Path) -> Result<ScoreDataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(file)?;
    debug!(
        "parsed {} records from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

/// Same as [`load_file`] over any byte source.
///
/// Lines end at `\n`; a trailing `\r` is dropped. A final terminator does not
/// start an extra (empty) line.
pub fn load_reader<R: Read>(source: R) -> Result<ScoreDataset, LoadError> {
    let reader = BufReader::new(source);

    let mut records: Vec<Score> = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut duplicates = 0usize;

    for (idx, chunk) in reader.split(b'\n').enumerate() {
        let line_no = idx as u64 + 1;
        let mut bytes = chunk.map_err(LoadError::Read)?;
        if line_no == 1 {
            continue;
        }
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let line = String::from_utf8(bytes).map_err(|_| LoadError::Encoding { line: line_no })?;
        let score = parse_line(&line).map_err(|e| e.at_line(line_no))?;

        if !seen_ids.insert(score.id) {
            duplicates += 1;
        }
        records.push(score);
    }

    if duplicates > 0 {
        warn!("{duplicates} record(s) repeat an earlier id; the last occurrence wins on import");
    }

    Ok(ScoreDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    #[test]
    fn header_is_discarded_without_validation() {
        let text = "whatever,header,we,get\n1,,,,,,2020,,,,,1\n";
        let ds = load_reader(text.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.years, vec![2020]);
    }

    #[test]
    fn header_only_is_an_empty_dataset() {
        let ds = load_reader("sbd,toan,van\n".as_bytes()).unwrap();
        assert!(ds.is_empty());
        assert!(ds.years.is_empty());
    }

    #[test]
    fn error_reports_the_file_line() {
        let text = "h\n1,,,,,,2020,,,,,1\n2,,,,,,20x0,,,,,1\n";
        match load_reader(text.as_bytes()) {
            Err(LoadError::Parse(e)) => {
                assert_eq!(e.line, 3);
                assert_eq!(e.column, "year");
                assert_eq!(e.kind, ParseErrorKind::InvalidInteger);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let text = "h\r\n1,9,,,,,2020,,,,,3\r\n2,,,,,,2021,,,,,\r\n";
        let ds = load_reader(text.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].region_code, 3);
        assert_eq!(ds.records[1].region_code, 0);
    }

    #[test]
    fn blank_first_line_is_the_header() {
        let text = "\n1,,,,,,2020,,,,,1\n2,,,,,,2021,,,,,1\n";
        let ds = load_reader(text.as_bytes()).unwrap();
        let ids: Vec<i64> = ds.records.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn blank_data_line_fails_the_load() {
        let text = "h\n1,,,,,,2020,,,,,1\n\n2,,,,,,2021,,,,,1\n";
        match load_reader(text.as_bytes()) {
            Err(LoadError::Parse(e)) => {
                assert_eq!(e.line, 3);
                assert_eq!(
                    e.kind,
                    ParseErrorKind::ColumnCount {
                        expected: 12,
                        found: 1
                    }
                );
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn trailing_blank_line_fails_but_final_newline_does_not() {
        assert_eq!(
            load_reader("h\n1,,,,,,2020,,,,,1".as_bytes()).unwrap().len(),
            1
        );
        assert!(matches!(
            load_reader("h\n1,,,,,,2020,,,,,1\n\n".as_bytes()),
            Err(LoadError::Parse(e)) if e.line == 3
        ));
    }

    #[test]
    fn invalid_utf8_reports_the_line() {
        let bytes: &[u8] = b"h\n1,,,,,,2020,,,,,1\n2,\xff,,,,,2021,,,,,1\n";
        assert!(matches!(
            load_reader(bytes),
            Err(LoadError::Encoding { line: 3 })
        ));
    }

    #[test]
    fn invalid_utf8_in_the_header_is_ignored() {
        let bytes: &[u8] = b"\xef\xbb\xbfsbd,\xff\n1,,,,,,2020,,,,,1\n";
        assert_eq!(load_reader(bytes).unwrap().len(), 1);
    }

    #[test]
    fn duplicate_ids_are_kept_in_file_order() {
        let text = "h\n1,1,,,,,2020,,,,,1\n1,2,,,,,2020,,,,,1\n";
        let ds = load_reader(text.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[1].math, Some(2.0));
    }
}
