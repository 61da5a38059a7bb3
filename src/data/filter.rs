use super::model::{Score, YearSelection};

/// Return the records visible under `selection`, in their original order.
///
/// With a concrete year only matching records are kept; they are then sorted
/// by year, which is stable and therefore keeps the file order. `All` returns
/// every record untouched.
pub fn filter_by_year(records: &[Score], selection: YearSelection) -> Vec<Score> {
    filtered_indices(records, selection)
        .into_iter()
        .map(|i| records[i].clone())
        .collect()
}

/// Indices into `records` of the rows that pass `selection`.
pub fn filtered_indices(records: &[Score], selection: YearSelection) -> Vec<usize> {
    let mut indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, score)| match selection {
            YearSelection::All => true,
            YearSelection::Year(year) => score.year == year,
        })
        .map(|(i, _)| i)
        .collect();
    if let YearSelection::Year(_) = selection {
        indices.sort_by_key(|&i| records[i].year);
    }
    indices
}
