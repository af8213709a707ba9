/// Converts raw spreadsheet rows into candidate (term, definition) pairs.
///
/// The first row is always a header and is discarded regardless of content.
/// Column 0 is the term, column 1 the definition; rows with a missing or
/// empty-after-trim cell are dropped. Duplicate handling is left to
/// `VocabStore::add_batch`.
pub fn parse_rows(rows: &[Vec<String>]) -> Vec<(String, String)> {
    rows.iter()
        .skip(1)
        .filter_map(|row| {
            let term = row.first().map(|cell| cell.trim()).unwrap_or("");
            let definition = row.get(1).map(|cell| cell.trim()).unwrap_or("");
            if term.is_empty() || definition.is_empty() {
                None
            } else {
                Some((term.to_string(), definition.to_string()))
            }
        })
        .collect()
}
