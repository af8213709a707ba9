use std::fs;
use std::path::Path;

/// Reads a .csv file into rows of cells, ready for `import::parse_rows`.
/// Fully blank lines are dropped; the header row is kept (the importer
/// discards it).
pub fn load_rows(path: &Path) -> std::io::Result<Vec<Vec<String>>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_csv_line)
        .collect())
}

/// Splits one CSV line into cells. Double quotes wrap cells that contain
/// commas; a doubled quote inside a quoted cell is a literal quote.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    cell.push('"');
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                cells.push(std::mem::take(&mut cell));
            }
            _ => {
                cell.push(c);
            }
        }
    }

    cells.push(cell);
    cells
}
