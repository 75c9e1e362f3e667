//! Delimited file reading with flexible row widths.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ::csv::{ReaderBuilder, Trim};

use crate::error::{IngestError, Result};

use super::table::SimulationTable;

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Reads a comma-delimited simulation table.
pub fn read_simulation_table(path: &Path) -> Result<SimulationTable> {
    read_simulation_table_with_delimiter(path, b',')
}

/// Reads a simulation table using `delimiter` between fields.
pub fn read_simulation_table_with_delimiter(path: &Path, delimiter: u8) -> Result<SimulationTable> {
    let file = open_file(path)?;
    let table = read_rows(file, delimiter, path)?;
    tracing::debug!(
        path = %path.display(),
        rows = table.len(),
        "read simulation table"
    );
    Ok(table)
}

/// Reads a simulation table from any reader. `source` names it in errors.
pub fn read_simulation_table_from_reader<R: Read>(
    reader: R,
    delimiter: u8,
    source: &Path,
) -> Result<SimulationTable> {
    read_rows(reader, delimiter, source)
}

fn read_rows<R: Read>(reader: R, delimiter: u8, path: &Path) -> Result<SimulationTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            let line = e.position().map_or(0, ::csv::Position::line);
            match e.into_kind() {
                ::csv::ErrorKind::Io(source) => IngestError::FileRead {
                    path: path.to_path_buf(),
                    source,
                },
                other => IngestError::CsvParse {
                    path: path.to_path_buf(),
                    line,
                    message: format!("{other:?}"),
                },
            }
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    Ok(SimulationTable::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_reads_metadata_and_data_rows() {
        let file = create_temp_csv("ACC-HUMAN run\nTIME,C1,C2\n0,0.1,0.2\n8760,0.3,0.4\n");
        let table = read_simulation_table(file.path()).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table.row(1).unwrap(), ["TIME", "C1", "C2"]);
        assert_eq!(table.cell(3, 2), Some("0.4"));
    }

    #[test]
    fn test_rows_may_differ_in_width() {
        let file = create_temp_csv("name\nTIME,C1,C2\n0,1,2\n");
        let table = read_simulation_table(file.path()).unwrap();
        assert_eq!(table.row(0).unwrap().len(), 1);
        assert_eq!(table.row(2).unwrap().len(), 3);
    }

    #[test]
    fn test_blank_rows_skipped_and_cells_trimmed() {
        let file = create_temp_csv("\u{feff}TIME , C1\n\n , \n 0 , 1.5 \n");
        let table = read_simulation_table(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, 0), Some("TIME"));
        assert_eq!(table.cell(1, 1), Some("1.5"));
    }

    #[test]
    fn test_custom_delimiter() {
        let file = create_temp_csv("time\tc1\n0\t2.5\n");
        let table = read_simulation_table_with_delimiter(file.path(), b'\t').unwrap();
        assert_eq!(table.cell(1, 1), Some("2.5"));
    }

    #[test]
    fn test_empty_file() {
        let file = create_temp_csv("");
        let result = read_simulation_table(file.path());
        assert!(matches!(result, Err(IngestError::EmptyTable { .. })));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_simulation_table(&dir.path().join("CMAN.txt"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_from_reader() {
        let data = "Time;C1\n0;0.5\n";
        let table =
            read_simulation_table_from_reader(data.as_bytes(), b';', Path::new("<memory>"))
                .unwrap();
        assert_eq!(table.cell(1, 1), Some("0.5"));
    }
}
