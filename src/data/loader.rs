use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use crate::error::DataError;

use super::model::{CellValue, Dataset, Row};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a delimited text file with a header row.
///
/// Every cell is type-inferred via [`CellValue::infer`]. Records must all have
/// as many fields as the header. A header-only file yields an empty dataset.
pub fn load_csv(path: &Path) -> Result<Dataset, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_err = |source| DataError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        let cells: BTreeMap<String, CellValue> = headers
            .iter()
            .zip(record.iter())
            .map(|(name, raw)| (name.clone(), CellValue::infer(raw)))
            .collect();
        rows.push(Row { cells });
    }

    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        rows.len(),
        headers,
        path.display()
    );

    Ok(Dataset::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_rows_and_headers_in_order() {
        let file = csv_file("size,seen,unseen,proportion\n3,2,1,0.6666\n4,2,2,0.5\n");
        let ds = load_csv(file.path()).unwrap();

        assert_eq!(ds.column_names, vec!["size", "seen", "unseen", "proportion"]);
        assert_eq!(ds.rows.len(), 2);
        assert_eq!(ds.rows[1].get("size"), Some(&CellValue::Integer(4)));
        assert_eq!(ds.rows[1].get("proportion"), Some(&CellValue::Float(0.5)));
    }

    #[test]
    fn header_only_file_is_empty_dataset() {
        let file = csv_file("size,proportion\n");
        let ds = load_csv(file.path()).unwrap();
        assert!(ds.rows.is_empty());
        assert!(ds.has_column("proportion"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_csv(&dir.path().join("output.csv")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn ragged_row_is_csv_error() {
        let file = csv_file("a,proportion\n1,0.5\n2\n");
        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, DataError::Csv { .. }));
    }
}
