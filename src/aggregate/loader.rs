use std::path::Path;
use crate::errors::TestlensError;
use crate::models::{Row, Table};

/// Read a headed CSV file into a [`Table`].
///
/// Empty cells become absent values. Records shorter than the header are
/// padded; longer records are an error.
pub fn load_csv(path: &Path) -> Result<Table, TestlensError> {
    let csv_err = |e: csv::Error| TestlensError::Csv(format!("{}: {}", path.display(), e));

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    let headers: Vec<String> = rdr.headers().map_err(csv_err)?.iter().map(str::to_string).collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(TestlensError::Csv(format!("{}: no columns to parse", path.display())));
    }

    let width = headers.len();
    let mut table = Table::new(headers);
    for record in rdr.records() {
        let record = record.map_err(csv_err)?;
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(TestlensError::Csv(format!(
                "{}: line {}: expected {} fields, saw {}",
                path.display(),
                line,
                width,
                record.len()
            )));
        }

        let row: Row = record
            .iter()
            .map(|v| if v.is_empty() { None } else { Some(v.to_string()) })
            .collect();
        table.push_row(row);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn load(content: &str) -> Result<Table, TestlensError> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run_1_20240101.csv");
        fs::write(&path, content).unwrap();
        load_csv(&path)
    }

    #[test]
    fn test_load_basic() {
        let table = load("tc_id,status,feature\ntc1,pass,login\ntc2,fail,\n").unwrap();
        assert_eq!(table.columns(), &["tc_id", "status", "feature"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1, 1), Some("fail"));
        assert_eq!(table.get(1, 2), None);
    }

    #[test]
    fn test_load_quoted_fields() {
        let table = load("tc_id,status\n\"tc,1\",\"not run\"\n").unwrap();
        assert_eq!(table.get(0, 0), Some("tc,1"));
        assert_eq!(table.get(0, 1), Some("not run"));
    }

    #[test]
    fn test_short_record_padded() {
        let table = load("tc_id,status,feature\ntc1,pass\n").unwrap();
        assert_eq!(table.get(0, 2), None);
    }

    #[test]
    fn test_long_record_rejected() {
        let err = load("tc_id,status\ntc1,pass,extra\n").unwrap_err();
        assert!(matches!(err, TestlensError::Csv(ref m) if m.contains("expected 2 fields")));
    }

    #[test]
    fn test_empty_file_rejected() {
        assert!(matches!(load(""), Err(TestlensError::Csv(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = load_csv(Path::new("/nonexistent/run_1_2.csv")).unwrap_err();
        assert!(matches!(err, TestlensError::Csv(_)));
    }
}
