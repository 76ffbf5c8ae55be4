use std::path::Path;

use calamine::{Data, Range, Reader, Xls, Xlsx, open_workbook};
use sharchop_config::dataset::DatasetConfig;

use crate::table::{PhraseRow, PhraseTable};

const ID_COLUMN: &str = "ID";
const TSHANGLA_COLUMN: &str = "Tshangla";
const ENGLISH_COLUMN: &str = "English";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("table malformed: missing required column {0:?}")]
    MissingColumn(&'static str),

    #[error("workbook has no worksheets")]
    NoWorksheet,

    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("all dataset sources failed: {attempts}")]
    Exhausted { attempts: String },
}

/// Load the phrase table, trying each source format in a fixed order:
/// the spreadsheet as .xlsx, the same file with the .xls reader, then the
/// delimited-text fallback. Individual failures are recorded and swallowed;
/// only exhaustion of the whole chain is an error.
pub fn load_table(config: &DatasetConfig) -> Result<PhraseTable, LoadError> {
    let mut failures: Vec<String> = Vec::new();

    match load_xlsx(&config.spreadsheet_path) {
        Ok(table) => {
            tracing::info!(rows = table.len(), path = %config.spreadsheet_path, "loaded phrase table (xlsx)");
            return Ok(table);
        }
        Err(e) => {
            tracing::debug!("xlsx attempt failed: {e}");
            failures.push(format!("xlsx: {e}"));
        }
    }

    match load_xls(&config.spreadsheet_path) {
        Ok(table) => {
            tracing::info!(rows = table.len(), path = %config.spreadsheet_path, "loaded phrase table (xls)");
            return Ok(table);
        }
        Err(e) => {
            tracing::debug!("xls attempt failed: {e}");
            failures.push(format!("xls: {e}"));
        }
    }

    match load_csv(&config.csv_path) {
        Ok(table) => {
            tracing::info!(rows = table.len(), path = %config.csv_path, "loaded phrase table (csv)");
            return Ok(table);
        }
        Err(e) => {
            tracing::debug!("csv attempt failed: {e}");
            failures.push(format!("csv: {e}"));
        }
    }

    Err(LoadError::Exhausted {
        attempts: failures.join("; "),
    })
}

fn load_xlsx(path: impl AsRef<Path>) -> Result<PhraseTable, LoadError> {
    let mut workbook: Xlsx<std::io::BufReader<std::fs::File>> =
        open_workbook(path).map_err(|e: calamine::XlsxError| LoadError::Spreadsheet(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::NoWorksheet)?
        .map_err(|e| LoadError::Spreadsheet(e.to_string()))?;
    table_from_range(&range)
}

fn load_xls(path: impl AsRef<Path>) -> Result<PhraseTable, LoadError> {
    let mut workbook: Xls<std::io::BufReader<std::fs::File>> =
        open_workbook(path).map_err(|e: calamine::XlsError| LoadError::Spreadsheet(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::NoWorksheet)?
        .map_err(|e| LoadError::Spreadsheet(e.to_string()))?;
    table_from_range(&range)
}

fn load_csv(path: impl AsRef<Path>) -> Result<PhraseTable, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let find = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let id_col = find(ID_COLUMN)?;
    let tshangla_col = find(TSHANGLA_COLUMN)?;
    let english_col = find(ENGLISH_COLUMN)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let id = record.get(id_col).unwrap_or_default().trim().to_string();
        if id.is_empty() {
            continue;
        }
        rows.push(PhraseRow {
            id,
            tshangla: record.get(tshangla_col).unwrap_or_default().to_string(),
            english: record.get(english_col).unwrap_or_default().to_string(),
        });
    }
    Ok(PhraseTable::from_rows(rows))
}

fn table_from_range(range: &Range<Data>) -> Result<PhraseTable, LoadError> {
    let mut data_rows = range.rows();
    let header = data_rows.next().ok_or(LoadError::MissingColumn(ID_COLUMN))?;

    let find = |name: &'static str| {
        header
            .iter()
            .position(|cell| cell_text(cell).trim() == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let id_col = find(ID_COLUMN)?;
    let tshangla_col = find(TSHANGLA_COLUMN)?;
    let english_col = find(ENGLISH_COLUMN)?;

    let mut rows = Vec::new();
    for record in data_rows {
        let id = record
            .get(id_col)
            .map(cell_text)
            .unwrap_or_default()
            .trim()
            .to_string();
        // Trailing blank rows are common in hand-edited spreadsheets
        if id.is_empty() {
            continue;
        }
        rows.push(PhraseRow {
            id,
            tshangla: record.get(tshangla_col).map(cell_text).unwrap_or_default(),
            english: record.get(english_col).map(cell_text).unwrap_or_default(),
        });
    }
    Ok(PhraseTable::from_rows(rows))
}

/// IDs arrive as floats from spreadsheet cells; keep "7", not "7.0"
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Int(i) => i.to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &Path, name: &str, contents: &str) -> String {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn config(dir: &Path, csv_name: &str) -> DatasetConfig {
        DatasetConfig {
            spreadsheet_path: dir.join("missing.xlsx").to_string_lossy().into_owned(),
            csv_path: dir.join(csv_name).to_string_lossy().into_owned(),
        }
    }

    #[test]
    fn falls_back_to_csv_when_spreadsheet_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            dir.path(),
            "phrases.csv",
            "ID,Tshangla,English\n1,jang ga,hello\n2,lass la,goodbye\n",
        );

        let table = load_table(&config(dir.path(), "phrases.csv")).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("1").unwrap().english, "hello");
        assert_eq!(table.get("2").unwrap().tshangla, "lass la");
    }

    #[test]
    fn extra_columns_are_ignored_and_order_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            dir.path(),
            "phrases.csv",
            "Notes,ID,English,Tshangla\nx,10,hello,jang ga\ny,7,goodbye,lass la\n",
        );

        let table = load_table(&config(dir.path(), "phrases.csv")).unwrap();
        let ids: Vec<&str> = table.rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["10", "7"]);
        assert_eq!(table.get("7").unwrap().english, "goodbye");
    }

    #[test]
    fn missing_required_column_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(dir.path(), "phrases.csv", "ID,Tshangla\n1,jang ga\n");

        let err = load_table(&config(dir.path(), "phrases.csv")).unwrap_err();
        match err {
            LoadError::Exhausted { attempts } => {
                assert!(attempts.contains("missing required column \"English\""))
            }
            other => panic!("expected Exhausted, got {other}"),
        }
    }

    #[test]
    fn exhaustion_reports_every_attempt() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_table(&config(dir.path(), "missing.csv")).unwrap_err();
        match err {
            LoadError::Exhausted { attempts } => {
                assert!(attempts.contains("xlsx:"));
                assert!(attempts.contains("xls:"));
                assert!(attempts.contains("csv:"));
            }
            other => panic!("expected Exhausted, got {other}"),
        }
    }

    #[test]
    fn blank_rows_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            dir.path(),
            "phrases.csv",
            "ID,Tshangla,English\n1,jang ga,hello\n,,\n2,lass la,goodbye\n",
        );

        let table = load_table(&config(dir.path(), "phrases.csv")).unwrap();
        assert_eq!(table.len(), 2);
    }
}
