use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::CorrelationMatrix;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a user-supplied correlation matrix.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header `biomarker,<disease>,<disease>,...`, one row per biomarker
/// * `.json` – `{ "rows": [...], "cols": [...], "values": [[...], ...] }`
///
/// Spreadsheets are refused with a hint to export them as CSV first.
pub fn load_file(path: &Path) -> Result<CorrelationMatrix> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "xlsx" | "xls" => bail!("Excel workbooks are not supported; save the sheet as CSV"),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<CorrelationMatrix> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let matrix: CorrelationMatrix =
        serde_json::from_str(&text).context("parsing correlation matrix JSON")?;
    Ok(matrix)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: the first header cell names the row-label column (its text is
/// ignored), the remaining header cells are the disease columns. Every data
/// row starts with the biomarker name followed by one coefficient per column.
fn load_csv(path: &Path) -> Result<CorrelationMatrix> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    if headers.len() < 2 {
        bail!("CSV needs a label column and at least one disease column");
    }
    let cols: Vec<String> = headers.iter().skip(1).map(|h| h.trim().to_string()).collect();

    let mut rows = Vec::new();
    let mut values = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let label = record.get(0).unwrap_or("").trim();
        if label.is_empty() {
            bail!("CSV row {row_no}: missing biomarker name");
        }

        let row = record
            .iter()
            .skip(1)
            .enumerate()
            .map(|(j, tok)| {
                tok.trim().parse::<f64>().with_context(|| {
                    format!("CSV row {row_no}, column {j}: '{tok}' is not a number")
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        rows.push(label.to_string());
        values.push(row);
    }

    let matrix = CorrelationMatrix::new(rows, cols, values).context("invalid correlation matrix")?;
    Ok(matrix)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn loads_csv_matrix() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "m.csv",
            "biomarker,Frailty,Cancer\nIL-6,0.42,-0.1\nCRP, 0.3 ,0\n",
        );
        let m = load_file(&path).unwrap();
        assert_eq!(m.rows(), ["IL-6", "CRP"]);
        assert_eq!(m.cols(), ["Frailty", "Cancer"]);
        assert_eq!(m.value(1, 0), 0.3);
    }

    #[test]
    fn csv_rejects_non_numeric_cells() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "m.csv", "biomarker,Frailty\nIL-6,high\n");
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("not a number"));
    }

    #[test]
    fn csv_rejects_out_of_range_values() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "m.csv", "biomarker,Frailty\nIL-6,1.7\n");
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("outside [-1, 1]"));
    }

    #[test]
    fn csv_rejects_ragged_rows() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "m.csv", "biomarker,Frailty,Cancer\nIL-6,0.1\n");
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn loads_json_matrix() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "m.json",
            r#"{"rows":["HbA1c"],"cols":["Type 2 Diabetes"],"values":[[0.9]]}"#,
        );
        let m = load_file(&path).unwrap();
        assert_eq!(m.value(0, 0), 0.9);
    }

    #[test]
    fn refuses_spreadsheets_and_unknown_extensions() {
        let dir = TempDir::new().unwrap();
        let xlsx = write(&dir, "m.xlsx", "");
        assert!(format!("{:#}", load_file(&xlsx).unwrap_err()).contains("CSV"));
        let txt = write(&dir, "m.txt", "");
        assert!(format!("{:#}", load_file(&txt).unwrap_err()).contains(".txt"));
    }
}
