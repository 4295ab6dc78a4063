use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;

use super::model::{Dataset, RawRow, Record, SCHEMA};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the results table from a delimited file.
///
/// A missing or unreadable file is the only failure; everything wrong *inside*
/// the table degrades gracefully (see [`normalize_row`] and [`coerce_metric`]).
pub fn load_file(path: &Path) -> Result<Dataset> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let dataset =
        load_reader(file).with_context(|| format!("reading table {}", path.display()))?;
    log::info!(
        "Loaded {} records from {} (header row: {})",
        dataset.len(),
        path.display(),
        if dataset.had_header { "yes" } else { "no" }
    );
    Ok(dataset)
}

/// Parse a table from any reader. The header row is optional.
pub fn load_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut had_header = false;

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        if row_no == 0 && looks_like_header(&row) {
            had_header = true;
            continue;
        }

        let raw = normalize_row(&row, row_no)?;
        records.push(Record::from_raw(raw));
    }

    Ok(Dataset {
        records,
        had_header,
    })
}

// ---------------------------------------------------------------------------
// Schema normalisation
// ---------------------------------------------------------------------------

/// A first row counts as a header when any cell names a schema column.
fn looks_like_header(row: &StringRecord) -> bool {
    row.iter().any(|cell| {
        let cell = cell.trim();
        SCHEMA.iter().any(|name| name.eq_ignore_ascii_case(cell))
    })
}

/// Pad short rows with empty cells and drop everything past the ninth column,
/// then read the fields positionally.
fn normalize_row(row: &StringRecord, row_no: usize) -> Result<RawRow> {
    if row.len() != SCHEMA.len() {
        log::debug!(
            "row {row_no}: {} columns, normalising to {}",
            row.len(),
            SCHEMA.len()
        );
    }

    let fixed: StringRecord = (0..SCHEMA.len())
        .map(|i| row.get(i).unwrap_or(""))
        .collect();

    fixed
        .deserialize::<RawRow>(None)
        .with_context(|| format!("CSV row {row_no}: schema mismatch"))
}

// ---------------------------------------------------------------------------
// Numeric coercion
// ---------------------------------------------------------------------------

/// Best-effort conversion of the primary metric. Never fails: `--`, blanks,
/// text and NaN all come back as `None`.
pub fn coerce_metric(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() || s == "--" {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn coerce_absent_markers() {
        assert_eq!(coerce_metric("--"), None);
        assert_eq!(coerce_metric(""), None);
        assert_eq!(coerce_metric("  -- "), None);
    }

    #[test]
    fn coerce_non_numeric_is_absent() {
        for s in ["n/a", "0.8 (val)", "abc", "1,5", "NaN", "."] {
            assert_eq!(coerce_metric(s), None, "{s:?}");
        }
    }

    #[test]
    fn coerce_numbers() {
        assert_eq!(coerce_metric("0.75"), Some(0.75));
        assert_eq!(coerce_metric(" 1 "), Some(1.0));
        assert_eq!(coerce_metric("-0.2"), Some(-0.2));
        assert_eq!(coerce_metric("1e-1"), Some(0.1));
    }

    #[test]
    fn header_row_is_consumed() {
        let csv = "author,disease,modality,method,dim,val1,val2,val3,notes\n\
                   Smith,ISLES 2015,MRI,VAE,2D,0.61,0.5,0.4,\n";
        let ds = load_reader(csv.as_bytes()).unwrap();
        assert!(ds.had_header);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].author, "Smith");
        assert_eq!(ds.records[0].val1, Some(0.61));
    }

    #[test]
    fn headerless_input_is_positional() {
        let csv = "Smith,BraTS,MRI,GAN,3D,0.7,,,\nLee,WMH,FLAIR,AE,2D,--,,,\n";
        let ds = load_reader(csv.as_bytes()).unwrap();
        assert!(!ds.had_header);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].disease.as_deref(), Some("BraTS"));
        assert_eq!(ds.records[1].val1, None);
    }

    #[test]
    fn short_rows_are_padded() {
        let csv = "Smith,Stroke,MRI,VAE,2D,0.5\nLee,MS\n";
        let ds = load_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].val1, Some(0.5));
        assert_eq!(ds.records[0].notes, "");
        assert_eq!(ds.records[1].method, "");
        assert_eq!(ds.records[1].val1, None);
    }

    #[test]
    fn long_rows_are_truncated() {
        let csv = "a,Stroke,MRI,VAE,2D,0.5,0.1,0.2,note,extra1,extra2\n";
        let ds = load_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].notes, "note");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("nope.csv"));
    }

    #[test]
    fn load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "author,disease,modality,method,dim,val1,val2,val3,notes").unwrap();
        writeln!(file, "X,multiple sclerosis,MRI,Diffusion,3D,0.9,,,").unwrap();
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].method, "Diffusion");
    }
}
