// File: crates/demo/src/input.rs
// Summary: Load a single numeric column from a CSV file as the series to feed.

use std::path::Path;

use anyhow::{Context, Result};

/// Read `column` (case-insensitive header match) or, when `None`, the first
/// column whose first data cell parses as a number. Unparseable cells are skipped.
pub fn load_series_csv(path: &Path, column: Option<&str>) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let records = rdr.records().collect::<Result<Vec<_>, _>>()?;

    let index = match column {
        Some(name) => {
            let want = name.trim().to_lowercase();
            headers
                .iter()
                .position(|h| *h == want)
                .with_context(|| format!("column `{name}` not found in {headers:?}"))?
        }
        None => records
            .first()
            .and_then(|rec| rec.iter().position(|cell| cell.trim().parse::<f64>().is_ok()))
            .context("no numeric column found")?,
    };

    let mut skipped = 0usize;
    let values = records
        .iter()
        .filter_map(|rec| {
            let v = rec.get(index).and_then(|s| s.trim().parse::<f64>().ok());
            if v.is_none() {
                skipped += 1;
            }
            v
        })
        .collect::<Vec<_>>();
    if skipped > 0 {
        tracing::warn!(skipped, "skipped rows without a numeric value");
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn reads_named_column() {
        let f = write_csv("time,Speed\n0,1.5\n1,2.5\n2,oops\n3,4\n");
        let v = load_series_csv(f.path(), Some("speed")).unwrap();
        assert_eq!(v, vec![1.5, 2.5, 4.0]);
    }

    #[test]
    fn defaults_to_first_numeric_column() {
        let f = write_csv("label,value\na,1\nb,2\n");
        assert_eq!(load_series_csv(f.path(), None).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let f = write_csv("a,b\n1,2\n");
        assert!(load_series_csv(f.path(), Some("c")).is_err());
    }
}
