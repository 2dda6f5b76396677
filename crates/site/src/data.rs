// File: crates/site/src/data.rs
// Summary: Loads a yearly precipitation series from CSV (year + value columns, any order).

use std::path::Path;

use anyhow::{bail, Context, Result};
use chart_core::Observations;

const YEAR_HEADERS: [&str; 3] = ["year", "yr", "season"];
const VALUE_HEADERS: [&str; 5] = ["value", "precipitation", "precip", "mm", "djf"];

/// Rows with an unparseable year or value are skipped with a warning. Years must then be
/// consecutive and ascending, since the chart places points by index.
pub fn load_observations(path: &Path) -> Result<Observations> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let (Some(i_year), Some(i_value)) = (idx(&YEAR_HEADERS), idx(&VALUE_HEADERS)) else {
        bail!("{}: need a year column and a value column, found {:?}", path.display(), headers);
    };

    let mut years = Vec::new();
    let mut values = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("{}: row {}", path.display(), line + 2))?;
        let year = rec.get(i_year).and_then(|s| s.parse::<i32>().ok());
        let value = rec.get(i_value).and_then(|s| s.parse::<f64>().ok());
        match (year, value) {
            (Some(y), Some(v)) => {
                years.push(y);
                values.push(v);
            }
            _ => tracing::warn!(row = line + 2, "skipping row without a numeric year and value"),
        }
    }

    let Some(&start_year) = years.first() else {
        bail!("{}: no usable rows", path.display());
    };
    for w in years.windows(2) {
        let Some(next) = w[0].checked_add(1) else {
            bail!("{}: no year can follow {}", path.display(), w[0]);
        };
        if w[1] != next {
            bail!("{}: years must be consecutive, {} is followed by {}", path.display(), w[0], w[1]);
        }
    }
    tracing::info!(rows = values.len(), start_year, "loaded observations");
    Ok(Observations::try_new(start_year, values)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn csv_file(name: &str, body: &str) -> PathBuf {
        let dir = PathBuf::from("target/test_out");
        std::fs::create_dir_all(&dir).unwrap();
        let p = dir.join(name);
        std::fs::write(&p, body).unwrap();
        p
    }

    #[test]
    fn reads_columns_by_header() {
        let p = csv_file("obs_ok.csv", "Precipitation, Year\n192,1981\n185, 1982\nn/a,1983x\n201,1983\n");
        let obs = load_observations(&p).unwrap();
        assert_eq!(obs.start_year(), 1981);
        assert_eq!(obs.values(), &[192.0, 185.0, 201.0]);
    }

    #[test]
    fn gaps_in_years_are_rejected() {
        let p = csv_file("obs_gap.csv", "year,value\n1981,1\n1983,2\n");
        let msg = load_observations(&p).unwrap_err().to_string();
        assert!(msg.contains("1981 is followed by 1983"), "{msg}");
    }

    #[test]
    fn largest_year_does_not_overflow() {
        let p = csv_file("obs_max.csv", "year,value\n2147483647,1\n2147483647,2\n");
        let msg = load_observations(&p).unwrap_err().to_string();
        assert!(msg.contains("no year can follow 2147483647"), "{msg}");

        let p = csv_file("obs_max_last.csv", "year,value\n2147483646,1\n2147483647,2\n");
        assert_eq!(load_observations(&p).unwrap().end_year(), i32::MAX);
    }

    #[test]
    fn single_row_fails_like_the_mapper() {
        let p = csv_file("obs_one.csv", "year,value\n1981,1\n");
        let err = load_observations(&p).unwrap_err();
        assert_eq!(
            err.downcast_ref::<chart_core::ChartError>(),
            Some(&chart_core::ChartError::TooFewObservations { len: 1 })
        );
    }

    #[test]
    fn missing_columns_are_reported() {
        let p = csv_file("obs_cols.csv", "date,rain\n1981,1\n");
        assert!(load_observations(&p).unwrap_err().to_string().contains("need a year column"));
    }
}
