use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use super::model::{Reading, ReadingStore};
use crate::error::{DataError, Result};

// Column positions in the PurpleAir export.
const ZIP_COL: usize = 1;
const TIME_COL: usize = 4;
const CONCENTRATION_COL: usize = 5;
const MIN_COLUMNS: usize = CONCENTRATION_COL + 1;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a reading store from a CSV file.
///
/// The header row is skipped. Nothing is returned unless every row parsed,
/// so a bad file never yields a partial store.
pub fn load_file(path: &Path) -> Result<ReadingStore> {
    debug!("opening {}", path.display());
    let file = File::open(path).map_err(csv::Error::from)?;
    let store = load_reader(file)?;
    info!("loaded {} readings from {}", store.len(), path.display());
    Ok(store)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse readings from any CSV byte source.
pub fn load_reader<R: Read>(source: R) -> Result<ReadingStore> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    let mut readings = Vec::new();

    for (i, result) in reader.records().enumerate() {
        // 1-based, counting the header as row 1
        let row = i + 2;
        let record = result?;

        if record.len() < MIN_COLUMNS {
            return Err(DataError::MissingColumns {
                row,
                found: record.len(),
            });
        }

        let raw = &record[CONCENTRATION_COL];
        let concentration = raw
            .trim()
            .parse::<f64>()
            .map_err(|source| DataError::Parse {
                row,
                value: raw.to_string(),
                source,
            })?;
        if !concentration.is_finite() || concentration < 0.0 {
            return Err(DataError::InvalidConcentration {
                row,
                value: concentration,
            });
        }

        readings.push(Reading::new(
            &record[ZIP_COL],
            &record[TIME_COL],
            concentration,
        ));
    }

    Ok(ReadingStore::from_readings(readings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str = "sensor,zip,lat,lon,time_of_day,pm25\n";

    #[test]
    fn loads_fixed_columns_and_skips_header() {
        let csv = format!(
            "{HEADER}a,11111,0,0,Morning,1.0\nb,11111,0,0,Morning,3.0\nc,22222,0,0,Evening,5.0\n"
        );
        let store = load_reader(csv.as_bytes()).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.zip_codes(), ["11111", "22222"]);
        assert_eq!(store.time_buckets(), ["Morning", "Evening"]);
        assert_eq!(store.readings()[2], Reading::new("22222", "Evening", 5.0));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = format!("{HEADER}a,11111,0,0,Night,2.5,extra,more\n");
        let store = load_reader(csv.as_bytes()).unwrap();
        assert_eq!(store.readings()[0].concentration, 2.5);
    }

    #[test]
    fn malformed_concentration_fails_with_row() {
        let csv = format!("{HEADER}a,11111,0,0,Night,2.5\nb,11111,0,0,Night,abc\n");
        match load_reader(csv.as_bytes()) {
            Err(DataError::Parse { row, value, .. }) => {
                assert_eq!(row, 3);
                assert_eq!(value, "abc");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_and_non_finite_concentrations() {
        for bad in ["-4.0", "NaN", "inf"] {
            let csv = format!("{HEADER}a,11111,0,0,Night,1.0\nb,11111,0,0,Night,{bad}\n");
            assert!(
                matches!(
                    load_reader(csv.as_bytes()),
                    Err(DataError::InvalidConcentration { row: 3, .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn zero_concentration_is_accepted() {
        let csv = format!("{HEADER}a,11111,0,0,Night,0\n");
        assert_eq!(load_reader(csv.as_bytes()).unwrap().readings()[0].concentration, 0.0);
    }

    #[test]
    fn short_row_fails() {
        let csv = format!("{HEADER}a,11111,0,0,Night\n");
        assert!(matches!(
            load_reader(csv.as_bytes()),
            Err(DataError::MissingColumns { row: 2, found: 5 })
        ));
    }

    #[test]
    fn header_only_file_is_empty() {
        let store = load_reader(HEADER.as_bytes()).unwrap();
        assert!(!store.is_loaded());
    }

    #[test]
    fn load_file_reads_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("purple_air.csv");
        fs::write(&path, format!("{HEADER}a,94028,0,0,Midday,0.0\n")).unwrap();
        let store = load_file(&path).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn missing_file_is_csv_error() {
        let dir = TempDir::new().unwrap();
        let err = load_file(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DataError::Csv(_)));
    }
}
