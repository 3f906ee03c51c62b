use super::model::{ReadingStore, Stats};
use crate::error::{DataError, Result};

/// Min, mean and max concentration over every reading matching both
/// `zip` and `time` exactly.
pub fn cross_table_statistics(store: &ReadingStore, zip: &str, time: &str) -> Result<Stats> {
    if store.is_empty() {
        return Err(DataError::EmptyDataset);
    }

    let mut count = 0usize;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for r in store
        .readings()
        .iter()
        .filter(|r| r.zip_code == zip && r.time_bucket == time)
    {
        count += 1;
        sum += r.concentration;
        min = min.min(r.concentration);
        max = max.max(r.concentration);
    }

    if count == 0 {
        return Err(DataError::NoMatchingItems {
            zip: zip.to_string(),
            time: time.to_string(),
        });
    }

    Ok(Stats {
        min,
        avg: sum / count as f64,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Reading;

    fn rows() -> Vec<Reading> {
        vec![
            Reading::new("11111", "Morning", 1.0),
            Reading::new("11111", "Morning", 3.0),
            Reading::new("22222", "Evening", 5.0),
            Reading::new("11111", "Evening", 0.5),
            Reading::new("11111", "Morning", 2.0),
        ]
    }

    #[test]
    fn min_avg_max_over_matching_pair() {
        let store = ReadingStore::from_readings(rows());
        let st = cross_table_statistics(&store, "11111", "Morning").unwrap();
        assert_eq!(
            st,
            Stats {
                min: 1.0,
                avg: 2.0,
                max: 3.0,
            }
        );
    }

    #[test]
    fn single_reading_gives_same_value_three_times() {
        let store = ReadingStore::from_readings(rows());
        let st = cross_table_statistics(&store, "22222", "Evening").unwrap();
        assert_eq!(
            st,
            Stats {
                min: 5.0,
                avg: 5.0,
                max: 5.0,
            }
        );
    }

    #[test]
    fn order_of_readings_does_not_matter() {
        let forward = ReadingStore::from_readings(rows());
        let mut reversed = rows();
        reversed.reverse();
        let reversed = ReadingStore::from_readings(reversed);
        for (zip, time) in [("11111", "Morning"), ("11111", "Evening"), ("22222", "Evening")] {
            assert_eq!(
                cross_table_statistics(&forward, zip, time).unwrap(),
                cross_table_statistics(&reversed, zip, time).unwrap()
            );
        }
    }

    #[test]
    fn unmatched_pair_is_no_matching_items() {
        let store = ReadingStore::from_readings(rows());
        assert!(matches!(
            cross_table_statistics(&store, "22222", "Morning"),
            Err(DataError::NoMatchingItems { .. })
        ));
        // exact, case-sensitive match
        assert!(matches!(
            cross_table_statistics(&store, "11111", "morning"),
            Err(DataError::NoMatchingItems { .. })
        ));
    }

    #[test]
    fn empty_store_is_empty_dataset() {
        let store = ReadingStore::default();
        assert!(matches!(
            cross_table_statistics(&store, "11111", "Morning"),
            Err(DataError::EmptyDataset)
        ));
    }
}
