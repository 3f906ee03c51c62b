use std::collections::HashSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Reading – one row of the sensor CSV
// ---------------------------------------------------------------------------

/// A single particulate reading for a zip code at a time of day.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub zip_code: String,
    /// Time-of-day bucket label, e.g. `Morning`.
    pub time_bucket: String,
    /// PM2.5 concentration in µg/m³.
    pub concentration: f64,
}

impl Reading {
    pub fn new(
        zip_code: impl Into<String>,
        time_bucket: impl Into<String>,
        concentration: f64,
    ) -> Self {
        Self {
            zip_code: zip_code.into(),
            time_bucket: time_bucket.into(),
            concentration,
        }
    }
}

// ---------------------------------------------------------------------------
// ReadingStore – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with its derived label sets.
///
/// Both label lists keep first-seen order so the table and the filter menu
/// list things the way the file does.
#[derive(Debug, Clone, Default)]
pub struct ReadingStore {
    readings: Vec<Reading>,
    zip_codes: Vec<String>,
    time_buckets: Vec<String>,
}

impl ReadingStore {
    /// Build label indices from the loaded readings.
    pub fn from_readings(readings: Vec<Reading>) -> Self {
        let mut seen_zips: HashSet<&str> = HashSet::new();
        let mut seen_times: HashSet<&str> = HashSet::new();
        let mut zip_codes = Vec::new();
        let mut time_buckets = Vec::new();

        for r in &readings {
            if seen_zips.insert(&r.zip_code) {
                zip_codes.push(r.zip_code.clone());
            }
            if seen_times.insert(&r.time_bucket) {
                time_buckets.push(r.time_bucket.clone());
            }
        }

        ReadingStore {
            readings,
            zip_codes,
            time_buckets,
        }
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Distinct zip codes in order of first occurrence.
    pub fn zip_codes(&self) -> &[String] {
        &self.zip_codes
    }

    /// Distinct time buckets in order of first occurrence.
    pub fn time_buckets(&self) -> &[String] {
        &self.time_buckets
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// True once at least one reading is present.
    pub fn is_loaded(&self) -> bool {
        !self.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Statistic selector and result triple
// ---------------------------------------------------------------------------

/// Which aggregate a table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Min,
    Avg,
    Max,
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statistic::Min => write!(f, "Minimum"),
            Statistic::Avg => write!(f, "Average"),
            Statistic::Max => write!(f, "Maximum"),
        }
    }
}

/// Min / mean / max of the concentrations for one (zip, time) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

impl Stats {
    pub fn get(&self, stat: Statistic) -> f64 {
        match stat {
            Statistic::Min => self.min,
            Statistic::Avg => self.avg,
            Statistic::Max => self.max,
        }
    }
}
