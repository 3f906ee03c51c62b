use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Write a synthetic PurpleAir export for trying out the viewer.
#[derive(Parser, Debug)]
struct Args {
    /// Output CSV path
    #[arg(short, long, default_value = "purple_air.csv")]
    out: PathBuf,

    /// Readings per (zip code, time of day) pair
    #[arg(short, long, default_value_t = 200)]
    per_pair: usize,
}

/// SplitMix64 stream; the same seed always yields the same file.
struct SensorNoise {
    state: u64,
}

impl SensorNoise {
    fn seeded(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_bits(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_bits() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Exponential draw with the given mean; never negative.
    fn exp(&mut self, mean: f64) -> f64 {
        let u = 1.0 - self.unit();
        -mean * u.ln()
    }
}

const ZIPS: [&str; 8] = [
    "94028", "94304", "94022", "94024", "94040", "94087", "94041", "95014",
];

// (label, hour of day, mean PM2.5)
const TIMES: [(&str, u32, f64); 4] = [
    ("Night", 2, 1.8),
    ("Midday", 12, 3.2),
    ("Morning", 8, 1.6),
    ("Evening", 19, 3.0),
];

fn main() -> Result<()> {
    let args = Args::parse();
    let mut noise = SensorNoise::seeded(42);

    let mut writer = csv::Writer::from_path(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    writer.write_record(["sensor_id", "zip_code", "lat", "lon", "time_of_day", "pm25", "hour"])?;

    let mut rows = 0usize;
    for i in 0..args.per_pair {
        for (z, &zip) in ZIPS.iter().enumerate() {
            let sensor = format!("PA-{zip}-{}", i % 3);
            let lat = format!("{:.4}", 37.3 + z as f64 * 0.02);
            let lon = format!("{:.4}", -122.1 - z as f64 * 0.01);
            for &(label, hour, mean) in &TIMES {
                // Each zip gets a slightly different baseline.
                let pm25 = format!("{:.2}", noise.exp(mean * (1.0 + z as f64 * 0.1)));
                let hour = hour.to_string();
                writer.write_record([
                    sensor.as_str(),
                    zip,
                    lat.as_str(),
                    lon.as_str(),
                    label,
                    pm25.as_str(),
                    hour.as_str(),
                ])?;
                rows += 1;
            }
        }
    }
    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {rows} readings ({} zip codes × {} times of day) to {}",
        ZIPS.len(),
        TIMES.len(),
        args.out.display()
    );
    Ok(())
}
