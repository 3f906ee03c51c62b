/// Data layer: readings, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///   purple_air.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ReadingStore
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ ReadingStore  │  Vec<Reading>, zip / time labels
///   └──────────────┘
///        │                    │
///        ▼                    ▼
///   ┌──────────┐        ┌──────────┐
///   │  filter   │        │  stats    │  (zip, time) → min / avg / max
///   └──────────┘        └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
