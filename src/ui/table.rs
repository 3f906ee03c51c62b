use log::debug;

use crate::data::filter::ZipFilter;
use crate::data::model::{ReadingStore, Statistic};
use crate::data::stats::cross_table_statistics;
use crate::error::{DataError, Result};

const LABEL_WIDTH: usize = 8;
const CELL_WIDTH: usize = 9;
const MISSING: &str = "N/A";

// ---------------------------------------------------------------------------
// Cross table: active zip codes × time buckets
// ---------------------------------------------------------------------------

/// Render `stat` for every active zip code (rows) and every time bucket
/// (columns) as a fixed-width text grid.
///
/// Columns are never narrowed by the filter, so a bucket with no readings
/// for any active zip still shows up as a column of `N/A`.
pub fn render_table(store: &ReadingStore, filter: &ZipFilter, stat: Statistic) -> Result<String> {
    if store.is_empty() {
        return Err(DataError::EmptyDataset);
    }

    let times = store.time_buckets();
    let zips = filter.active_keys();
    debug!("rendering {stat} table: {} rows × {} columns", zips.len(), times.len());

    let mut out = String::from("\n");
    out.push_str(&" ".repeat(LABEL_WIDTH));
    for time in times {
        out.push_str(&format!("{time:>CELL_WIDTH$}"));
    }
    out.push('\n');

    for zip in zips {
        out.push_str(&format!("{zip:<LABEL_WIDTH$}"));
        for time in times {
            let cell = match cross_table_statistics(store, zip, time) {
                Ok(st) => format!("{:>CELL_WIDTH$.2}", st.get(stat)),
                Err(DataError::NoMatchingItems { .. }) => format!("{MISSING:>CELL_WIDTH$}"),
                Err(e) => return Err(e),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }

    Ok(out)
}
