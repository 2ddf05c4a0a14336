//! CSV export of the daily breakdown

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::core::error::Result;
use crate::report::daily::DailyBreakdown;

/// Write rows with header `timestamp,Fail,Miss,Success`
pub fn write_breakdown<W: Write>(writer: W, rows: &[DailyBreakdown]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn export_breakdown(path: &Path, rows: &[DailyBreakdown]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_breakdown(file, rows)?;
    info!("Data ready for visualization can be found in {}", path.display());
    Ok(())
}
