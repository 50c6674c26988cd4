//! Export the attendance report as CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;

use encontros_core::{Store, report};

pub fn run(store: &Store, output: Option<PathBuf>) -> Result<()> {
    let events = store.events()?;
    let attendances = store.attendances()?;

    let csv = report::attendance_report(&events, &attendances);
    let path = output
        .unwrap_or_else(|| PathBuf::from(report::report_filename(Local::now().date_naive())));

    std::fs::write(&path, &csv)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Exported {} events to {}", events.len(), path.display());

    Ok(())
}
