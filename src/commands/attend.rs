//! Confirm attendance at an event.

use anyhow::Result;
use chrono::Utc;

use encontros_core::{NewAttendance, Store};

pub fn run(store: &Store, event_id: u64, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Please provide your name");
    }

    let Some(event) = store.event(event_id)? else {
        anyhow::bail!("Event [{}] not found", event_id);
    };

    store.add_attendance(&NewAttendance {
        event_id,
        name: name.to_string(),
        confirmed_at: Utc::now(),
    })?;

    println!("Attendance confirmed for {} at \"{}\"", name, event.title);

    Ok(())
}
