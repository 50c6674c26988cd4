//! List confirmations for an event.

use anyhow::Result;
use owo_colors::OwoColorize;

use encontros_core::Store;

pub fn run(store: &Store, event_id: u64) -> Result<()> {
    let Some(event) = store.event(event_id)? else {
        anyhow::bail!("Event [{}] not found", event_id);
    };

    let attendances = store.attendances_for_event(event_id)?;

    println!("{}", event.title.bold());

    if attendances.is_empty() {
        println!("{}", "No confirmations yet".dimmed());
        return Ok(());
    }

    for attendance in &attendances {
        let when = attendance.confirmed_at.format("%Y-%m-%d %H:%M").to_string();
        println!("  {} {}", attendance.name, when.dimmed());
    }
    println!("\n{} confirmed", attendances.len());

    Ok(())
}
