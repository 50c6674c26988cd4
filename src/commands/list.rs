//! List events grouped by day.

use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use encontros_core::Store;

pub fn run(store: &Store, date: Option<&str>) -> Result<()> {
    let mut events = match date {
        Some(raw) => {
            let date: NaiveDate = raw
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid date '{}', expected YYYY-MM-DD", raw))?;
            store.events_on(date)?
        }
        None => store.events()?,
    };

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    events.sort_by_key(|e| e.date);

    let mut current_date: Option<NaiveDate> = None;
    for event in &events {
        if current_date != Some(event.date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", event.date.format("%A, %d %B %Y").to_string().bold());
            current_date = Some(event.date);
        }

        let confirmed = store.attendances_for_event(event.id)?.len();
        let tag = format!("[{}]", event.id);
        let venue = format!("@ {}", event.venue);
        let count = format!("({} confirmed)", confirmed);
        println!("  {} {} {} {}", tag.dimmed(), event.title, venue.dimmed(), count.dimmed());
    }

    Ok(())
}
