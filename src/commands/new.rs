//! Create an event.

use anyhow::Result;

use encontros_core::{NewEvent, Store};

pub fn run(
    store: &Store,
    title: String,
    date: String,
    venue: String,
    description: String,
) -> Result<()> {
    let date = date
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid date '{}', expected YYYY-MM-DD", date))?;

    let new = NewEvent {
        title,
        date,
        venue,
        description,
    };
    if let Some(field) = new.missing_field() {
        anyhow::bail!("Missing required field: {}", field);
    }

    let id = store.add_event(&new)?;
    println!("Created event [{}] {}", id, new.title);

    Ok(())
}
