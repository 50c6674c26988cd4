//! Overwrite an event's fields.

use anyhow::Result;

use encontros_core::Store;

pub fn run(
    store: &Store,
    id: u64,
    title: Option<String>,
    date: Option<String>,
    venue: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let Some(mut event) = store.event(id)? else {
        anyhow::bail!("Event [{}] not found", id);
    };

    if let Some(title) = title {
        event.title = title;
    }
    if let Some(raw) = date {
        event.date = raw
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid date '{}', expected YYYY-MM-DD", raw))?;
    }
    if let Some(venue) = venue {
        event.venue = venue;
    }
    if let Some(description) = description {
        event.description = description;
    }

    if event.title.trim().is_empty()
        || event.venue.trim().is_empty()
        || event.description.trim().is_empty()
    {
        anyhow::bail!("Fields cannot be blank");
    }

    store.update_event(&event)?;
    println!("Updated event [{}] {}", event.id, event.title);

    Ok(())
}
