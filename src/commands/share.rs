//! Print or open the "add to Google Calendar" link for an event.

use anyhow::Result;

use encontros_core::{Store, share};

pub fn run(store: &Store, event_id: u64, open_in_browser: bool) -> Result<()> {
    let Some(event) = store.event(event_id)? else {
        anyhow::bail!("Event [{}] not found", event_id);
    };

    let url = share::google_calendar_url(&event);
    println!("{}", url);

    if open_in_browser {
        open::that(&url)?;
    }

    Ok(())
}
