//! Delete an event.

use anyhow::Result;
use dialoguer::Confirm;

use encontros_core::Store;

pub fn run(store: &Store, id: u64) -> Result<()> {
    let Some(event) = store.event(id)? else {
        anyhow::bail!("Event [{}] not found", id);
    };

    let confirmed = Confirm::new()
        .with_prompt(format!("Delete event \"{}\"?", event.title))
        .default(false)
        .interact()?;

    if !confirmed {
        println!("Aborted.");
        return Ok(());
    }

    store.delete_event(id)?;
    println!("Deleted event [{}] {}", id, event.title);

    Ok(())
}
