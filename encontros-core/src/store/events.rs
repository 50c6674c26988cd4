//! Event collection operations.

use chrono::NaiveDate;
use redb::{ReadableMultimapTable, ReadableTable};

use super::{EVENTS, EVENTS_BY_DATE, META, Store, date_key, next_id};
use crate::error::StoreResult;
use crate::event::{Event, NewEvent};

impl Store {
    /// Insert a new event and return its store-assigned identifier.
    pub fn add_event(&self, new: &NewEvent) -> StoreResult<u64> {
        let txn = self.db.begin_write()?;
        let id;
        {
            let mut meta = txn.open_table(META)?;
            id = next_id(&mut meta, "events")?;

            let event = new.clone().into_event(id);
            let mut events = txn.open_table(EVENTS)?;
            events.insert(id, serde_json::to_vec(&event)?.as_slice())?;

            let mut by_date = txn.open_multimap_table(EVENTS_BY_DATE)?;
            by_date.insert(date_key(&event.date).as_str(), id)?;
        }
        txn.commit()?;
        Ok(id)
    }

    /// All events in key (insertion) order.
    pub fn events(&self) -> StoreResult<Vec<Event>> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(EVENTS)?;

        let mut events = Vec::new();
        for entry in table.iter()? {
            let (_, value) = entry?;
            events.push(serde_json::from_slice(value.value())?);
        }
        Ok(events)
    }

    /// Look up one event; `None` when absent.
    pub fn event(&self, id: u64) -> StoreResult<Option<Event>> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(EVENTS)?;

        match table.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Events on one day, via the date index rather than a scan.
    pub fn events_on(&self, date: NaiveDate) -> StoreResult<Vec<Event>> {
        let txn = self.db.begin_read()?;
        let index = txn.open_multimap_table(EVENTS_BY_DATE)?;
        let table = txn.open_table(EVENTS)?;

        let mut events = Vec::new();
        for id in index.get(date_key(&date).as_str())? {
            let id = id?.value();
            if let Some(value) = table.get(id)? {
                events.push(serde_json::from_slice(value.value())?);
            }
        }
        Ok(events)
    }

    /// Full-record upsert by identifier. The previous version is overwritten
    /// wholesale; there is no version check, so concurrent editors get
    /// last-write-wins.
    pub fn update_event(&self, event: &Event) -> StoreResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut events = txn.open_table(EVENTS)?;
            let mut by_date = txn.open_multimap_table(EVENTS_BY_DATE)?;

            let previous = match events.insert(event.id, serde_json::to_vec(event)?.as_slice())? {
                Some(value) => Some(serde_json::from_slice::<Event>(value.value())?),
                None => None,
            };

            if let Some(previous) = previous {
                if previous.date != event.date {
                    by_date.remove(date_key(&previous.date).as_str(), event.id)?;
                }
            }
            by_date.insert(date_key(&event.date).as_str(), event.id)?;

            // Upserting a fresh id must keep the key counter ahead of it.
            let mut meta = txn.open_table(META)?;
            let next = meta.get("events")?.map(|guard| guard.value()).unwrap_or(1);
            if event.id >= next {
                meta.insert("events", event.id + 1)?;
            }
        }
        txn.commit()?;
        Ok(())
    }

    /// Remove an event. Deleting an absent id is a silent no-op.
    /// Attendance confirmations referencing the event are left in place.
    pub fn delete_event(&self, id: u64) -> StoreResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut events = txn.open_table(EVENTS)?;
            let mut by_date = txn.open_multimap_table(EVENTS_BY_DATE)?;

            let previous = match events.remove(id)? {
                Some(value) => Some(serde_json::from_slice::<Event>(value.value())?),
                None => None,
            };

            if let Some(previous) = previous {
                by_date.remove(date_key(&previous.date).as_str(), id)?;
            }
        }
        txn.commit()?;
        Ok(())
    }
}
