//! Attendance collection operations.

use redb::{ReadableMultimapTable, ReadableTable};

use super::{ATTENDANCES, ATTENDANCES_BY_EVENT, META, Store, next_id};
use crate::attendance::{Attendance, NewAttendance};
use crate::error::StoreResult;

impl Store {
    /// Insert a confirmation and return its store-assigned identifier.
    ///
    /// Neither the referenced event's existence nor duplicate confirmations
    /// are checked: the collections keep no relation, and "one confirmation
    /// per person" is only ever nudged at the UI layer.
    pub fn add_attendance(&self, new: &NewAttendance) -> StoreResult<u64> {
        let txn = self.db.begin_write()?;
        let id;
        {
            let mut meta = txn.open_table(META)?;
            id = next_id(&mut meta, "attendances")?;

            let attendance = new.clone().into_attendance(id);
            let mut attendances = txn.open_table(ATTENDANCES)?;
            attendances.insert(id, serde_json::to_vec(&attendance)?.as_slice())?;

            let mut by_event = txn.open_multimap_table(ATTENDANCES_BY_EVENT)?;
            by_event.insert(attendance.event_id, id)?;
        }
        txn.commit()?;
        Ok(id)
    }

    /// All confirmations in key (insertion) order.
    pub fn attendances(&self) -> StoreResult<Vec<Attendance>> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(ATTENDANCES)?;

        let mut attendances = Vec::new();
        for entry in table.iter()? {
            let (_, value) = entry?;
            attendances.push(serde_json::from_slice(value.value())?);
        }
        Ok(attendances)
    }

    /// Confirmations for one event, via the event-id index.
    pub fn attendances_for_event(&self, event_id: u64) -> StoreResult<Vec<Attendance>> {
        let txn = self.db.begin_read()?;
        let index = txn.open_multimap_table(ATTENDANCES_BY_EVENT)?;
        let table = txn.open_table(ATTENDANCES)?;

        let mut attendances = Vec::new();
        for id in index.get(event_id)? {
            let id = id?.value();
            if let Some(value) = table.get(id)? {
                attendances.push(serde_json::from_slice(value.value())?);
            }
        }
        Ok(attendances)
    }

    /// Remove a confirmation. Deleting an absent id is a silent no-op.
    pub fn delete_attendance(&self, id: u64) -> StoreResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut attendances = txn.open_table(ATTENDANCES)?;
            let mut by_event = txn.open_multimap_table(ATTENDANCES_BY_EVENT)?;

            let previous = match attendances.remove(id)? {
                Some(value) => Some(serde_json::from_slice::<Attendance>(value.value())?),
                None => None,
            };

            if let Some(previous) = previous {
                by_event.remove(previous.event_id, id)?;
            }
        }
        txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::NewEvent;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn open_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(&dir.path().join("test.redb")).unwrap();
        (dir, store)
    }

    fn make_attendance(event_id: u64, name: &str) -> NewAttendance {
        NewAttendance {
            event_id,
            name: name.to_string(),
            confirmed_at: Utc.with_ymd_and_hms(2025, 3, 18, 21, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_for_event_returns_exact_set_under_interleaving() {
        let (_dir, store) = open_store();

        store.add_attendance(&make_attendance(1, "Ana")).unwrap();
        store.add_attendance(&make_attendance(2, "Bea")).unwrap();
        store.add_attendance(&make_attendance(1, "Carla")).unwrap();
        store.add_attendance(&make_attendance(3, "Duda")).unwrap();
        store.add_attendance(&make_attendance(1, "Elisa")).unwrap();

        let names: Vec<String> = store
            .attendances_for_event(1)
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["Ana", "Carla", "Elisa"]);

        assert!(store.attendances_for_event(99).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_confirmations_are_accepted() {
        let (_dir, store) = open_store();

        let first = store.add_attendance(&make_attendance(1, "Ana")).unwrap();
        let second = store.add_attendance(&make_attendance(1, "Ana")).unwrap();

        assert_ne!(first, second);
        assert_eq!(store.attendances_for_event(1).unwrap().len(), 2);
    }

    #[test]
    fn test_referenced_event_is_not_required() {
        let (_dir, store) = open_store();

        // No event with id 42 exists; the confirmation is stored anyway.
        let id = store.add_attendance(&make_attendance(42, "Ana")).unwrap();
        assert_eq!(store.attendances_for_event(42).unwrap()[0].id, id);
    }

    #[test]
    fn test_delete_removes_record_and_index_entry() {
        let (_dir, store) = open_store();

        let id = store.add_attendance(&make_attendance(1, "Ana")).unwrap();
        let keep = store.add_attendance(&make_attendance(1, "Bea")).unwrap();

        store.delete_attendance(id).unwrap();

        let remaining: Vec<u64> = store
            .attendances_for_event(1)
            .unwrap()
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(remaining, vec![keep]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let (_dir, store) = open_store();
        store.delete_attendance(999).unwrap();
    }

    #[test]
    fn test_deleting_event_leaves_confirmations_behind() {
        let (_dir, store) = open_store();

        let event_id = store
            .add_event(&NewEvent {
                title: "Clube do Livro".to_string(),
                date: "2025-03-20".parse().unwrap(),
                venue: "Casa da Cultura".to_string(),
                description: "Encontro mensal".to_string(),
            })
            .unwrap();
        store.add_attendance(&make_attendance(event_id, "Ana")).unwrap();

        store.delete_event(event_id).unwrap();

        // No cascade: the orphaned confirmation stays queryable.
        assert_eq!(store.attendances_for_event(event_id).unwrap().len(), 1);
        assert_eq!(store.attendances().unwrap().len(), 1);
    }
}
