//! Embedded record store for events, attendance confirmations and the
//! admin credential.
//!
//! Wraps a single-file `redb` database behind typed per-collection
//! operations. Each operation opens its own transaction scoped to one
//! collection and its lookup index; there are no cross-collection
//! transactions, so callers composing multi-step flows get last-write-wins
//! semantics.

mod attendance;
mod events;
mod users;

use std::path::Path;

use redb::{Database, MultimapTableDefinition, ReadableTable, Table, TableDefinition};

use crate::error::StoreResult;
use crate::user::User;

/// Event records: id -> Event (serialized)
const EVENTS: TableDefinition<u64, &[u8]> = TableDefinition::new("events");

/// Date index: "%Y-%m-%d" -> ids of events on that day
const EVENTS_BY_DATE: MultimapTableDefinition<&str, u64> =
    MultimapTableDefinition::new("events_by_date");

/// Attendance records: id -> Attendance (serialized)
const ATTENDANCES: TableDefinition<u64, &[u8]> = TableDefinition::new("attendances");

/// Event index: event id -> attendance ids
const ATTENDANCES_BY_EVENT: MultimapTableDefinition<u64, u64> =
    MultimapTableDefinition::new("attendances_by_event");

/// User records: id -> User (serialized)
const USERS: TableDefinition<u64, &[u8]> = TableDefinition::new("users");

/// Unique username index: username -> user id
const USERS_BY_USERNAME: TableDefinition<&str, u64> = TableDefinition::new("users_by_username");

/// Per-collection key counters. Counters only move forward, so an id is
/// never reissued after its record is deleted.
const META: TableDefinition<&str, u64> = TableDefinition::new("meta");

/// Credential seeded when the database is first created.
const SEED_USERNAME: &str = "admin";
const SEED_PASSWORD: &str = "admin123";

/// Handle to the opened record store.
///
/// Opening the store is the initialization step: `open` provisions the
/// schema and seeds the admin credential before returning, so every method
/// on the handle finds the collections in place. The server keeps one
/// `Store` in shared state for the life of the process; the CLI opens one
/// per invocation.
pub struct Store {
    db: Database,
}

impl Store {
    /// Open the database at `path`, creating it (and its parent directory)
    /// if absent.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;
        let store = Store { db };
        store.provision()?;
        Ok(store)
    }

    /// Create all tables and insert the seed credential on first creation.
    /// Idempotent: an already-provisioned database is left untouched.
    fn provision(&self) -> StoreResult<()> {
        let txn = self.db.begin_write()?;
        {
            txn.open_table(EVENTS)?;
            txn.open_multimap_table(EVENTS_BY_DATE)?;
            txn.open_table(ATTENDANCES)?;
            txn.open_multimap_table(ATTENDANCES_BY_EVENT)?;

            let mut meta = txn.open_table(META)?;
            let mut users = txn.open_table(USERS)?;
            let mut by_username = txn.open_table(USERS_BY_USERNAME)?;

            let seeded = by_username.get(SEED_USERNAME)?.is_some();
            if !seeded {
                let id = next_id(&mut meta, "users")?;
                let user = User {
                    id,
                    username: SEED_USERNAME.to_string(),
                    password: SEED_PASSWORD.to_string(),
                };
                users.insert(id, serde_json::to_vec(&user)?.as_slice())?;
                by_username.insert(SEED_USERNAME, id)?;
            }
        }
        txn.commit()?;
        Ok(())
    }
}

/// Issue the next identifier for a collection and advance its counter.
fn next_id(meta: &mut Table<'_, &'static str, u64>, collection: &str) -> StoreResult<u64> {
    let next = meta.get(collection)?.map(|guard| guard.value()).unwrap_or(1);
    meta.insert(collection, next + 1)?;
    Ok(next)
}

/// Index key for a date: the ISO day string.
fn date_key(date: &chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data").join("test.redb");
        Store::open(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_seed_survives_reopen_without_duplicates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.redb");

        {
            let store = Store::open(&path).unwrap();
            assert!(store.validate_user("admin", "admin123").unwrap());
        }

        // Reopening must not reseed or disturb the credential.
        let store = Store::open(&path).unwrap();
        assert!(store.validate_user("admin", "admin123").unwrap());

        let txn = store.db.begin_read().unwrap();
        let users = txn.open_table(USERS).unwrap();
        assert_eq!(users.iter().unwrap().count(), 1);
    }
}
