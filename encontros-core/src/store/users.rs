//! Login check against the user collection.

use redb::ReadableTable;

use super::{Store, USERS, USERS_BY_USERNAME};
use crate::error::StoreResult;
use crate::user::User;

impl Store {
    /// Check a credential pair against the user collection.
    ///
    /// Resolves `false` both for an unknown username and for a wrong
    /// password; only a storage-level fault is an error. The comparison is
    /// plain byte equality on the stored plaintext password.
    pub fn validate_user(&self, username: &str, password: &str) -> StoreResult<bool> {
        let txn = self.db.begin_read()?;
        let index = txn.open_table(USERS_BY_USERNAME)?;
        let users = txn.open_table(USERS)?;

        let id = match index.get(username)? {
            Some(guard) => guard.value(),
            None => return Ok(false),
        };

        match users.get(id)? {
            Some(value) => {
                let user: User = serde_json::from_slice(value.value())?;
                Ok(user.password == password)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(&dir.path().join("test.redb")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_seed_credential_validates() {
        let (_dir, store) = open_store();
        assert!(store.validate_user("admin", "admin123").unwrap());
    }

    #[test]
    fn test_wrong_password_is_false() {
        let (_dir, store) = open_store();
        assert!(!store.validate_user("admin", "wrong").unwrap());
    }

    #[test]
    fn test_unknown_user_is_false_not_an_error() {
        let (_dir, store) = open_store();
        assert!(!store.validate_user("nouser", "anything").unwrap());
    }
}
