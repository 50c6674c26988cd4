use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use encontros_core::Store;

use crate::error::ServerError;

/// Shared application state: the opened store and the admin session flag.
///
/// The session is a single process-wide boolean: one admin, no tokens, no
/// expiry. Logging in from any client marks the whole process logged in.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    admin: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        AppState {
            store: Arc::new(store),
            admin: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn log_in(&self) {
        self.admin.store(true, Ordering::Relaxed);
    }

    pub fn log_out(&self) {
        self.admin.store(false, Ordering::Relaxed);
    }

    pub fn is_admin(&self) -> bool {
        self.admin.load(Ordering::Relaxed)
    }

    /// Guard for admin-only routes.
    pub fn require_admin(&self) -> Result<(), ServerError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(ServerError::Unauthorized)
        }
    }
}
