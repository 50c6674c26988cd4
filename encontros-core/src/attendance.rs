//! Attendance confirmation (RSVP) types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One confirmed attendance. Created once per RSVP, never updated.
///
/// `event_id` refers to an `Event`, but the store keeps no relation between
/// collections: confirmations for a deleted event stay behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    /// Store-assigned identifier
    pub id: u64,
    pub event_id: u64,
    /// Attendee display name, as typed by the attendee
    pub name: String,
    pub confirmed_at: DateTime<Utc>,
}

/// Input for confirming attendance; the store assigns the identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAttendance {
    pub event_id: u64,
    pub name: String,
    pub confirmed_at: DateTime<Utc>,
}

impl NewAttendance {
    pub(crate) fn into_attendance(self, id: u64) -> Attendance {
        Attendance {
            id,
            event_id: self.event_id,
            name: self.name,
            confirmed_at: self.confirmed_at,
        }
    }
}
