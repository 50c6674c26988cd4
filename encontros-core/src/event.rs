//! Meetup event types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A meetup event as stored in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Store-assigned identifier
    pub id: u64,
    pub title: String,
    /// Day of the meetup (events carry no time of day)
    pub date: NaiveDate,
    pub venue: String,
    pub description: String,
}

/// Input for creating an event; the store assigns the identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    pub venue: String,
    pub description: String,
}

impl NewEvent {
    /// First blank required field, if any. Date presence is guaranteed by
    /// the type.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            return Some("title");
        }
        if self.venue.trim().is_empty() {
            return Some("venue");
        }
        if self.description.trim().is_empty() {
            return Some("description");
        }
        None
    }

    pub(crate) fn into_event(self, id: u64) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            venue: self.venue,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_reports_first_blank() {
        let new = NewEvent {
            title: "  ".to_string(),
            date: "2025-03-20".parse().unwrap(),
            venue: "Casa da Cultura".to_string(),
            description: "Encontro mensal".to_string(),
        };
        assert_eq!(new.missing_field(), Some("title"));
    }

    #[test]
    fn test_missing_field_none_when_complete() {
        let new = NewEvent {
            title: "Clube do Livro".to_string(),
            date: "2025-03-20".parse().unwrap(),
            venue: "Casa da Cultura".to_string(),
            description: "Encontro mensal".to_string(),
        };
        assert_eq!(new.missing_field(), None);
    }
}
