//! "Add to Google Calendar" deep links.

use url::Url;

use crate::event::Event;

const CALENDAR_RENDER_URL: &str = "https://calendar.google.com/calendar/render";

/// Build the calendar provider's "add event" template URL.
///
/// Events carry no time of day, so the link uses a synthetic 10:00-12:00
/// window in the attendee's local time (floating, no timezone suffix).
pub fn google_calendar_url(event: &Event) -> String {
    let day = event.date.format("%Y%m%d");
    let dates = format!("{day}T100000/{day}T120000");

    let url = Url::parse_with_params(
        CALENDAR_RENDER_URL,
        &[
            ("action", "TEMPLATE"),
            ("text", event.title.as_str()),
            ("dates", dates.as_str()),
            ("details", event.description.as_str()),
            ("location", event.venue.as_str()),
        ],
    )
    .expect("base URL is a valid constant");

    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event() -> Event {
        Event {
            id: 1,
            title: "Clube do Livro".to_string(),
            date: "2025-03-20".parse().unwrap(),
            venue: "Casa da Cultura".to_string(),
            description: "Encontro mensal do grupo".to_string(),
        }
    }

    #[test]
    fn test_link_carries_event_fields_and_synthetic_window() {
        let link = google_calendar_url(&make_event());
        let url = Url::parse(&link).unwrap();

        assert_eq!(url.host_str(), Some("calendar.google.com"));
        assert_eq!(url.path(), "/calendar/render");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("action".to_string(), "TEMPLATE".to_string())));
        assert!(pairs.contains(&("text".to_string(), "Clube do Livro".to_string())));
        assert!(pairs.contains(&(
            "dates".to_string(),
            "20250320T100000/20250320T120000".to_string()
        )));
        assert!(pairs.contains(&("location".to_string(), "Casa da Cultura".to_string())));
        assert!(pairs.contains(&(
            "details".to_string(),
            "Encontro mensal do grupo".to_string()
        )));
    }

    #[test]
    fn test_special_characters_are_percent_encoded() {
        let mut event = make_event();
        event.title = "Chá & bolo".to_string();

        let link = google_calendar_url(&event);
        assert!(!link.contains("Chá & bolo"));

        let url = Url::parse(&link).unwrap();
        let title = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(title, "Chá & bolo");
    }
}
