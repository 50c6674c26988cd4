//! CSV attendance report.
//!
//! Column headers are the ones the group's spreadsheet workflow expects,
//! hence Portuguese.

use chrono::NaiveDate;

use crate::attendance::Attendance;
use crate::event::Event;

const HEADER: &str = "Título,Data,Local,Descrição,Total Presenças,Participantes";

/// Build the attendance report.
///
/// One row per event in the given order. The participants column joins the
/// event's confirmation names with `"; "` in the given order; the count
/// column is their number.
pub fn attendance_report(events: &[Event], attendances: &[Attendance]) -> String {
    let mut lines = vec![HEADER.to_string()];

    for event in events {
        let confirmed: Vec<&Attendance> = attendances
            .iter()
            .filter(|a| a.event_id == event.id)
            .collect();
        let participants = confirmed
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join("; ");

        let row = [
            escape(&event.title),
            event.date.format("%Y-%m-%d").to_string(),
            escape(&event.venue),
            escape(&event.description),
            confirmed.len().to_string(),
            escape(&participants),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Default download filename, stamped with the given day.
pub fn report_filename(date: NaiveDate) -> String {
    format!("encontros-{}.csv", date.format("%Y-%m-%d"))
}

/// Quote a field when it contains a separator, a quote or a line break.
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_event(id: u64, title: &str) -> Event {
        Event {
            id,
            title: title.to_string(),
            date: "2025-03-20".parse().unwrap(),
            venue: "Casa da Cultura".to_string(),
            description: "Encontro mensal".to_string(),
        }
    }

    fn make_attendance(id: u64, event_id: u64, name: &str) -> Attendance {
        Attendance {
            id,
            event_id,
            name: name.to_string(),
            confirmed_at: Utc.with_ymd_and_hms(2025, 3, 18, 21, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_counts_and_participants_per_event() {
        let events = vec![make_event(1, "Clube do Livro"), make_event(2, "Oficina")];
        let attendances = vec![
            make_attendance(1, 2, "Ana"),
            make_attendance(2, 2, "Bea"),
        ];

        let csv = attendance_report(&events, &attendances);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert_eq!(
            lines[1],
            "Clube do Livro,2025-03-20,Casa da Cultura,Encontro mensal,0,"
        );
        assert_eq!(
            lines[2],
            "Oficina,2025-03-20,Casa da Cultura,Encontro mensal,2,Ana; Bea"
        );
    }

    #[test]
    fn test_header_only_when_no_events() {
        let csv = attendance_report(&[], &[]);
        assert_eq!(csv, HEADER);
    }

    #[test]
    fn test_fields_with_separators_are_quoted() {
        let mut event = make_event(1, "Chá, bolo e \"prosa\"");
        event.venue = "Rua A, 12".to_string();

        let csv = attendance_report(&[event], &[]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "\"Chá, bolo e \"\"prosa\"\"\",2025-03-20,\"Rua A, 12\",Encontro mensal,0,"
        );
    }

    #[test]
    fn test_report_filename_is_dated() {
        let date: NaiveDate = "2025-03-20".parse().unwrap();
        assert_eq!(report_filename(date), "encontros-2025-03-20.csv");
    }
}
