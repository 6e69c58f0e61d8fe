//! ICS-backed calendar store: the concrete external-calendar collaborator.
//!
//! Events are recorded locally under `~/.reelnight/events.json`, exported as
//! ICS, and optionally pushed through `gcalcli import`.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use reelnight_core::{
    CalendarStore, EngineError, EngineResult, EventId, EventRequest, EventSummary,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;

use crate::state::events_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredEvent {
    pub id: String,
    pub title: String,
    /// Local wall-clock times; the profile timezone applies.
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub notes: String,
    pub rrule: Option<String>,
    #[serde(default)]
    pub reminder_lead_min: Vec<i64>,
}

/// File-backed `CalendarStore`. Every mutation is written through to disk so
/// a later `export-ics` or `upcoming` sees it.
pub struct IcsCalendarStore {
    events: Vec<StoredEvent>,
}

impl IcsCalendarStore {
    pub fn load() -> Result<Self> {
        let p = events_path()?;
        let events = if p.exists() {
            let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
            serde_json::from_str(&s)?
        } else {
            Vec::new()
        };
        Ok(Self { events })
    }

    pub fn events(&self) -> &[StoredEvent] {
        &self.events
    }

    fn save(&self) -> Result<()> {
        let p = events_path()?;
        let json = serde_json::to_string_pretty(&self.events)?;
        fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
        Ok(())
    }

    fn next_id(&self) -> String {
        let max = self
            .events
            .iter()
            .filter_map(|e| e.id.strip_prefix("mn-")?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        format!("mn-{}", max + 1)
    }
}

fn store_err(e: impl std::fmt::Display) -> EngineError {
    EngineError::Calendar(e.to_string())
}

impl CalendarStore for IcsCalendarStore {
    fn create_event(&mut self, request: &EventRequest) -> EngineResult<EventId> {
        let id = self.next_id();
        self.events.push(StoredEvent {
            id: id.clone(),
            title: request.title.clone(),
            start: request.start,
            end: request.end,
            notes: request.notes.clone(),
            rrule: request.recurrence.map(|r| r.to_rrule()),
            reminder_lead_min: request.reminder_lead_min.clone(),
        });
        self.save().map_err(store_err)?;
        Ok(EventId(id))
    }

    fn update_start(&mut self, id: &EventId, new_start: NaiveDateTime) -> EngineResult<()> {
        let Some(event) = self.events.iter_mut().find(|e| e.id == id.0) else {
            return Err(EngineError::Calendar(format!("no such event: {}", id.0)));
        };
        let length = event.end - event.start;
        event.start = new_start;
        event.end = new_start + length;
        self.save().map_err(store_err)
    }

    fn delete_event(&mut self, id: &EventId) -> EngineResult<()> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id.0);
        if self.events.len() == before {
            return Err(EngineError::Calendar(format!("no such event: {}", id.0)));
        }
        self.save().map_err(store_err)
    }

    fn upcoming(&self, limit: usize) -> EngineResult<Vec<EventSummary>> {
        let mut sorted: Vec<&StoredEvent> = self.events.iter().collect();
        sorted.sort_by_key(|e| e.start);
        Ok(sorted
            .into_iter()
            .take(limit)
            .map(|e| EventSummary {
                id: EventId(e.id.clone()),
                title: e.title.clone(),
                start: e.start,
            })
            .collect())
    }
}

fn to_utc(local: NaiveDateTime, tz: Tz) -> Result<DateTime<Utc>> {
    use chrono::TimeZone;
    tz.from_local_datetime(&local)
        .single()
        .with_context(|| format!("ambiguous or invalid local time (DST?): {local} {tz}"))
        .map(|dt| dt.with_timezone(&Utc))
}

/// Emit a minimal ICS calendar with VEVENT blocks, RRULEs, and VALARM
/// reminders. DTSTART/DTEND are UTC.
pub fn events_to_ics(events: &[StoredEvent], tz: Tz) -> Result<String> {
    let mut s = String::new();
    s.push_str("BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:-//Reelnight//EN\n");

    for e in events {
        let dtstart = to_utc(e.start, tz)?.format("%Y%m%dT%H%M%SZ");
        let dtend = to_utc(e.end, tz)?.format("%Y%m%dT%H%M%SZ");

        s.push_str("BEGIN:VEVENT\n");
        s.push_str(&format!("UID:{}@reelnight\n", e.id));
        s.push_str(&format!("DTSTART:{}\n", dtstart));
        s.push_str(&format!("DTEND:{}\n", dtend));
        s.push_str(&format!("SUMMARY:{}\n", escape_ics(&e.title)));
        s.push_str(&format!("DESCRIPTION:{}\n", escape_ics(&e.notes)));
        if let Some(rrule) = &e.rrule {
            s.push_str(&format!("RRULE:{}\n", rrule));
        }
        for lead in &e.reminder_lead_min {
            s.push_str("BEGIN:VALARM\nACTION:DISPLAY\nDESCRIPTION:Movie night reminder\n");
            s.push_str(&format!("TRIGGER:-PT{}M\n", lead));
            s.push_str("END:VALARM\n");
        }
        s.push_str("END:VEVENT\n");
    }

    s.push_str("END:VCALENDAR\n");
    Ok(s)
}

fn escape_ics(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}

/// Push ICS to Google Calendar using gcalcli import.
///
/// Requires `gcalcli` installed and authenticated on the machine.
pub fn push_ics_via_gcalcli(ics: &str, calendar: Option<&str>) -> Result<()> {
    if which::which("gcalcli").is_err() {
        bail!(
            "gcalcli is not installed. Install it, authenticate, then retry.\n\nmacOS (brew):  brew install gcalcli\nUbuntu (pipx): pipx install gcalcli\n\nOr use: reelnight export-ics > movienight.ics"
        );
    }

    let mut cmd = std::process::Command::new("gcalcli");
    cmd.arg("import");
    if let Some(cal) = calendar {
        cmd.args(["--calendar", cal]);
    }

    let mut child = cmd
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::inherit())
        .stderr(std::process::Stdio::inherit())
        .spawn()
        .context("spawning gcalcli import")?;

    {
        let stdin = child.stdin.as_mut().context("no stdin")?;
        stdin.write_all(ics.as_bytes()).context("writing ICS to gcalcli")?;
    }

    let status = child.wait().context("waiting on gcalcli")?;
    if !status.success() {
        bail!("gcalcli import failed: {status}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_event() -> StoredEvent {
        let start = NaiveDate::from_ymd_opt(2026, 3, 7)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        StoredEvent {
            id: "mn-1".to_string(),
            title: "Movie night: Holes".to_string(),
            start,
            end: start + chrono::Duration::minutes(150),
            notes: "Family movie night for tweens".to_string(),
            rrule: Some("FREQ=WEEKLY;INTERVAL=2".to_string()),
            reminder_lead_min: vec![60, 15],
        }
    }

    #[test]
    fn ics_carries_rrule_and_alarms() {
        let ics = events_to_ics(&[sample_event()], chrono_tz::America::Chicago).unwrap();
        assert!(ics.contains("RRULE:FREQ=WEEKLY;INTERVAL=2"));
        assert!(ics.contains("TRIGGER:-PT60M"));
        assert!(ics.contains("TRIGGER:-PT15M"));
        // 14:00 CST is 20:00 UTC in early March.
        assert!(ics.contains("DTSTART:20260307T200000Z"));
        assert!(ics.contains("SUMMARY:Movie night: Holes"));
    }

    #[test]
    fn ics_escapes_punctuation() {
        let mut e = sample_event();
        e.title = "Lilo & Stitch, again; really".to_string();
        e.rrule = None;
        let ics = events_to_ics(&[e], chrono_tz::UTC).unwrap();
        assert!(ics.contains("SUMMARY:Lilo & Stitch\\, again\\; really"));
        assert!(!ics.contains("RRULE"));
    }
}
