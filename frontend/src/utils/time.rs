use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::config;

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Formats a server timestamp the way pt-BR locales print date-times.
pub fn format_timestamp_in(raw: Option<&str>, tz: Tz) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "-".to_string();
    };
    match parse_timestamp(raw) {
        Some(ts) => ts
            .with_timezone(&tz)
            .format("%d/%m/%Y, %H:%M:%S")
            .to_string(),
        None => raw.to_string(),
    }
}

pub fn format_timestamp(raw: Option<&str>) -> String {
    format_timestamp_in(raw, config::current_time_zone())
}
