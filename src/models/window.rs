use chrono::{Duration, NaiveDate};
use std::fmt;

use crate::error::{Error, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Commit window `[since, until)`. Ordering of the bounds is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub since: NaiveDate,
    pub until: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPreset {
    Today,
    Yesterday,
    LastMonth,
}

impl WindowPreset {
    pub const ALL: [WindowPreset; 3] = [Self::Today, Self::Yesterday, Self::LastMonth];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::LastMonth => "Last month",
        }
    }
}

impl DateWindow {
    pub fn new(since: NaiveDate, until: NaiveDate) -> Self {
        Self { since, until }
    }

    pub fn parse(since: &str, until: &str) -> Result<Self> {
        Ok(Self::new(parse_date(since)?, parse_date(until)?))
    }

    pub fn preset(preset: WindowPreset, today: NaiveDate) -> Self {
        match preset {
            WindowPreset::Today => Self::new(today, today + Duration::days(1)),
            WindowPreset::Yesterday => Self::new(today - Duration::days(1), today),
            WindowPreset::LastMonth => {
                Self::new(today - Duration::days(30), today + Duration::days(1))
            }
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.since > self.until
    }

    /// `since` as sent to the commit API (`YYYY-MM-DDT00:00:00Z`).
    pub fn since_param(&self) -> String {
        timestamp_param(self.since)
    }

    pub fn until_param(&self) -> String {
        timestamp_param(self.until)
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} — {}",
            self.since.format(DATE_FORMAT),
            self.until.format(DATE_FORMAT)
        )
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate(s.to_string()))
}

fn timestamp_param(date: NaiveDate) -> String {
    format!("{}T00:00:00Z", date.format(DATE_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_query_params() {
        let window = DateWindow::parse("2024-01-01", "2024-01-02").unwrap();
        assert_eq!(window.since_param(), "2024-01-01T00:00:00Z");
        assert_eq!(window.until_param(), "2024-01-02T00:00:00Z");
        assert_eq!(window.to_string(), "2024-01-01 — 2024-01-02");
    }

    #[test]
    fn test_presets() {
        let today = date("2024-03-01");
        assert_eq!(
            DateWindow::preset(WindowPreset::Today, today),
            DateWindow::new(today, date("2024-03-02"))
        );
        assert_eq!(
            DateWindow::preset(WindowPreset::Yesterday, today),
            DateWindow::new(date("2024-02-29"), today)
        );
        assert_eq!(
            DateWindow::preset(WindowPreset::LastMonth, today),
            DateWindow::new(date("2024-01-31"), date("2024-03-02"))
        );
    }

    #[test]
    fn test_inverted_window_is_allowed() {
        let window = DateWindow::parse("2024-02-01", "2024-01-01").unwrap();
        assert!(window.is_inverted());
    }

    #[test]
    fn test_invalid_date() {
        assert!(parse_date("01/02/2024").is_err());
        assert!(DateWindow::parse("2024-13-01", "2024-01-01").is_err());
    }
}
