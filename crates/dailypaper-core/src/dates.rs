//! The `available_dates.json` index.

use chrono::NaiveDate;

use crate::LoadError;

/// Resource name of the date index.
pub const DATES_RESOURCE: &str = "available_dates.json";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Ordered list of dates with published paper files.
///
/// The first entry is the one selected on startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateList {
    dates: Vec<String>,
}

impl DateList {
    /// Build from raw entries, dropping anything that is not a `YYYY-MM-DD`
    /// calendar date and any repeat of an earlier entry.
    pub fn from_raw(raw: Vec<String>) -> Self {
        let mut dates: Vec<String> = Vec::with_capacity(raw.len());
        for entry in raw {
            let entry = entry.trim().to_string();
            if validate_date(&entry).is_err() {
                tracing::warn!(entry = %entry, "dropping invalid date from index");
                continue;
            }
            if !dates.contains(&entry) {
                dates.push(entry);
            }
        }
        Self { dates }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn contains(&self, date: &str) -> bool {
        self.dates.iter().any(|d| d == date)
    }

    pub fn position(&self, date: &str) -> Option<usize> {
        self.dates.iter().position(|d| d == date)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.dates.get(index).map(String::as_str)
    }

    /// The date auto-selected on startup.
    pub fn default_date(&self) -> Option<&str> {
        self.get(0)
    }
}

/// Check that `date` is a real `YYYY-MM-DD` date.
pub fn validate_date(date: &str) -> Result<NaiveDate, LoadError> {
    if date.len() != 10 {
        return Err(LoadError::InvalidDate(date.to_string()));
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| LoadError::InvalidDate(date.to_string()))
}

/// Resource name of the paper file for `date`.
pub fn papers_resource(date: &str) -> Result<String, LoadError> {
    validate_date(date)?;
    Ok(format!("{date}.json"))
}
