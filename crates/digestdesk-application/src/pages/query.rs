//! Digest page query string.

use chrono::NaiveDate;

use digestdesk_core::DeskError;
use digestdesk_core::error::Result;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validated selector of a digest page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestQuery {
    date: String,
}

impl DigestQuery {
    /// Parses a query string such as `date=2024-01-01`.
    ///
    /// Accepts a leading `?` or a full `digest.html?...` reference. Fails
    /// with a validation error when `date` is missing or not `YYYY-MM-DD`.
    pub fn parse(query: &str) -> Result<Self> {
        let query = query.split_once('?').map_or(query, |(_, rest)| rest);
        let date = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "date")
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| DeskError::validation("No date specified"))?;
        Self::from_date(date)
    }

    pub fn from_date(date: &str) -> Result<Self> {
        let date = date.trim();
        let valid = date.len() == 10 && NaiveDate::parse_from_str(date, DATE_FORMAT).is_ok();
        if !valid {
            return Err(DeskError::validation(format!(
                "Invalid date '{}', expected YYYY-MM-DD",
                date
            )));
        }
        Ok(Self {
            date: date.to_string(),
        })
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}
