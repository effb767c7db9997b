//! Display formatting for dates and timestamps.
//!
//! Documents store plain calendar dates; how they read on screen is decided
//! here, from an explicit style rather than the process locale.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

/// How calendar dates are rendered for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// `2025-04-24`
    Iso,
    /// `Apr 24, 2025`
    #[default]
    Medium,
    /// `April 24, 2025`
    Long,
    /// `24 Apr 2025`
    DayFirst,
}

impl DateStyle {
    pub const ALL: [DateStyle; 4] = [
        DateStyle::Iso,
        DateStyle::Medium,
        DateStyle::Long,
        DateStyle::DayFirst,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateStyle::Iso => "iso",
            DateStyle::Medium => "medium",
            DateStyle::Long => "long",
            DateStyle::DayFirst => "day-first",
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Iso => "%Y-%m-%d",
            DateStyle::Medium => "%b %d, %Y",
            DateStyle::Long => "%B %d, %Y",
            DateStyle::DayFirst => "%d %b %Y",
        }
    }
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iso" => Ok(DateStyle::Iso),
            "medium" => Ok(DateStyle::Medium),
            "long" => Ok(DateStyle::Long),
            "day-first" | "dayfirst" => Ok(DateStyle::DayFirst),
            other => Err(format!("unknown date style: {other}")),
        }
    }
}

/// Render a calendar date in the given style.
pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    date.format(style.pattern()).to_string()
}

/// Render a save timestamp for status lines, e.g. `Saved Apr 24, 2025 14:05 UTC`.
pub fn format_saved_at(at: &DateTime<Utc>, style: DateStyle) -> String {
    format!(
        "Saved {} {} UTC",
        format_date(at.date_naive(), style),
        at.format("%H:%M")
    )
}
