//! Calendar date source.
//!
//! The daily aggregate rolls over on calendar date changes, so "today" is
//! injected rather than read from the system directly.

use chrono::{FixedOffset, Local, NaiveDate, Utc};

/// Source of the current calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Wall clock, reading either the machine's local calendar or a fixed offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    offset: Option<FixedOffset>,
}

impl SystemClock {
    /// Uses the machine's local timezone.
    #[must_use]
    pub const fn local() -> Self {
        Self { offset: None }
    }

    /// Pins the calendar to a fixed UTC offset, independent of the machine timezone.
    #[must_use]
    pub const fn with_offset(offset: FixedOffset) -> Self {
        Self {
            offset: Some(offset),
        }
    }

    /// Builds a clock from an offset in minutes east of UTC.
    ///
    /// Returns `None` if the offset is outside +/- 24 hours.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(Self::with_offset)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.offset {
            Some(offset) => Utc::now().with_timezone(&offset).date_naive(),
            None => Local::now().date_naive(),
        }
    }
}

/// Clock frozen on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
