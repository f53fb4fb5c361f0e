//! Date-scoped daily tap total.
//!
//! The total is persisted together with the date it belongs to. On startup,
//! [`DailyAggregate::load_or_rollover`] adopts the stored total only if it was
//! written today; anything else (first run, unparsable values, an older date)
//! resets the total to zero and persists that.
//!
//! Every [`DailyAggregate::add_delta`] re-stamps the stored date to today
//! without clearing the total, so a session that crosses midnight keeps
//! counting into the same total until the next `load_or_rollover`.

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::store::KeyValueStore;

/// Storage key for the running total.
pub const DAILY_TOTAL_KEY: &str = "daily_total";

/// Storage key for the date the total applies to.
pub const LAST_ACTIVE_DATE_KEY: &str = "last_active_date";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Cumulative taps for the current calendar date.
#[derive(Debug)]
pub struct DailyAggregate<S, C> {
    store: S,
    clock: C,
    total: u64,
    date: NaiveDate,
    loaded: bool,
}

impl<S: KeyValueStore, C: Clock> DailyAggregate<S, C> {
    /// Creates an unloaded aggregate. Call [`Self::load_or_rollover`] before showing the total.
    pub fn new(store: S, clock: C) -> Self {
        let date = clock.today();
        Self {
            store,
            clock,
            total: 0,
            date,
            loaded: false,
        }
    }

    /// Rehydrates the total from storage, rolling over to zero if the stored date isn't today.
    pub fn load_or_rollover(&mut self) {
        let today = self.clock.today();
        let stored_date = self.read(LAST_ACTIVE_DATE_KEY).and_then(|raw| {
            NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
                .inspect_err(|e| tracing::warn!(value = %raw, error = %e, "unparsable stored date"))
                .ok()
        });
        let stored_total = self.read(DAILY_TOTAL_KEY).and_then(|raw| {
            raw.trim()
                .parse::<u64>()
                .inspect_err(|e| tracing::warn!(value = %raw, error = %e, "unparsable stored total"))
                .ok()
        });

        self.date = today;
        match (stored_date, stored_total) {
            (Some(date), Some(total)) if date == today => {
                tracing::debug!(%date, total, "resuming daily total");
                self.total = total;
            }
            (stored_date, _) => {
                tracing::debug!(?stored_date, %today, "rolling over daily total");
                self.total = 0;
                self.write(LAST_ACTIVE_DATE_KEY, &today.format(DATE_FORMAT).to_string());
                self.write(DAILY_TOTAL_KEY, "0");
            }
        }
        self.loaded = true;
    }

    /// Adds `n` taps and persists the new total, stamping today's date.
    pub fn add_delta(&mut self, n: u64) {
        self.total = self.total.saturating_add(n);
        self.date = self.clock.today();
        self.write(DAILY_TOTAL_KEY, &self.total.to_string());
        self.write(
            LAST_ACTIVE_DATE_KEY,
            &self.date.format(DATE_FORMAT).to_string(),
        );
    }

    pub const fn total(&self) -> u64 {
        self.total
    }

    /// The date the in-memory total was last stamped with.
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn read(&self, key: &str) -> Option<String> {
        self.store
            .get(key)
            .inspect_err(|e| tracing::warn!(key, error = %e, "failed to read daily stats"))
            .ok()
            .flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            tracing::warn!(key, error = %e, "failed to persist daily stats");
        }
    }
}
