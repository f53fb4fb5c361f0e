//! Dhikr session engine.
//!
//! Owns the queue of selected dhikr, the cursor into it, and the session tap
//! count, and forwards every counted tap to the [`DailyAggregate`].
//!
//! Invalid operations (tapping an empty or finished queue, removing an index
//! that doesn't exist) are no-ops rather than errors: the caller is a UI that
//! normally disables those actions, and there is nothing useful to report.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::daily::DailyAggregate;
use crate::store::KeyValueStore;
use crate::types::{DhikrId, Target};

/// One selected dhikr, as handed over by the catalog or the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionInput {
    pub id: DhikrId,
    pub text: String,
    /// Explicit repetition count. Absent or zero falls back to the default target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// A queued dhikr with its progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DhikrItem {
    pub id: DhikrId,
    pub text: String,
    pub target: Target,
    /// Taps recorded against this entry. Not clamped at `target`.
    pub completed: u32,
}

impl DhikrItem {
    /// Taps left before the target is reached.
    pub const fn remaining(&self) -> u32 {
        self.target.get().saturating_sub(self.completed)
    }

    pub const fn is_done(&self) -> bool {
        self.completed >= self.target.get()
    }
}

/// What a call to [`SessionEngine::tap`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Nothing to count: the queue is empty or already finished.
    Ignored,
    /// The current item was counted and still needs more taps.
    Counted { index: usize, remaining: u32 },
    /// The current item reached its target; the cursor moved to `next`.
    Advanced { next: usize },
    /// The last item reached its target; the session is complete.
    Completed,
}

/// Session state machine over a queue of dhikr.
#[derive(Debug)]
pub struct SessionEngine<S, C> {
    queue: Vec<DhikrItem>,
    current_index: usize,
    session_tap_count: u64,
    default_target: Target,
    daily: DailyAggregate<S, C>,
}

impl<S: KeyValueStore, C: Clock> SessionEngine<S, C> {
    /// Creates an idle engine that reports taps to `daily`.
    ///
    /// Rehydrates `daily` first if it hasn't been loaded, so the first tap
    /// never overwrites a persisted total for the same day.
    pub fn new(mut daily: DailyAggregate<S, C>, default_target: Target) -> Self {
        if !daily.is_loaded() {
            daily.load_or_rollover();
        }
        Self {
            queue: Vec::new(),
            current_index: 0,
            session_tap_count: 0,
            default_target,
            daily,
        }
    }

    /// Replaces the queue with `items` and restarts progress from the first entry.
    pub fn start_session(&mut self, items: impl IntoIterator<Item = SelectionInput>) {
        let queue: Vec<DhikrItem> = items.into_iter().map(|item| self.resolve(item)).collect();
        self.queue = queue;
        self.current_index = 0;
        self.session_tap_count = 0;
        tracing::debug!(len = self.queue.len(), "started session");
    }

    /// Appends one item without touching the cursor or the tap count.
    pub fn add_to_queue(&mut self, item: SelectionInput) {
        let item = self.resolve(item);
        self.queue.push(item);
    }

    /// Records one tap on the current item.
    pub fn tap(&mut self) -> TapOutcome {
        let index = self.current_index;
        let Some(item) = self.queue.get_mut(index) else {
            tracing::debug!(index, len = self.queue.len(), "tap ignored");
            return TapOutcome::Ignored;
        };

        item.completed = item.completed.saturating_add(1);
        let done = item.is_done();
        let remaining = item.remaining();
        self.session_tap_count += 1;
        self.daily.add_delta(1);

        if !done {
            return TapOutcome::Counted { index, remaining };
        }
        self.current_index += 1;
        if self.current_index >= self.queue.len() {
            TapOutcome::Completed
        } else {
            TapOutcome::Advanced {
                next: self.current_index,
            }
        }
    }

    /// Removes the entry at `index`. The cursor is left where it is.
    pub fn remove_from_queue(&mut self, index: usize) -> Option<DhikrItem> {
        if index >= self.queue.len() {
            tracing::debug!(index, len = self.queue.len(), "remove ignored");
            return None;
        }
        Some(self.queue.remove(index))
    }

    /// Clears the queue and progress. Used both to abandon and to finish a session.
    pub fn reset_session(&mut self) {
        self.queue.clear();
        self.current_index = 0;
        self.session_tap_count = 0;
    }

    /// Sets the target used for future selections without an explicit count.
    pub const fn set_default_target(&mut self, target: Target) {
        self.default_target = target;
    }

    pub fn is_session_complete(&self) -> bool {
        !self.queue.is_empty() && self.current_index >= self.queue.len()
    }

    pub fn queue(&self) -> &[DhikrItem] {
        &self.queue
    }

    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// The item the next tap will count against.
    pub fn current_item(&self) -> Option<&DhikrItem> {
        self.queue.get(self.current_index)
    }

    pub const fn session_tap_count(&self) -> u64 {
        self.session_tap_count
    }

    pub const fn default_target(&self) -> Target {
        self.default_target
    }

    pub const fn daily(&self) -> &DailyAggregate<S, C> {
        &self.daily
    }

    fn resolve(&self, input: SelectionInput) -> DhikrItem {
        DhikrItem {
            id: input.id,
            text: input.text,
            target: Target::from_count(input.count).unwrap_or(self.default_target),
            completed: 0,
        }
    }
}
