//! Core domain logic for the tasbeeh counter.
//!
//! This crate contains:
//! - Session engine: the queue of selected dhikr and tap-driven progress
//! - Daily aggregate: the date-scoped running total, persisted across restarts
//! - Catalog: built-in presets and user-added morning/evening azkar
//! - The key-value persistence contract the above are written against

pub mod catalog;
pub mod clock;
pub mod daily;
pub mod engine;
pub mod settings;
pub mod store;
mod types;

pub use catalog::{Category, CatalogEntry, CatalogError};
pub use clock::{Clock, FixedClock, SystemClock};
pub use daily::DailyAggregate;
pub use engine::{DhikrItem, SelectionInput, SessionEngine, TapOutcome};
pub use store::{KeyValueStore, MemoryStore, StoreError};
pub use types::{DhikrId, Target, ValidationError};
