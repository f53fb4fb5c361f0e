//! Selectable dhikr: built-in presets and morning/evening azkar.
//!
//! Built-in entries are compiled in. User-added azkar are persisted per
//! category as a JSON array under [`Category::storage_key`] and listed after
//! the built-ins.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::engine::SelectionInput;
use crate::store::{KeyValueStore, StoreError};
use crate::types::{DhikrId, Target, ValidationError};

/// Catalog errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The stored custom list can't be decoded, so appending would overwrite it.
    #[error("stored custom azkar under {key} is malformed: {message}")]
    Malformed { key: &'static str, message: String },
}

/// Azkar list a custom entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Morning,
    Evening,
}

impl Category {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Evening => "evening",
        }
    }

    /// Storage key holding the custom entries for this category.
    #[must_use]
    pub const fn storage_key(&self) -> &'static str {
        match self {
            Self::Morning => "custom_morning_azkar",
            Self::Evening => "custom_evening_azkar",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(Self::Morning),
            "evening" => Ok(Self::Evening),
            _ => Err(ValidationError::InvalidCategory {
                value: s.to_string(),
            }),
        }
    }
}

/// A selectable dhikr.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: DhikrId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl From<CatalogEntry> for SelectionInput {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            id: entry.id,
            text: entry.text,
            count: entry.count,
        }
    }
}

const PRESETS: &[(&str, &str)] = &[
    ("1", "سبحان الله"),
    ("2", "الحمد لله"),
    ("3", "الله أكبر"),
    ("4", "لا إله إلا الله"),
    ("5", "أستغفر الله"),
    ("6", "سبحان الله وبحمده"),
    ("7", "سبحان الله العظيم"),
    ("8", "لا حول ولا قوة إلا بالله"),
    ("9", "اللهم صل على محمد"),
];

const MORNING_AZKAR: &[(&str, &str, u32)] = &[
    ("m1", "أصبحنا وأصبح الملك لله", 1),
    ("m2", "اللهم بك أصبحنا وبك أمسينا وبك نحيا وبك نموت وإليك النشور", 1),
    ("m3", "بسم الله الذي لا يضر مع اسمه شيء في الأرض ولا في السماء وهو السميع العليم", 3),
    ("m4", "رضيت بالله ربا وبالإسلام دينا وبمحمد نبيا", 3),
    ("m5", "سبحان الله وبحمده", 100),
];

const EVENING_AZKAR: &[(&str, &str, u32)] = &[
    ("e1", "أمسينا وأمسى الملك لله", 1),
    ("e2", "اللهم بك أمسينا وبك أصبحنا وبك نحيا وبك نموت وإليك المصير", 1),
    ("e3", "أعوذ بكلمات الله التامات من شر ما خلق", 3),
    ("e4", "بسم الله الذي لا يضر مع اسمه شيء في الأرض ولا في السماء وهو السميع العليم", 3),
    ("e5", "سبحان الله وبحمده", 100),
];

fn builtin(id: &str, text: &str, count: Option<u32>) -> Option<CatalogEntry> {
    Some(CatalogEntry {
        id: DhikrId::new(id).ok()?,
        text: text.to_string(),
        count,
    })
}

/// The built-in phrases offered for a counting session.
pub fn presets() -> Vec<CatalogEntry> {
    PRESETS
        .iter()
        .filter_map(|(id, text)| builtin(id, text, None))
        .collect()
}

/// Built-in azkar for a category.
pub fn builtin_azkar(category: Category) -> Vec<CatalogEntry> {
    let entries = match category {
        Category::Morning => MORNING_AZKAR,
        Category::Evening => EVENING_AZKAR,
    };
    entries
        .iter()
        .filter_map(|(id, text, count)| builtin(id, text, Some(*count)))
        .collect()
}

/// Built-in azkar followed by the user's custom entries for `category`.
///
/// Unreadable or malformed custom data is logged and skipped.
pub fn load_azkar(store: &impl KeyValueStore, category: Category) -> Vec<CatalogEntry> {
    let mut entries = builtin_azkar(category);
    entries.extend(load_custom(store, category));
    entries
}

fn load_custom(store: &impl KeyValueStore, category: Category) -> Vec<CatalogEntry> {
    let key = category.storage_key();
    let raw = match read_custom(store, category) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring unreadable custom azkar");
            return Vec::new();
        }
    };
    raw.into_iter()
        .filter_map(|value| {
            serde_json::from_value::<CatalogEntry>(value)
                .inspect_err(|e| tracing::warn!(key, error = %e, "skipping malformed custom entry"))
                .ok()
        })
        .collect()
}

/// Reads the stored custom list without decoding individual entries.
fn read_custom(
    store: &impl KeyValueStore,
    category: Category,
) -> Result<Vec<serde_json::Value>, CatalogError> {
    let key = category.storage_key();
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };
    serde_json::from_str(&raw).map_err(|e| CatalogError::Malformed {
        key,
        message: e.to_string(),
    })
}

/// Adds a user-defined entry to `category` and returns it.
///
/// Existing entries are kept as stored, including ones [`load_azkar`] skips.
/// Fails without writing when the stored list can't be read or decoded.
pub fn add_custom_azkar(
    store: &impl KeyValueStore,
    category: Category,
    text: &str,
    count: u32,
) -> Result<CatalogEntry, CatalogError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::Empty { field: "dhikr text" }.into());
    }
    let count = Target::new(i64::from(count))?;

    let entry = CatalogEntry {
        id: DhikrId::new(Uuid::new_v4().to_string())?,
        text: text.to_string(),
        count: Some(count.get()),
    };

    let key = category.storage_key();
    let encode_err = |e: serde_json::Error| StoreError::Encode {
        key: key.to_string(),
        message: e.to_string(),
    };
    let mut custom = read_custom(store, category)?;
    custom.push(serde_json::to_value(&entry).map_err(encode_err)?);
    let json = serde_json::to_string(&custom).map_err(encode_err)?;
    store.set(key, &json)?;
    tracing::debug!(%category, id = %entry.id, "added custom azkar");

    Ok(entry)
}

/// Picks the entries whose ids are in `ids`, in catalog order.
///
/// Unknown ids are ignored. The catalog order wins over the order of `ids`,
/// matching a multi-select grid where selection order isn't tracked.
pub fn find(entries: &[CatalogEntry], ids: &[DhikrId]) -> Vec<SelectionInput> {
    entries
        .iter()
        .filter(|entry| ids.contains(&entry.id))
        .cloned()
        .map(SelectionInput::from)
        .collect()
}
