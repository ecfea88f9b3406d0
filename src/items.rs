//! Items

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while constructing an [`Item`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    /// The item id was negative.
    #[error("item id must not be negative, got {0}")]
    NegativeId(i64),

    /// The item title was empty.
    #[error("item title must not be empty")]
    EmptyTitle,

    /// The unit cost was zero or negative.
    #[error("item cost must be positive, got {0}")]
    NonPositiveCost(i64),
}

/// An immutable catalog record.
///
/// Items are ordered by cost, then title, then id. Ids are not required to be unique, so the
/// id only breaks ties between otherwise identical records.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
#[expect(
    clippy::struct_field_names,
    reason = "`item_id` is the public name of the catalog id"
)]
pub struct Item {
    item_id: i64,
    title: String,
    cost: i64,
}

impl Item {
    /// Creates a new item with the given id, title and unit cost in minor units.
    ///
    /// # Errors
    ///
    /// - [`ItemError::NegativeId`]: `item_id` is below zero.
    /// - [`ItemError::EmptyTitle`]: `title` is empty.
    /// - [`ItemError::NonPositiveCost`]: `cost` is zero or negative.
    pub fn new(item_id: i64, title: impl Into<String>, cost: i64) -> Result<Self, ItemError> {
        let title = title.into();

        if item_id < 0 {
            return Err(ItemError::NegativeId(item_id));
        }

        if title.is_empty() {
            return Err(ItemError::EmptyTitle);
        }

        if cost <= 0 {
            return Err(ItemError::NonPositiveCost(cost));
        }

        Ok(Self {
            item_id,
            title,
            cost,
        })
    }

    /// Returns the id of the item
    pub fn item_id(&self) -> i64 {
        self.item_id
    }

    /// Returns the title of the item
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the unit cost of the item in minor units
    pub fn cost(&self) -> i64 {
        self.cost
    }
}

impl Ord for Item {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.title.cmp(&other.title))
            .then_with(|| self.item_id.cmp(&other.item_id))
    }
}

impl PartialOrd for Item {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Unvalidated item shape used when deserializing.
#[derive(Debug, Deserialize)]
struct ItemRecord {
    item_id: i64,
    title: String,
    cost: i64,
}

impl TryFrom<ItemRecord> for Item {
    type Error = ItemError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Item::new(record.item_id, record.title, record.cost)
    }
}
