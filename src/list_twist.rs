//! List Twist
//!
//! A list with a few derived accessors on top of the usual `Vec` API:
//!
//! - `reversed`: a reversed copy of the list
//! - `first` / `set_first`: read or replace the first element
//! - `size` / `set_size`: read the length, or truncate/pad the list to a new length

use std::ops::{Deref, DerefMut};

use thiserror::Error;

/// Errors related to list twist accessors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListTwistError {
    /// The list has no first element to replace.
    #[error("list is empty; it has no first element")]
    Empty,
}

/// List Twist
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ListTwist<T> {
    items: Vec<T>,
}

impl<T> ListTwist<T> {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Get the first element, if any.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Replace the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ListTwistError::Empty`] if the list has no elements.
    pub fn set_first(&mut self, value: T) -> Result<(), ListTwistError> {
        let first = self.items.first_mut().ok_or(ListTwistError::Empty)?;
        *first = value;

        Ok(())
    }

    /// Get the number of elements.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Unwrap into the underlying vector.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> ListTwist<T> {
    /// Return a reversed copy of the list.
    #[must_use]
    pub fn reversed(&self) -> Self {
        self.items.iter().rev().cloned().collect()
    }
}

impl<T: Default> ListTwist<T> {
    /// Resize the list.
    ///
    /// Shrinking truncates from the end; growing pads with `T::default()`, so a
    /// `ListTwist<Option<_>>` is padded with `None`.
    pub fn set_size(&mut self, size: usize) {
        self.items.resize_with(size, T::default);
    }
}

impl<T> Deref for ListTwist<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for ListTwist<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<T> From<Vec<T>> for ListTwist<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for ListTwist<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for ListTwist<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ListTwist<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
