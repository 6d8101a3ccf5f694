//! Slot tables - bounded first-fit storage with stable indices.
//!
//! A `SlotTable<T>` is a `Vec<Option<T>>` that never compacts. Insertion
//! takes the lowest empty slot (linear scan from index 0) and only grows the
//! vector when every existing slot is occupied. Storage for new slots is
//! reserved fallibly, so running out of memory surfaces as an error instead
//! of an abort.

use std::fmt;

use thiserror::Error;

/// Index of a slot in a [`SlotTable`].
///
/// Stable for as long as the slot stays occupied.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct SlotIndex(usize);

impl SlotIndex {
    /// Create a new `SlotIndex`.
    #[inline]
    pub const fn new(index: usize) -> Self {
        SlotIndex(index)
    }

    /// Get the position in the table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotIndex({})", self.0)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a value could not be placed in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotError {
    /// Every slot up to the limit is occupied.
    #[error("no free slot (limit {limit})")]
    Full { limit: usize },
    /// Reserving storage for a new slot failed.
    #[error("slot storage allocation failed")]
    AllocationFailed,
}

/// Bounded table of optional values with first-fit allocation.
pub struct SlotTable<T> {
    slots: Vec<Option<T>>,
    /// Maximum number of slots (occupied or empty) the table may hold.
    limit: usize,
}

impl<T> SlotTable<T> {
    /// Create an empty table holding at most `limit` slots.
    pub const fn new(limit: usize) -> Self {
        SlotTable {
            slots: Vec::new(),
            limit,
        }
    }

    /// Maximum number of slots.
    #[inline]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Store `value` in the lowest empty slot and return its index.
    pub fn insert(&mut self, value: T) -> Result<SlotIndex, SlotError> {
        // Reuse a cleared slot before growing.
        if let Some((index, slot)) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| slot.is_none())
        {
            *slot = Some(value);
            return Ok(SlotIndex::new(index));
        }

        let index = self.slots.len();
        if index >= self.limit {
            return Err(SlotError::Full { limit: self.limit });
        }
        self.slots
            .try_reserve(1)
            .map_err(|_| SlotError::AllocationFailed)?;
        self.slots.push(Some(value));
        Ok(SlotIndex::new(index))
    }

    /// Clear the slot at `index`, returning its value if it was occupied.
    pub fn remove(&mut self, index: SlotIndex) -> Option<T> {
        self.slots.get_mut(index.index())?.take()
    }

    /// Value in the slot at `index`, if occupied.
    pub fn get(&self, index: SlotIndex) -> Option<&T> {
        self.slots.get(index.index())?.as_ref()
    }

    /// Whether the slot at `index` holds a value.
    pub fn is_occupied(&self, index: SlotIndex) -> bool {
        self.get(index).is_some()
    }

    /// Count occupied slots by scanning the whole table.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (SlotIndex::new(index), value)))
    }

    /// Release every slot and its storage. Returns how many were occupied.
    pub fn clear(&mut self) -> usize {
        let released = self.occupied();
        self.slots = Vec::new();
        released
    }
}

impl<T: fmt::Debug> fmt::Debug for SlotTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
