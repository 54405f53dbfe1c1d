//! Bed Pool
//!
//! A fixed-size, ordered set of bed slots for one room. Each slot holds the
//! remaining stay (in days) of its occupant, or 0 when the bed is free.
//!
//! # Critical Invariants
//!
//! 1. **Fixed size**: the number of slots never changes after construction
//! 2. **Lowest index first**: admissions always take the lowest-index free slot
//! 3. **Never negative**: remaining stays are unsigned and decrements floor at 0

use crate::models::room::RoomKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Remaining stay value marking a free bed
pub const EMPTY_SLOT: u32 = 0;

/// Errors raised by bed-pool preconditions
///
/// These indicate that the daily transition ordering was violated; the
/// engine turns them into fatal simulation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BedPoolError {
    #[error("{room} pool is full ({beds} beds occupied)")]
    PoolFull { room: RoomKind, beds: usize },

    #[error("stay length must be at least 1 day, got {stay}")]
    ZeroStay { room: RoomKind, stay: u32 },

    #[error("{room} slot {slot} out of range (pool has {beds} beds)")]
    SlotOutOfRange {
        room: RoomKind,
        slot: usize,
        beds: usize,
    },
}

/// Fixed-capacity collection of bed slots for one room
///
/// # Example
///
/// ```rust
/// use bed_flow_core_rs::{BedPool, RoomKind};
///
/// let mut ward = BedPool::new(RoomKind::Ward, 2);
/// assert!(ward.has_capacity());
///
/// let slot = ward.admit_one(3).unwrap();
/// assert_eq!(slot, 0);
/// assert_eq!(ward.occupied(), 1);
///
/// ward.tick_all();
/// assert_eq!(ward.remaining(0), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedPool {
    room: RoomKind,
    slots: Vec<u32>,
}

impl BedPool {
    /// Create a pool of `beds` empty slots
    pub fn new(room: RoomKind, beds: usize) -> Self {
        Self {
            room,
            slots: vec![EMPTY_SLOT; beds],
        }
    }

    /// Number of beds (constant for the pool's lifetime)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for a zero-bed pool
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Remaining stays in slot order
    pub fn slots(&self) -> &[u32] {
        &self.slots
    }

    /// Remaining stay for one slot, `None` when out of range
    pub fn remaining(&self, slot: usize) -> Option<u32> {
        self.slots.get(slot).copied()
    }

    /// True iff at least one slot is free
    pub fn has_capacity(&self) -> bool {
        self.slots.contains(&EMPTY_SLOT)
    }

    /// True iff every slot is occupied
    pub fn is_full(&self) -> bool {
        !self.has_capacity()
    }

    /// Number of occupied slots
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|&&s| s != EMPTY_SLOT).count()
    }

    /// Number of free slots
    pub fn free(&self) -> usize {
        self.len() - self.occupied()
    }

    /// Number of occupants on their final day (remaining stay of exactly 1)
    pub fn count_final_day(&self) -> usize {
        self.slots.iter().filter(|&&s| s == 1).count()
    }

    /// Indices of free slots, lowest first
    pub fn free_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == EMPTY_SLOT)
            .map(|(i, _)| i)
    }

    /// Admit one occupant into the lowest-index free slot
    ///
    /// Returns the slot index used.
    ///
    /// # Errors
    ///
    /// * `PoolFull` - no free slot (caller must check `has_capacity()` first)
    /// * `ZeroStay` - a stay of 0 would be indistinguishable from a free bed
    pub fn admit_one(&mut self, stay_length: u32) -> Result<usize, BedPoolError> {
        if stay_length == EMPTY_SLOT {
            return Err(BedPoolError::ZeroStay {
                room: self.room,
                stay: stay_length,
            });
        }

        let slot = self
            .slots
            .iter()
            .position(|&s| s == EMPTY_SLOT)
            .ok_or(BedPoolError::PoolFull {
                room: self.room,
                beds: self.slots.len(),
            })?;

        self.slots[slot] = stay_length;
        Ok(slot)
    }

    /// Admit one occupant into a specific free slot
    ///
    /// Used by the ICU refill rule, which visits free slots in index order.
    pub fn admit_at(&mut self, slot: usize, stay_length: u32) -> Result<(), BedPoolError> {
        if stay_length == EMPTY_SLOT {
            return Err(BedPoolError::ZeroStay {
                room: self.room,
                stay: stay_length,
            });
        }

        let beds = self.slots.len();
        let room = self.room;
        match self.slots.get_mut(slot) {
            Some(value) if *value == EMPTY_SLOT => {
                *value = stay_length;
                Ok(())
            }
            Some(_) => Err(BedPoolError::PoolFull { room, beds }),
            None => Err(BedPoolError::SlotOutOfRange { room, slot, beds }),
        }
    }

    /// Decrement one occupied slot by a day, floored at 0
    pub fn decrement(&mut self, slot: usize) -> Result<u32, BedPoolError> {
        let beds = self.slots.len();
        let room = self.room;
        let value = self
            .slots
            .get_mut(slot)
            .ok_or(BedPoolError::SlotOutOfRange { room, slot, beds })?;
        *value = value.saturating_sub(1);
        Ok(*value)
    }

    /// Free one slot, returning the stay it held
    pub fn release(&mut self, slot: usize) -> Result<u32, BedPoolError> {
        let beds = self.slots.len();
        let room = self.room;
        let value = self
            .slots
            .get_mut(slot)
            .ok_or(BedPoolError::SlotOutOfRange { room, slot, beds })?;
        Ok(std::mem::replace(value, EMPTY_SLOT))
    }

    /// Pass one day for every occupant
    ///
    /// Occupied slots lose a day (floored at 0); free slots are untouched.
    /// Returns the indices of slots that became free.
    pub fn tick_all(&mut self) -> Vec<usize> {
        let mut freed = Vec::new();
        for (index, value) in self.slots.iter_mut().enumerate() {
            if *value >= 1 {
                *value -= 1;
                if *value == EMPTY_SLOT {
                    freed.push(index);
                }
            }
        }
        freed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admit_one_zero_stay_rejected() {
        let mut pool = BedPool::new(RoomKind::Icu, 1);
        assert_eq!(
            pool.admit_one(0),
            Err(BedPoolError::ZeroStay {
                room: RoomKind::Icu,
                stay: 0
            })
        );
        assert!(pool.has_capacity());
    }

    #[test]
    fn test_admit_at_occupied_slot_rejected() {
        let mut pool = BedPool::new(RoomKind::Icu, 2);
        pool.admit_at(1, 4).unwrap();
        assert!(matches!(
            pool.admit_at(1, 2),
            Err(BedPoolError::PoolFull { .. })
        ));
        assert_eq!(pool.remaining(1), Some(4));
    }

    #[test]
    fn test_release_returns_previous_stay() {
        let mut pool = BedPool::new(RoomKind::Ward, 1);
        pool.admit_one(5).unwrap();
        assert_eq!(pool.release(0), Ok(5));
        assert!(pool.has_capacity());
    }

    #[test]
    fn test_out_of_range_slot() {
        let mut pool = BedPool::new(RoomKind::Ward, 1);
        assert_eq!(
            pool.decrement(3),
            Err(BedPoolError::SlotOutOfRange {
                room: RoomKind::Ward,
                slot: 3,
                beds: 1
            })
        );
    }

    #[test]
    fn test_free_slots_in_index_order() {
        let mut pool = BedPool::new(RoomKind::Icu, 4);
        pool.admit_at(1, 2).unwrap();
        let free: Vec<usize> = pool.free_slots().collect();
        assert_eq!(free, vec![0, 2, 3]);
    }
}
