//! Growable counter storage.
//!
//! One zero-initialized `u64` slot per registered function. Slots are
//! preallocated by capacity doubling so that the hot increment never
//! allocates; growth only happens while functions are being registered.

use crate::registry::FunctionId;

/// Initial number of counter slots
pub const DEFAULT_INITIAL_CAPACITY: usize = 1024;

/// Counter array paired with a [`FunctionRegistry`](crate::FunctionRegistry)
#[derive(Debug, Clone)]
pub struct CounterArray {
    /// Every slot up to capacity, zero until incremented
    slots: Vec<u64>,
    /// Number of live slots
    live: usize,
}

impl CounterArray {
    /// Create counters with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Create counters with a custom initial capacity (at least 1)
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity.max(1)],
            live: 0,
        }
    }

    /// Make room for one more function
    ///
    /// When every slot is live, capacity doubles first; existing values are
    /// kept and the new slots start at zero.
    pub fn append(&mut self) {
        if self.live == self.slots.len() {
            let old = self.slots.len();
            let new = old * 2;
            self.slots.resize(new, 0);
            tracing::debug!(old_capacity = old, new_capacity = new, "counter storage grown");
        }
        self.live += 1;
    }

    /// Add `amount` to the slot of `id`
    ///
    /// # Panics
    ///
    /// Panics if the slot is beyond capacity, which means [`Self::append`]
    /// was not called for the function.
    #[inline]
    pub fn increment_by(&mut self, id: FunctionId, amount: u64) {
        let idx = id.index();
        assert!(
            idx < self.slots.len(),
            "counter slot {idx} beyond capacity {}",
            self.slots.len()
        );
        self.slots[idx] = self.slots[idx].saturating_add(amount);
    }

    /// Value of the slot of `id`, 0 beyond capacity
    #[inline]
    #[must_use]
    pub fn get(&self, id: FunctionId) -> u64 {
        self.slots.get(id.index()).copied().unwrap_or(0)
    }

    /// Number of live slots
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Number of allocated slots
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Live slots in ID order
    #[must_use]
    pub fn live_slots(&self) -> &[u64] {
        &self.slots[..self.live]
    }

    /// Sum of all live slots
    #[must_use]
    pub fn total(&self) -> u64 {
        self.live_slots()
            .iter()
            .fold(0u64, |acc, &c| acc.saturating_add(c))
    }
}

impl Default for CounterArray {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn expected_capacity(n: usize) -> usize {
        let mut cap = DEFAULT_INITIAL_CAPACITY;
        while cap < n {
            cap *= 2;
        }
        cap
    }

    #[test]
    fn test_new_is_zeroed() {
        let counters = CounterArray::new();
        assert_eq!(counters.capacity(), 1024);
        assert_eq!(counters.live_count(), 0);
        assert_eq!(counters.get(FunctionId::new(1023)), 0);
        assert_eq!(counters.total(), 0);
    }

    #[test]
    fn test_increment_accumulates() {
        let mut counters = CounterArray::new();
        counters.append();
        counters.increment_by(FunctionId::new(0), 4);
        counters.increment_by(FunctionId::new(0), 1);
        assert_eq!(counters.get(FunctionId::new(0)), 5);
        assert_eq!(counters.total(), 5);
    }

    #[test]
    fn test_growth_at_capacity_boundary() {
        let mut counters = CounterArray::new();
        for _ in 0..1024 {
            counters.append();
        }
        assert_eq!(counters.capacity(), 1024);
        counters.append();
        assert_eq!(counters.capacity(), 2048);
        assert_eq!(counters.live_count(), 1025);
    }

    #[test]
    fn test_growth_preserves_values() {
        let mut counters = CounterArray::with_capacity(2);
        counters.append();
        counters.append();
        counters.increment_by(FunctionId::new(0), 7);
        counters.increment_by(FunctionId::new(1), 9);
        counters.append();
        assert_eq!(counters.capacity(), 4);
        assert_eq!(counters.live_slots(), &[7, 9, 0]);
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let mut counters = CounterArray::with_capacity(0);
        assert_eq!(counters.capacity(), 1);
        counters.append();
        counters.append();
        assert_eq!(counters.capacity(), 2);
    }

    #[test]
    fn test_saturates_instead_of_wrapping() {
        let mut counters = CounterArray::new();
        counters.append();
        counters.increment_by(FunctionId::new(0), u64::MAX);
        counters.increment_by(FunctionId::new(0), 1);
        assert_eq!(counters.get(FunctionId::new(0)), u64::MAX);
    }

    #[test]
    #[should_panic(expected = "beyond capacity")]
    fn test_increment_beyond_capacity_panics() {
        let mut counters = CounterArray::with_capacity(4);
        counters.increment_by(FunctionId::new(4), 1);
    }

    proptest! {
        #[test]
        fn prop_capacity_is_smallest_doubling(n in 0usize..5000) {
            let mut counters = CounterArray::new();
            for _ in 0..n {
                counters.append();
            }
            prop_assert_eq!(counters.live_count(), n);
            prop_assert_eq!(counters.capacity(), expected_capacity(n));
        }
    }
}
