//! Hook-style local state for function components.
//!
//! A function component is a render function `Fn(&mut Hooks) -> View`. Each
//! call to [`Hooks::use_state`] claims the next slot of the component
//! instance's store, so hooks must be called in the same order on every
//! render. The first render initializes a slot; later renders read whatever
//! the slot holds now.

use std::any::{Any, type_name};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::warn;

type Slot = Arc<Mutex<Box<dyn Any + Send>>>;

/// Per-instance store of hook state.
///
/// Owned by the component instance (see
/// [`FnComponent`](crate::FnComponent)); never shared between instances.
#[derive(Default)]
pub struct Hooks {
    slots: Vec<Slot>,
    cursor: usize,
}

impl Hooks {
    /// Create an empty hook store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewind the slot cursor before running a render function.
    pub(crate) fn begin_render(&mut self) {
        self.cursor = 0;
    }

    /// Claim the next state slot.
    ///
    /// Returns the slot's current value and a handle that replaces it.
    /// `init` only runs the first time the slot is claimed, or when the slot
    /// holds a value of another type because hook order changed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use teacup::Hooks;
    ///
    /// let mut hooks = Hooks::new();
    /// let (count, set_count) = hooks.use_state(|| 0u64);
    /// assert_eq!(count, 0);
    /// set_count.set(count + 1);
    /// assert_eq!(set_count.get(), Some(1));
    /// ```
    pub fn use_state<T, F>(&mut self, init: F) -> (T, StateHandle<T>)
    where
        T: Clone + Send + 'static,
        F: FnOnce() -> T,
    {
        let index = self.cursor;
        self.cursor += 1;

        if index == self.slots.len() {
            let value = init();
            let slot: Slot = Arc::new(Mutex::new(Box::new(value.clone())));
            self.slots.push(Arc::clone(&slot));
            return (value, StateHandle::new(slot));
        }

        let slot = Arc::clone(&self.slots[index]);
        let value = {
            let mut stored = slot.lock();
            if let Some(value) = stored.downcast_ref::<T>() {
                value.clone()
            } else {
                warn!(
                    slot = index,
                    expected = type_name::<T>(),
                    "hook order changed between renders, reinitializing state slot"
                );
                let value = init();
                *stored = Box::new(value.clone());
                value
            }
        };
        (value, StateHandle::new(slot))
    }

    /// Read slot `index` without claiming it.
    pub fn peek<T: Clone + 'static>(&self, index: usize) -> Option<T> {
        self.slots.get(index)?.lock().downcast_ref::<T>().cloned()
    }

    /// Number of slots claimed so far.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot has been claimed yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("slots", &self.slots.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

/// Handle to one state slot, returned by [`Hooks::use_state`].
///
/// Handles are cheap to clone and can be moved into button handlers.
pub struct StateHandle<T> {
    slot: Slot,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Clone + Send + 'static> StateHandle<T> {
    fn new(slot: Slot) -> Self {
        Self {
            slot,
            _marker: PhantomData,
        }
    }

    /// Current value of the slot.
    ///
    /// `None` only if the slot was since reinitialized with another type.
    pub fn get(&self) -> Option<T> {
        self.slot.lock().downcast_ref::<T>().cloned()
    }

    /// Replace the slot's value. The next render observes it.
    pub fn set(&self, value: T) {
        *self.slot.lock() = Box::new(value);
    }

    /// Replace the slot's value with `f(current)`.
    pub fn update<F: FnOnce(&T) -> T>(&self, f: F) {
        let mut stored = self.slot.lock();
        if let Some(current) = stored.downcast_ref::<T>() {
            let next = f(current);
            *stored = Box::new(next);
        }
    }
}

impl<T> Clone for StateHandle<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for StateHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateHandle")
            .field("type", &type_name::<T>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_render_runs_init() {
        let mut hooks = Hooks::new();
        hooks.begin_render();
        let (value, _) = hooks.use_state(|| 5u64);
        assert_eq!(value, 5);
        assert_eq!(hooks.len(), 1);
    }

    #[test]
    fn test_later_renders_keep_value() {
        let mut hooks = Hooks::new();
        hooks.begin_render();
        let (_, handle) = hooks.use_state(|| 0u64);
        handle.set(3);

        hooks.begin_render();
        let (value, _) = hooks.use_state(|| -> u64 { unreachable!("init must not rerun") });
        assert_eq!(value, 3);
        assert_eq!(hooks.len(), 1);
    }

    #[test]
    fn test_slots_follow_call_order() {
        let mut hooks = Hooks::new();
        hooks.begin_render();
        let (_, a) = hooks.use_state(|| 1u64);
        let (_, b) = hooks.use_state(|| String::from("b"));
        a.set(10);
        b.set("bee".into());

        hooks.begin_render();
        let (a_value, _) = hooks.use_state(|| 0u64);
        let (b_value, _) = hooks.use_state(String::new);
        assert_eq!(a_value, 10);
        assert_eq!(b_value, "bee");
    }

    #[test]
    fn test_type_change_reinitializes_slot() {
        let mut hooks = Hooks::new();
        hooks.begin_render();
        let (_, old) = hooks.use_state(|| 1u64);

        hooks.begin_render();
        let (value, _) = hooks.use_state(|| String::from("fresh"));
        assert_eq!(value, "fresh");
        assert_eq!(old.get(), None);
    }

    #[test]
    fn test_update_applies_function() {
        let mut hooks = Hooks::new();
        let (_, handle) = hooks.use_state(|| 1u64);
        handle.update(|n| n + 41);
        assert_eq!(handle.get(), Some(42));
        assert_eq!(hooks.peek::<u64>(0), Some(42));
    }

    #[test]
    fn test_cloned_handles_share_slot() {
        let mut hooks = Hooks::new();
        let (_, handle) = hooks.use_state(|| 0u64);
        let clone = handle.clone();
        clone.set(9);
        assert_eq!(handle.get(), Some(9));
    }

    #[test]
    fn test_separate_stores_are_independent() {
        let mut first = Hooks::new();
        let mut second = Hooks::new();
        let (_, a) = first.use_state(|| 0u64);
        let (_, _b) = second.use_state(|| 0u64);
        a.set(4);
        assert_eq!(first.peek::<u64>(0), Some(4));
        assert_eq!(second.peek::<u64>(0), Some(0));
    }

    #[test]
    fn test_peek_out_of_range() {
        let hooks = Hooks::new();
        assert!(hooks.is_empty());
        assert_eq!(hooks.peek::<u64>(0), None);
    }
}
