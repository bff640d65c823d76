//! Low-level primitives for owned-buffer memory operations.
//!
//! [`RawBuf`] is the allocation half of the container: it owns a contiguous
//! array of uninitialized element slots and handles nothing but memory —
//! allocation, reallocation, and release. Which slots hold live elements is
//! the container's invariant; the primitives here state the initialization
//! their callers must guarantee.
//!
//! Every `unsafe fn` documents its caller contract and every `unsafe` block
//! carries a `// SAFETY:` comment naming the invariant it relies on.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// An exclusively-owned, contiguous array of uninitialized element slots.
///
/// Invariants:
/// - For sized `T` with `cap > 0`, `ptr` is the start of a live allocation
///   of exactly `Layout::array::<T>(cap)`, released exactly once — on drop,
///   or when [`RawBuf::grow_to`] replaces it.
/// - For zero-sized `T`, `ptr` is dangling, no allocation exists, and `cap`
///   reports `usize::MAX` so capacity checks never trigger growth.
/// - `cap == 0` likewise holds a dangling pointer and no allocation.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
}

impl<T> RawBuf<T> {
    const IS_ZST: bool = std::mem::size_of::<T>() == 0;

    /// Allocate a buffer of `cap` uninitialized slots.
    ///
    /// Zero-sized element types and `cap == 0` allocate nothing. Allocator
    /// failure aborts via [`alloc::handle_alloc_error`].
    pub(crate) fn new(cap: usize) -> Self {
        if Self::IS_ZST {
            return Self {
                ptr: NonNull::dangling(),
                cap: usize::MAX,
            };
        }
        if cap == 0 {
            return Self {
                ptr: NonNull::dangling(),
                cap: 0,
            };
        }
        let layout = array_layout::<T>(cap);
        // SAFETY: `layout` has non-zero size (`T` is not zero-sized and
        // `cap > 0`).
        let raw = unsafe { alloc::alloc(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            alloc::handle_alloc_error(layout);
        };
        Self { ptr, cap }
    }

    /// Total slot count (`usize::MAX` for zero-sized element types).
    pub(crate) fn cap(&self) -> usize {
        self.cap
    }

    /// Pointer to slot `i`.
    ///
    /// The slot may be uninitialized: the pointer is valid for writes of a
    /// single `T`, and for reads only once the caller knows the slot is
    /// live.
    ///
    /// # Safety
    ///
    /// `i <= cap`. (`i == cap` yields the one-past-the-end pointer, valid
    /// for address arithmetic but not for access.)
    pub(crate) unsafe fn slot(&self, i: usize) -> *mut T {
        debug_assert!(i <= self.cap);
        // SAFETY: the caller guarantees `i <= cap`, so the offset stays
        // inside (or one past) the allocation.
        unsafe { self.ptr.as_ptr().add(i) }
    }

    /// Replace the allocation with one of `new_cap` slots, moving the first
    /// `live` elements across in order. The old allocation is released.
    ///
    /// # Safety
    ///
    /// - Slots `[0, live)` must hold initialized elements.
    /// - `live <= cap` and `live <= new_cap`.
    pub(crate) unsafe fn grow_to(&mut self, new_cap: usize, live: usize) {
        debug_assert!(live <= self.cap && live <= new_cap);
        if Self::IS_ZST {
            // Capacity is virtual for zero-sized elements; nothing to move.
            return;
        }
        let mut next = Self::new(new_cap);
        // SAFETY: slots `[0, live)` are initialized (caller contract), the
        // fresh allocation holds at least `live` slots, and the two
        // allocations are distinct, so a non-overlapping copy is valid. The
        // elements are moved, not duplicated: the old buffer is released as
        // memory only, never dropped element-wise.
        unsafe {
            std::ptr::copy_nonoverlapping(self.ptr.as_ptr(), next.ptr.as_ptr(), live);
        }
        std::mem::swap(self, &mut next);
        // `next` now holds the old buffer and deallocates it here.
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if Self::IS_ZST || self.cap == 0 {
            return;
        }
        // SAFETY: `ptr` was returned by `alloc::alloc` with this exact
        // layout and has not been released yet; `grow_to` releases old
        // buffers only by routing them through this drop.
        unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), array_layout::<T>(self.cap)) };
    }
}

fn array_layout<T>(cap: usize) -> Layout {
    Layout::array::<T>(cap).expect("buffer layout exceeds isize::MAX bytes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_does_not_allocate() {
        let buf = RawBuf::<u64>::new(0);
        assert_eq!(buf.cap(), 0);
    }

    #[test]
    fn zst_capacity_is_virtual() {
        struct Marker;
        let buf = RawBuf::<Marker>::new(4);
        assert_eq!(buf.cap(), usize::MAX);
    }

    #[test]
    fn grow_moves_live_elements() {
        let mut buf = RawBuf::<u32>::new(2);
        // SAFETY: slots 0 and 1 are inside the allocation; the writes
        // initialize them, the grow contract is met (live=2), and the reads
        // observe the moved values in the new allocation.
        unsafe {
            buf.slot(0).write(7);
            buf.slot(1).write(9);
            buf.grow_to(8, 2);
            assert_eq!(buf.cap(), 8);
            assert_eq!(buf.slot(0).read(), 7);
            assert_eq!(buf.slot(1).read(), 9);
        }
    }
}
