//! Element transfer primitives for uninitialized storage
//!
//! Every function here writes into slots that hold no live value and leaves
//! the destination either fully initialized or, on unwind, exactly as it
//! found it. The source side is never touched except by [`relocate`], which
//! hands ownership to the destination.
//!
//! Relocation always moves. A Rust move is a bitwise copy that cannot fail,
//! so there is never a reason to fall back to `Clone` in order to keep the
//! source intact.

use std::ptr;

/// Drops the values written so far into a destination run unless disarmed
///
/// Used to undo partially completed multi-element construction when element
/// code (`Clone`, `Default`, a user closure) panics.
pub struct InitGuard<T> {
    start: *mut T,
    initialized: usize,
}

impl<T> InitGuard<T> {
    /// Start guarding a run beginning at `start` with nothing initialized
    #[inline]
    pub fn new(start: *mut T) -> Self {
        Self {
            start,
            initialized: 0,
        }
    }

    /// Write `value` into the next slot of the run
    ///
    /// # Safety
    ///
    /// The next slot must be valid for writes and hold no live value.
    #[inline]
    pub unsafe fn push(&mut self, value: T) {
        unsafe {
            ptr::write(self.start.add(self.initialized), value);
        }
        self.initialized += 1;
    }

    /// Number of values currently owned by the guard
    #[inline]
    pub fn initialized(&self) -> usize {
        self.initialized
    }

    /// Give up ownership of the run, returning how many values it holds
    #[inline]
    pub fn disarm(self) -> usize {
        let count = self.initialized;
        std::mem::forget(self);
        count
    }
}

impl<T> Drop for InitGuard<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start, self.initialized));
        }
    }
}

/// Move `count` live values from `src` into the uninitialized run at `dst`
///
/// Afterwards the source slots are logically uninitialized and must not be
/// dropped.
///
/// # Safety
///
/// `src` must hold `count` live values, `dst` must be valid for `count`
/// writes, and the two runs must not overlap.
#[inline]
pub unsafe fn relocate<T>(src: *const T, dst: *mut T, count: usize) {
    if count != 0 {
        unsafe {
            ptr::copy_nonoverlapping(src, dst, count);
        }
    }
}

/// Clone every element of `src` into the uninitialized run at `dst`
///
/// If the k-th clone panics, the k clones already written are dropped before
/// the panic continues.
///
/// # Safety
///
/// `dst` must be valid for `src.len()` writes and hold no live values.
pub unsafe fn clone_into<T: Clone>(src: &[T], dst: *mut T) {
    let mut guard = InitGuard::new(dst);
    for item in src {
        unsafe {
            guard.push(item.clone());
        }
    }
    guard.disarm();
}

/// Construct `count` values from `f` into the uninitialized run at `dst`
///
/// Same unwind behavior as [`clone_into`].
///
/// # Safety
///
/// `dst` must be valid for `count` writes and hold no live values.
pub unsafe fn fill_with<T, F>(dst: *mut T, count: usize, mut f: F)
where
    F: FnMut() -> T,
{
    let mut guard = InitGuard::new(dst);
    for _ in 0..count {
        unsafe {
            guard.push(f());
        }
    }
    guard.disarm();
}

/// Drop `count` live values starting at `start`
///
/// # Safety
///
/// The run must hold `count` live values that are not used afterwards.
#[inline]
pub unsafe fn destroy_n<T>(start: *mut T, count: usize) {
    unsafe {
        ptr::drop_in_place(ptr::slice_from_raw_parts_mut(start, count));
    }
}
