//! SingleSlot: zero-or-one value held in inline uninitialized storage
//!
//! The slot reserves room for exactly one `T` and a flag recording whether
//! that room currently holds a live value. It offers both an unchecked access
//! path (precondition: occupied) and a checked one that reports
//! [`VectorError::BadOptionalAccess`].

use crate::error::{Result, VectorError};
use std::fmt;
use std::mem::MaybeUninit;
use std::ptr;

/// Inline storage for at most one value of `T`
///
/// # Examples
///
/// ```rust
/// use advanced_vector::SingleSlot;
///
/// let mut slot: SingleSlot<i32> = SingleSlot::new();
/// assert!(!slot.has_value());
/// assert!(slot.value().is_err());
///
/// slot.emplace(42);
/// assert!(slot.has_value());
/// assert_eq!(*slot.value().unwrap(), 42);
/// assert_eq!(unsafe { *slot.get_unchecked() }, 42);
///
/// slot.reset();
/// assert!(!slot.has_value());
/// ```
pub struct SingleSlot<T> {
    value: MaybeUninit<T>,
    occupied: bool,
}

impl<T> SingleSlot<T> {
    /// Create an empty slot
    #[inline]
    pub const fn new() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            occupied: false,
        }
    }

    /// Create a slot holding `value`
    #[inline]
    pub const fn from_value(value: T) -> Self {
        Self {
            value: MaybeUninit::new(value),
            occupied: true,
        }
    }

    /// Create a slot mirroring `value`
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from_value(value),
            None => Self::new(),
        }
    }

    /// Check whether the slot holds a value
    #[inline]
    pub fn has_value(&self) -> bool {
        self.occupied
    }

    /// Reference to the held value without checking occupancy
    ///
    /// # Safety
    ///
    /// The slot must hold a value (`has_value()` is true).
    #[inline]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.occupied);
        unsafe { self.value.assume_init_ref() }
    }

    /// Mutable reference to the held value without checking occupancy
    ///
    /// # Safety
    ///
    /// The slot must hold a value (`has_value()` is true).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.occupied);
        unsafe { self.value.assume_init_mut() }
    }

    /// Pointer to the value storage, valid to dereference only while occupied
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.value.as_ptr()
    }

    /// Mutable pointer to the value storage, valid to dereference only while occupied
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.value.as_mut_ptr()
    }

    /// Reference to the held value, or `BadOptionalAccess` when empty
    pub fn value(&self) -> Result<&T> {
        self.get().ok_or(VectorError::BadOptionalAccess)
    }

    /// Mutable reference to the held value, or `BadOptionalAccess` when empty
    pub fn value_mut(&mut self) -> Result<&mut T> {
        self.get_mut().ok_or(VectorError::BadOptionalAccess)
    }

    /// Consume the slot and return its value, or `BadOptionalAccess` when empty
    pub fn into_value(mut self) -> Result<T> {
        self.take().ok_or(VectorError::BadOptionalAccess)
    }

    /// Reference to the held value, if any
    #[inline]
    pub fn get(&self) -> Option<&T> {
        if self.occupied {
            Some(unsafe { self.value.assume_init_ref() })
        } else {
            None
        }
    }

    /// Mutable reference to the held value, if any
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.occupied {
            Some(unsafe { self.value.assume_init_mut() })
        } else {
            None
        }
    }

    /// Move the value out, leaving the slot empty
    pub fn take(&mut self) -> Option<T> {
        if self.occupied {
            self.occupied = false;
            Some(unsafe { self.value.assume_init_read() })
        } else {
            None
        }
    }

    /// Store `value`, assigning over an existing value or constructing a new one
    pub fn set(&mut self, value: T) {
        if self.occupied {
            unsafe {
                *self.value.assume_init_mut() = value;
            }
        } else {
            self.value.write(value);
            self.occupied = true;
        }
    }

    /// Drop the held value, if any, and mark the slot empty
    pub fn reset(&mut self) {
        if self.occupied {
            self.occupied = false;
            unsafe {
                ptr::drop_in_place(self.value.as_mut_ptr());
            }
        }
    }

    /// Replace any held value with `value`
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.emplace_with(|| value)
    }

    /// Drop any held value, then construct a new one in place with `f`
    ///
    /// If `f` panics the slot is left empty.
    pub fn emplace_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reset();
        let value = self.value.write(f());
        self.occupied = true;
        value
    }

    /// Make `self` mirror `other`: same occupancy, and a clone of its value
    ///
    /// | self | other | effect |
    /// |---|---|---|
    /// | occupied | occupied | `clone_from` into the existing value |
    /// | occupied | empty | drop own value |
    /// | empty | occupied | clone-construct in place |
    /// | empty | empty | nothing |
    pub fn assign_from(&mut self, other: &Self)
    where
        T: Clone,
    {
        match (self.occupied, other.get()) {
            (true, Some(source)) => unsafe { self.value.assume_init_mut() }.clone_from(source),
            (true, None) => self.reset(),
            (false, Some(source)) => {
                self.value.write(source.clone());
                self.occupied = true;
            }
            (false, None) => {}
        }
    }

    /// Move `other`'s value into `self`, leaving `other` empty
    ///
    /// Follows the same four occupancy cases as [`assign_from`](Self::assign_from),
    /// with moves in place of clones.
    pub fn assign_take(&mut self, other: &mut Self) {
        match other.take() {
            Some(value) => self.set(value),
            None => self.reset(),
        }
    }
}

impl<T> Default for SingleSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SingleSlot<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T> From<T> for SingleSlot<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T> From<SingleSlot<T>> for Option<T> {
    fn from(mut slot: SingleSlot<T>) -> Self {
        slot.take()
    }
}

impl<T: Clone> Clone for SingleSlot<T> {
    fn clone(&self) -> Self {
        match self.get() {
            Some(value) => Self::from_value(value.clone()),
            None => Self::new(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

impl<T: fmt::Debug> fmt::Debug for SingleSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SingleSlot").field(&self.get()).finish()
    }
}

impl<T: PartialEq> PartialEq for SingleSlot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: Eq> Eq for SingleSlot<T> {}
