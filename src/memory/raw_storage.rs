//! RawStorage: an owned block of uninitialized memory for `capacity` elements
//!
//! The block knows its size but nothing about which slots hold live values.
//! Whoever places values into it tracks occupancy and drops them before the
//! block goes away; dropping a `RawStorage` only releases bytes.

use crate::error::{Result, VectorError};
use std::alloc::{self, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

/// Owned, uninitialized storage for up to `capacity` values of `T`
///
/// `RawStorage` is deliberately not `Clone`: duplicating the bytes of live
/// values would create two owners for each of them.
///
/// # Examples
///
/// ```rust
/// use advanced_vector::RawStorage;
///
/// let mut storage: RawStorage<String> = RawStorage::with_capacity(4).unwrap();
/// assert_eq!(storage.capacity(), 4);
///
/// unsafe {
///     storage.slot(0).write(String::from("hello"));
///     assert_eq!(&*storage.slot(0), "hello");
///     storage.slot(0).drop_in_place();
/// }
/// ```
pub struct RawStorage<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

impl<T> RawStorage<T> {
    /// Create an empty block that owns no memory
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocate uninitialized memory for exactly `capacity` values
    ///
    /// A zero capacity (or a zero-sized `T`) allocates nothing. Allocation
    /// failure and size overflow are reported as
    /// [`VectorError::OutOfMemory`].
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Ok(Self::new());
        }

        let layout = Layout::array::<T>(capacity)
            .map_err(|_| VectorError::out_of_memory(capacity.saturating_mul(mem::size_of::<T>())))?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        let raw = unsafe { alloc::alloc(layout) as *mut T };
        let ptr = match NonNull::new(raw) {
            Some(ptr) => ptr,
            None => {
                let err = VectorError::out_of_memory(layout.size());
                log::warn!("[{}] raw storage allocation failed: {}", err.category(), err);
                return Err(err);
            }
        };

        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Number of element slots in the block
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pointer to the first slot
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable pointer to the first slot
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Address of slot `index`, whether or not it holds a live value
    ///
    /// `index == capacity` is allowed and yields the one-past-the-end address.
    /// No bounds check is performed in release builds.
    #[inline]
    pub fn slot(&mut self, index: usize) -> *mut T {
        debug_assert!(index <= self.capacity);
        self.ptr.as_ptr().wrapping_add(index)
    }

    /// Read-only address of slot `index`
    #[inline]
    pub fn slot_const(&self, index: usize) -> *const T {
        debug_assert!(index <= self.capacity);
        self.ptr.as_ptr().wrapping_add(index) as *const T
    }

    /// Exchange blocks with `other` without touching any element
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Move the block out, leaving `self` empty
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    fn layout(&self) -> Option<Layout> {
        if self.capacity == 0 {
            return None;
        }
        Layout::array::<T>(self.capacity)
            .ok()
            .filter(|layout| layout.size() != 0)
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        if let Some(layout) = self.layout() {
            unsafe {
                alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout);
            }
        }
    }
}

impl<T> fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStorage")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}

// Safety: RawStorage owns its block exclusively, like Box<[MaybeUninit<T>]>
unsafe impl<T: Send> Send for RawStorage<T> {}

// Safety: shared access only hands out raw pointers
unsafe impl<T: Sync> Sync for RawStorage<T> {}
