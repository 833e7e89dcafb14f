//! DynamicVec: growable contiguous vector over explicitly managed raw storage
//!
//! Allocation and object lifetime are decoupled: a [`RawStorage`] block owns
//! the bytes, and the vector constructs values into slots `[0, len)` with
//! `ptr::write` and destroys them with `drop_in_place`. Every multi-element
//! operation either completes or, when element code panics, unwinds back to
//! the state described on the method.

use crate::config::{Config, GrowthPolicy, VecConfig};
use crate::error::{check_bounds, check_position, Result, VectorError};
use crate::memory::relocate::{clone_into, destroy_n, fill_with, relocate};
use crate::memory::RawStorage;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice::{self, SliceIndex};

/// Growable vector with amortized O(1) appends and panic-safe bulk operations
///
/// Live elements occupy slots `[0, len)` of an exclusively owned
/// [`RawStorage`]; slots `[len, capacity)` are uninitialized. When a full
/// vector grows it allocates a new block (by default `max(1, 2 * capacity)`
/// slots), moves the elements over and releases the old block.
///
/// # Examples
///
/// ```rust
/// use advanced_vector::DynamicVec;
///
/// let mut vec = DynamicVec::new();
/// vec.push_back(1).unwrap();
/// vec.push_back(2).unwrap();
/// vec.push_back(3).unwrap();
/// assert_eq!(vec.as_slice(), &[1, 2, 3]);
/// assert_eq!(vec.capacity(), 4);
///
/// vec.insert(1, 99).unwrap();
/// assert_eq!(vec.as_slice(), &[1, 99, 2, 3]);
///
/// vec.erase(1).unwrap();
/// assert_eq!(vec.as_slice(), &[1, 2, 3]);
/// ```
pub struct DynamicVec<T> {
    storage: RawStorage<T>,
    len: usize,
    growth: GrowthPolicy,
    reallocations: usize,
}

#[inline(never)]
#[cold]
fn allocation_failure(err: VectorError) -> ! {
    panic!("DynamicVec allocation failed: {}", err)
}

impl<T> DynamicVec<T> {
    /// Create a new empty vector without allocating
    #[inline]
    pub const fn new() -> Self {
        Self {
            storage: RawStorage::new(),
            len: 0,
            growth: GrowthPolicy::DOUBLING,
            reallocations: 0,
        }
    }

    /// Create an empty vector with room for exactly `capacity` elements
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            storage: RawStorage::with_capacity(capacity)?,
            len: 0,
            growth: GrowthPolicy::DOUBLING,
            reallocations: 0,
        })
    }

    /// Create an empty vector using the capacity and growth settings of `config`
    pub fn with_config(config: &VecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            storage: RawStorage::with_capacity(config.initial_capacity)?,
            len: 0,
            growth: config.growth_policy(),
            reallocations: 0,
        })
    }

    /// Create a vector of `len` default values
    ///
    /// If `T::default()` panics part way, the values already built are dropped
    /// and the block is released before the panic continues.
    pub fn with_len(len: usize) -> Result<Self>
    where
        T: Default,
    {
        let mut storage = RawStorage::<T>::with_capacity(len)?;
        unsafe {
            fill_with(storage.as_mut_ptr(), len, T::default);
        }
        Ok(Self {
            storage,
            len,
            growth: GrowthPolicy::DOUBLING,
            reallocations: 0,
        })
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the vector holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the current block
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Growth policy used when a full vector needs more room
    #[inline]
    pub fn growth_policy(&self) -> GrowthPolicy {
        self.growth
    }

    /// How many times the vector has replaced its storage block
    #[inline]
    pub fn reallocation_count(&self) -> usize {
        self.reallocations
    }

    /// Pointer to the first element
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Mutable pointer to the first element
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }

    /// Get the live elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.storage.as_ptr(), self.len) }
    }

    /// Get the live elements as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.storage.as_mut_ptr(), self.len) }
    }

    /// Get a reference to the element at `index`, if it is live
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Get a mutable reference to the element at `index`, if it is live
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Get a reference to the element at the specified index without bounds checking
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index < self.len()`
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        unsafe { &*self.storage.slot_const(index) }
    }

    /// Get a mutable reference to the element at the specified index without bounds checking
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index < self.len()`
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        unsafe { &mut *self.storage.slot(index) }
    }

    /// Iterate over the live elements in index order
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the live elements in index order
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Ensure the block holds at least `new_capacity` slots
    ///
    /// Does nothing when the capacity is already large enough. Otherwise
    /// allocates exactly `new_capacity` slots and moves the elements over.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        self.reallocate(new_capacity)
    }

    /// Reserve space for at least `additional` more elements
    pub fn reserve_additional(&mut self, additional: usize) -> Result<()> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or_else(|| VectorError::out_of_memory(usize::MAX))?;
        self.reserve(required)
    }

    /// Shrink the block to exactly `len` slots
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        if self.len == self.capacity() {
            return Ok(());
        }
        self.reallocate(self.len)
    }

    // Room for `additional` more, at least one growth-policy step when it must reallocate
    fn reserve_for_append(&mut self, additional: usize) -> Result<()> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or_else(|| VectorError::out_of_memory(usize::MAX))?;
        if required <= self.capacity() {
            return Ok(());
        }
        let grown = self.growth.next_capacity(self.capacity());
        self.reallocate(required.max(grown))
    }

    fn reallocate(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity >= self.len);
        let mut new_storage = RawStorage::<T>::with_capacity(new_capacity)?;
        unsafe {
            relocate(self.storage.as_ptr(), new_storage.as_mut_ptr(), self.len);
        }
        self.adopt(new_storage);
        Ok(())
    }

    // The previous block's elements must already have been moved out.
    fn adopt(&mut self, mut new_storage: RawStorage<T>) {
        log::trace!(
            "DynamicVec block replaced: capacity {} -> {} ({} live)",
            self.storage.capacity(),
            new_storage.capacity(),
            self.len
        );
        self.storage.swap(&mut new_storage);
        self.reallocations += 1;
    }

    /// Resize to `new_len`, filling new slots with `T::default()`
    pub fn resize(&mut self, new_len: usize) -> Result<()>
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Resize to `new_len`, filling new slots with values produced by `f`
    ///
    /// Shrinking drops the trailing elements. Growing first reserves exactly
    /// `new_len` slots; if `f` panics, the values it already produced are
    /// dropped and the length is unchanged.
    pub fn resize_with<F>(&mut self, new_len: usize, f: F) -> Result<()>
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }

        self.reserve(new_len)?;
        unsafe {
            fill_with(self.storage.slot(self.len), new_len - self.len, f);
        }
        self.len = new_len;
        Ok(())
    }

    /// Drop every element past `new_len`
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail = self.len - new_len;
        // Shorten first so a panicking destructor cannot cause a double drop
        self.len = new_len;
        unsafe {
            destroy_n(self.storage.slot(new_len), tail);
        }
    }

    /// Drop all elements, keeping the block
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Append `value` to the end of the vector
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.emplace_back(value).map(|_| ())
    }

    /// Append `value` and return a reference to it
    #[inline]
    pub fn emplace_back(&mut self, value: T) -> Result<&mut T> {
        self.emplace_back_with(|| value)
    }

    /// Construct a value with `f` directly in the next free slot
    ///
    /// When the vector is full, the value is built at its final position in
    /// the new block before the existing elements move, so a panicking `f`
    /// leaves the vector untouched. The length grows only after the value
    /// exists.
    pub fn emplace_back_with<F>(&mut self, f: F) -> Result<&mut T>
    where
        F: FnOnce() -> T,
    {
        let index = self.len;
        if self.len == self.capacity() {
            let new_capacity = self.growth.next_capacity(self.capacity());
            let mut new_storage = RawStorage::<T>::with_capacity(new_capacity)?;
            unsafe {
                ptr::write(new_storage.slot(index), f());
                relocate(self.storage.as_ptr(), new_storage.as_mut_ptr(), self.len);
            }
            self.adopt(new_storage);
        } else {
            unsafe {
                ptr::write(self.storage.slot(index), f());
            }
        }
        self.len += 1;
        Ok(unsafe { &mut *self.storage.slot(index) })
    }

    /// Remove and return the last element
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(unsafe { ptr::read(self.storage.slot_const(self.len)) })
        }
    }

    /// Insert `value` at `index`, shifting later elements right
    ///
    /// `index` may equal `len()`, which appends. Returns a reference to the
    /// inserted element.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T> {
        self.emplace_with(index, || value)
    }

    /// Construct a value with `f` at `index`, shifting later elements right
    ///
    /// With room to spare the value is built first, then `[index, len)` moves
    /// one slot right and the value lands in the gap. A full vector instead
    /// builds the value at `index` of a new block and moves the prefix and the
    /// suffix around it; the old block is released only after both moves.
    /// If `f` panics, the vector is unchanged.
    pub fn emplace_with<F>(&mut self, index: usize, f: F) -> Result<&mut T>
    where
        F: FnOnce() -> T,
    {
        check_position(index, self.len)?;
        if index == self.len {
            return self.emplace_back_with(f);
        }

        if self.len == self.capacity() {
            let new_capacity = self.growth.next_capacity(self.capacity());
            let mut new_storage = RawStorage::<T>::with_capacity(new_capacity)?;
            unsafe {
                let src: *const T = self.storage.as_ptr();
                let dst: *mut T = new_storage.as_mut_ptr();
                ptr::write(dst.add(index), f());
                relocate(src, dst, index);
                relocate(src.add(index), dst.add(index + 1), self.len - index);
            }
            self.adopt(new_storage);
        } else {
            let value = f();
            unsafe {
                let slot = self.storage.slot(index);
                ptr::copy(slot, slot.add(1), self.len - index);
                ptr::write(slot, value);
            }
        }
        self.len += 1;
        Ok(unsafe { &mut *self.storage.slot(index) })
    }

    /// Drop the element at `index`, shifting later elements left
    ///
    /// Returns `index`, which now addresses the element that followed the
    /// erased one (or `len()` if it was last).
    pub fn erase(&mut self, index: usize) -> Result<usize> {
        let removed = self.remove(index)?;
        drop(removed);
        Ok(index)
    }

    /// Remove and return the element at `index`, shifting later elements left
    pub fn remove(&mut self, index: usize) -> Result<T> {
        check_bounds(index, self.len)?;
        unsafe {
            let slot = self.storage.slot(index);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Exchange contents with `other` in O(1)
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Move the contents out, leaving `self` with no elements and no block
    pub fn take(&mut self) -> Self {
        Self {
            storage: self.storage.take(),
            len: mem::replace(&mut self.len, 0),
            growth: self.growth,
            reallocations: mem::replace(&mut self.reallocations, 0),
        }
    }

    /// Replace the contents with those of `rhs` by swapping
    ///
    /// The previous contents of `self` end up in `rhs`.
    #[inline]
    pub fn move_assign(&mut self, rhs: &mut Self) {
        self.swap(rhs);
    }

    /// Clone the vector into a block sized to exactly `len()`
    ///
    /// If the k-th clone panics, the k clones are dropped and the block is
    /// released; `self` is never modified.
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        let mut storage = RawStorage::<T>::with_capacity(self.len)?;
        unsafe {
            clone_into(self.as_slice(), storage.as_mut_ptr());
        }
        Ok(Self {
            storage,
            len: self.len,
            growth: self.growth,
            reallocations: 0,
        })
    }

    /// Make `self` an element-wise copy of `rhs`
    ///
    /// If `rhs` does not fit in the current block, a full copy is built first
    /// and swapped in. Otherwise the block is reused: the common prefix is
    /// assigned with `clone_from`, then surplus elements are dropped or missing
    /// ones cloned in. A panic while cloning the missing tail leaves `self`
    /// with the assigned prefix and none of the tail.
    pub fn assign_from(&mut self, rhs: &Self) -> Result<()>
    where
        T: Clone,
    {
        if rhs.len > self.capacity() {
            let mut copy = rhs.try_clone()?;
            self.storage.swap(&mut copy.storage);
            mem::swap(&mut self.len, &mut copy.len);
            self.reallocations += 1;
            return Ok(());
        }

        let common = self.len.min(rhs.len);
        for (dst, src) in self.as_mut_slice()[..common]
            .iter_mut()
            .zip(&rhs.as_slice()[..common])
        {
            dst.clone_from(src);
        }

        if rhs.len < self.len {
            self.truncate(rhs.len);
        } else {
            let start = self.len;
            unsafe {
                clone_into(&rhs.as_slice()[start..], self.storage.slot(start));
            }
            self.len = rhs.len;
        }
        Ok(())
    }

    /// Append every item of `iter`, growing at most once for its exact length
    pub fn try_extend<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        self.reserve_for_append(iter.len())?;
        for item in iter {
            self.emplace_back(item)?;
        }
        Ok(())
    }

    /// Append clones of every element of `items`
    pub fn extend_from_slice(&mut self, items: &[T]) -> Result<()>
    where
        T: Clone,
    {
        self.reserve_for_append(items.len())?;
        let start = self.len;
        unsafe {
            clone_into(items, self.storage.slot(start));
        }
        self.len += items.len();
        Ok(())
    }
}

impl<T> Default for DynamicVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicVec<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Deref for DynamicVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for DynamicVec<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynamicVec<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicVec<T> {}

impl<T: Clone> Clone for DynamicVec<T> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|e| allocation_failure(e))
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.assign_from(source) {
            allocation_failure(e);
        }
    }
}

impl<T> FromIterator<T> for DynamicVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T> Extend<T> for DynamicVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Err(e) = self.reserve_for_append(lower) {
            allocation_failure(e);
        }
        for item in iter {
            if let Err(e) = self.push_back(item) {
                allocation_failure(e);
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for DynamicVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let end = mem::replace(&mut self.len, 0);
        IntoIter {
            storage: self.storage.take(),
            start: 0,
            end,
        }
    }
}

/// Owning iterator over the elements of a [`DynamicVec`]
///
/// Elements not yet yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    storage: RawStorage<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// Remaining elements as a slice
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            slice::from_raw_parts(self.storage.slot_const(self.start), self.end - self.start)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        let value = unsafe { ptr::read(self.storage.slot_const(self.start)) };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        Some(unsafe { ptr::read(self.storage.slot_const(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.end - self.start;
        self.end = self.start;
        unsafe {
            destroy_n(self.storage.slot(self.start), remaining);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
