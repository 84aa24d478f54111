use core::convert::Infallible;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice;
use core::slice::SliceIndex;

use super::iter::Iter;
use super::region::Inner;
use super::region::Staged;
#[cfg(feature = "std_alloc")]
use crate::types::Global;
use crate::types::AllocStrategy;
use crate::types::ErrorReason;
use crate::types::VecErr;
use crate::types::VecResult;

/// A contiguous growable array whose memory and element lifecycle go through
/// an `AllocStrategy`.
///
/// Slots `[0, len)` hold live elements and `[len, capacity)` are
/// uninitialized. When it needs more room a whole new region is acquired, the
/// elements are moved over, and the old region is released. It is never grown
/// in place.
///
/// Every fallible operation returns a `VecResult`. On failure `reserve` and
/// the push family leave the array exactly as it was. `assign` leaves it
/// empty without a region.
#[cfg(feature = "std_alloc")]
pub struct Vector<T, S: AllocStrategy = Global> {
    inner: Inner<T, S>,
    len:   usize,
    _ph:   PhantomData<T>,
}

/// See the `std_alloc` version, this one just has no default strategy.
#[cfg(not(feature = "std_alloc"))]
pub struct Vector<T, S: AllocStrategy> {
    inner: Inner<T, S>,
    len:   usize,
    _ph:   PhantomData<T>,
}

unsafe impl<T: Send, S: AllocStrategy + Send> Send for Vector<T, S> {}
unsafe impl<T: Sync, S: AllocStrategy + Sync> Sync for Vector<T, S> {}

#[cfg(feature = "std_alloc")]
impl<T> Vector<T> {
    /// An empty array using the `Global` strategy. Nothing is allocated.
    pub const fn new() -> Self {
        return Self::new_in(Global);
    }

    /// An empty array with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> VecResult<Self> {
        return Self::with_capacity_in(capacity, Global);
    }

    /// An array holding `count` clones of `value`.
    pub fn from_elem(count: usize, value: &T) -> VecResult<Self>
    where
        T: Clone,
    {
        return Self::from_elem_in(count, value, Global);
    }

    /// An array holding `count` default values.
    pub fn with_len(count: usize) -> VecResult<Self>
    where
        T: Default,
    {
        return Self::with_len_in(count, Global);
    }
}

impl<T, S: AllocStrategy> Vector<T, S> {
    pub const fn new_in(strategy: S) -> Self {
        return Self {
            inner: Inner::new_in(strategy),
            len:   0,
            _ph:   PhantomData,
        };
    }

    pub fn with_capacity_in(capacity: usize, strategy: S) -> VecResult<Self> {
        let mut ret = Self::new_in(strategy);
        ret.reserve(capacity)?;
        return Ok(ret);
    }

    /// Builds an array of exactly `count` elements where element `i` is
    /// `init(i)`.
    ///
    /// If `init` fails, the elements already built are destroyed, the region
    /// is released and `ConstructionFailed` is returned.
    pub fn try_from_fn_in<E, F>(count: usize, init: F, strategy: S) -> VecResult<Self>
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        let mut ret = Self::new_in(strategy);
        ret.try_assign_with(count, init)?;
        return Ok(ret);
    }

    pub fn from_elem_in(count: usize, value: &T, strategy: S) -> VecResult<Self>
    where
        T: Clone,
    {
        return Self::try_from_fn_in(count, |_| Ok::<T, Infallible>(value.clone()), strategy);
    }

    pub fn with_len_in(count: usize, strategy: S) -> VecResult<Self>
    where
        T: Default,
    {
        return Self::try_from_fn_in(count, |_| Ok::<T, Infallible>(T::default()), strategy);
    }

    /// Makes sure the capacity is at least `capacity`.
    ///
    /// Does nothing when there already is enough room. Otherwise the elements
    /// are moved to a new region of exactly `capacity` slots. If that region
    /// can't be acquired the array is left untouched.
    pub fn reserve(&mut self, capacity: usize) -> VecResult<()> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        return self.inner.relocate(self.len, capacity);
    }

    /// Replaces the contents with `count` clones of `value`.
    pub fn assign(&mut self, count: usize, value: &T) -> VecResult<()>
    where
        T: Clone,
    {
        return self.try_assign_with(count, |_| Ok::<T, Infallible>(value.clone()));
    }

    /// Replaces the contents with `count` elements where element `i` is
    /// `init(i)`. The capacity afterwards is exactly `count`.
    ///
    /// The new region is filled before the old elements are touched. If that
    /// fails, by an error or a panic out of `init`, the array ends up empty
    /// and without a region.
    pub fn try_assign_with<E, F>(&mut self, count: usize, init: F) -> VecResult<()>
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        let guard = ResetOnDrop(self);
        let (ptr, capacity) = Staged::build(guard.0.inner.strategy(), count, init).map(Staged::finish)?;
        mem::forget(guard);

        self.destroy_live();
        self.inner.adopt(ptr, capacity);
        self.len = count;
        return Ok(());
    }

    pub fn push_back(&mut self, item: T) -> VecResult<()> {
        return self.try_emplace_back(|| Ok::<T, Infallible>(item));
    }

    /// Appends the element `init` builds, directly into the next free slot.
    pub fn emplace_back<F>(&mut self, init: F) -> VecResult<()>
    where
        F: FnOnce() -> T,
    {
        return self.try_emplace_back(|| Ok::<T, Infallible>(init()));
    }

    /// Like `emplace_back` but `init` may fail.
    ///
    /// When it does `ConstructionFailed` is returned, and the length is
    /// unchanged. The array may still have grown.
    pub fn try_emplace_back<E, F>(&mut self, init: F) -> VecResult<()>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.grow_if_full()?;

        let slot = unsafe { self.inner.slot(self.len) };
        let ret = unsafe { self.inner.strategy().construct_at(slot, init) };
        if ret.is_err() {
            return Err(VecErr::new(ErrorReason::ConstructionFailed));
        }
        self.len += 1;
        return Ok(());
    }

    /// Moves the last element out.
    ///
    /// The element is handed to the caller, not destroyed, so the strategy's
    /// `destroy_at` is never called for it.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let ret = unsafe { self.inner.slot(self.len).read() };
        return Some(ret);
    }

    /// Destroys every element. The region is kept.
    pub fn clear(&mut self) {
        self.destroy_live();
    }

    /// A copy with the same elements and a capacity equal to the length.
    pub fn try_clone(&self) -> VecResult<Self>
    where
        T: Clone,
        S: Clone,
    {
        let items = self.as_slice();
        let strategy = self.inner.strategy().clone();
        return Self::try_from_fn_in(items.len(), |i| Ok::<T, Infallible>(items[i].clone()), strategy);
    }

    /// Bounds checked access.
    pub fn at(&self, index: usize) -> VecResult<&T> {
        let Some(item) = self.as_slice().get(index) else {
            return Err(VecErr::new(ErrorReason::IndexOutOfRange));
        };
        return Ok(item);
    }

    pub fn at_mut(&mut self, index: usize) -> VecResult<&mut T> {
        let Some(item) = self.as_mut_slice().get_mut(index) else {
            return Err(VecErr::new(ErrorReason::IndexOutOfRange));
        };
        return Ok(item);
    }

    /// # Safety
    /// `index` must be less than `len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        return unsafe { self.as_slice().get_unchecked(index) };
    }

    /// # Safety
    /// `index` must be less than `len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        return unsafe { self.as_mut_slice().get_unchecked_mut(index) };
    }

    /// A cursor at the first element.
    #[inline]
    pub fn begin(&self) -> Iter<'_, T> {
        return Iter::new(self.as_slice(), 0);
    }

    /// A cursor one past the last element.
    #[inline]
    pub fn end(&self) -> Iter<'_, T> {
        return Iter::new(self.as_slice(), self.len);
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        return self.begin();
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        return self.inner.capacity();
    }

    #[inline]
    pub const fn len(&self) -> usize {
        return self.len;
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    #[inline]
    pub const fn strategy(&self) -> &S {
        return self.inner.strategy();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        return self.inner.get_ptr();
    }

    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        return self.inner.get_ptr();
    }

    fn grow_if_full(&mut self) -> VecResult<()> {
        let cap = self.capacity();
        if self.len < cap {
            return Ok(());
        }
        let new_cap = match cap {
            0 => 2,
            _ => {
                let Some(new_cap) = cap.checked_mul(2) else {
                    return Err(VecErr::new(ErrorReason::CapacityOverflow));
                };
                new_cap
            }
        };
        return self.reserve(new_cap);
    }

    fn reset(&mut self) {
        self.destroy_live();
        self.inner.release();
    }

    fn destroy_live(&mut self) {
        // Zero the length first so a panicking destructor can't lead to a
        // second destruction from `drop`.
        let len = self.len;
        self.len = 0;
        for i in 0..len {
            unsafe { self.inner.strategy().destroy_at(self.inner.slot(i)) };
        }
    }
}

/// Empties the array and gives back its region unless forgotten.
struct ResetOnDrop<'a, T, S: AllocStrategy>(&'a mut Vector<T, S>);

impl<T, S: AllocStrategy> Drop for ResetOnDrop<'_, T, S> {
    fn drop(&mut self) {
        self.0.reset();
    }
}

impl<T, S: AllocStrategy> Drop for Vector<T, S> {
    fn drop(&mut self) {
        // `inner` releases the region once this returns.
        self.destroy_live();
    }
}

impl<T, S: AllocStrategy + Default> Default for Vector<T, S> {
    fn default() -> Self {
        return Self::new_in(S::default());
    }
}

impl<T: fmt::Debug, S: AllocStrategy> fmt::Debug for Vector<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}

impl<T, S: AllocStrategy, I: SliceIndex<[T]>> Index<I> for Vector<T, S> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        return &self.as_slice()[index];
    }
}

impl<T, S: AllocStrategy, I: SliceIndex<[T]>> IndexMut<I> for Vector<T, S> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        return &mut self.as_mut_slice()[index];
    }
}

impl<'a, T, S: AllocStrategy> IntoIterator for &'a Vector<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}
