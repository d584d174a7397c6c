//! Growable, double-ended sequences of limbs.
//!
//! A limb is one base-[`LIMB_BASE`] digit group.
//! [`Limbs`] stores limbs most significant first,
//! with free space at both ends of the backing storage,
//! so that prepending and appending are amortized O(1).

use {std::{fmt, iter::FusedIterator}, tracing::trace};

/// The base of each limb.
pub const LIMB_BASE: u32 = 1_000_000_000;

/// The number of decimal digits that make up a full limb.
pub const LIMB_DIGITS: usize = 9;

/// The capacity of a freshly created buffer.
pub const DEFAULT_CAPACITY: usize = 10;

/// The number of decimal digits in a limb, without leading zeros.
///
/// Zero is considered to have one digit.
pub fn digit_len(limb: u32) -> usize
{
    limb.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Sequence of limbs, most significant first.
///
/// Reading a limb outside the sequence yields zero,
/// as if the sequence were padded with zeros on both sides.
#[derive(Clone)]
pub struct Limbs
{
    // INVARIANT: start + len <= storage.len().
    // INVARIANT: Each live limb is less than LIMB_BASE.
    storage: Box<[u32]>,
    start: usize,
    len: usize,

    /// Digit length of the most significant limb, or 0 if empty.
    leading_digits: usize,
}

impl Limbs
{
    /// Create an empty sequence.
    pub fn new() -> Self
    {
        Self::with_front_capacity(0)
    }

    /// Create an empty sequence that can take
    /// `limbs` prepends before it needs to grow.
    pub fn with_front_capacity(limbs: usize) -> Self
    {
        let capacity = limbs + DEFAULT_CAPACITY;
        Self{
            storage: vec![0; capacity].into_boxed_slice(),
            start: limbs + DEFAULT_CAPACITY / 2,
            len: 0,
            leading_digits: 0,
        }
    }

    /// The number of limbs in the sequence.
    pub fn len(&self) -> usize
    {
        self.len
    }

    /// Whether the sequence has no limbs.
    pub fn is_empty(&self) -> bool
    {
        self.len == 0
    }

    /// The number of limbs the backing storage can hold.
    pub fn capacity(&self) -> usize
    {
        self.storage.len()
    }

    /// The number of digits in the most significant limb.
    ///
    /// This is zero if and only if the sequence is empty.
    pub fn leading_digits(&self) -> usize
    {
        self.leading_digits
    }

    /// The limb at the given position, counting from the most significant.
    ///
    /// Any position outside the sequence yields zero.
    pub fn get(&self, index: isize) -> u32
    {
        if index < 0 || index as usize >= self.len {
            return 0;
        }
        // SAFETY: start + index < start + len <= storage.len().
        unsafe { *self.storage.get_unchecked(self.start + index as usize) }
    }

    /// The limb at the given position, counting from the least significant.
    ///
    /// Any position outside the sequence yields zero.
    pub fn low(&self, index: usize) -> u32
    {
        if index >= self.len {
            return 0;
        }
        self.get((self.len - 1 - index) as isize)
    }

    /// Overwrite the limb at the given position,
    /// counting from the least significant.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the sequence,
    /// or if the limb is not less than [`LIMB_BASE`].
    pub fn set_low(&mut self, index: usize, limb: u32)
    {
        assert!(limb < LIMB_BASE, "Limb out of range: {}", limb);
        assert!(index < self.len, "Limb index out of range: {}", index);
        let offset = self.len - 1 - index;
        self.storage[self.start + offset] = limb;
        if offset == 0 {
            self.leading_digits = digit_len(limb);
        }
    }

    /// Insert a new most significant limb.
    ///
    /// # Panics
    ///
    /// Panics if the limb is not less than [`LIMB_BASE`].
    pub fn push_front(&mut self, limb: u32)
    {
        assert!(limb < LIMB_BASE, "Limb out of range: {}", limb);
        if self.start == 0 {
            self.grow();
        }
        self.start -= 1;
        self.storage[self.start] = limb;
        self.len += 1;
        self.leading_digits = digit_len(limb);
    }

    /// Insert a new least significant limb.
    ///
    /// # Panics
    ///
    /// Panics if the limb is not less than [`LIMB_BASE`].
    pub fn push_back(&mut self, limb: u32)
    {
        assert!(limb < LIMB_BASE, "Limb out of range: {}", limb);
        if self.start + self.len == self.storage.len() {
            self.grow();
        }
        self.storage[self.start + self.len] = limb;
        self.len += 1;
        if self.len == 1 {
            self.leading_digits = digit_len(limb);
        }
    }

    /// Remove and return the most significant limb.
    pub fn pop_front(&mut self) -> Option<u32>
    {
        if self.len == 0 {
            return None;
        }
        let limb = self.storage[self.start];
        self.start += 1;
        self.len -= 1;
        self.leading_digits =
            if self.len == 0 { 0 } else { digit_len(self.get(0)) };
        Some(limb)
    }

    /// Iterate over the limbs, most significant first.
    pub fn iter(&self) -> Iter<'_>
    {
        Iter{inner: self.as_slice().iter()}
    }

    fn as_slice(&self) -> &[u32]
    {
        &self.storage[self.start .. self.start + self.len]
    }

    /// Double the capacity and move the limbs to the center.
    ///
    /// Afterwards there is free space at both ends,
    /// so neither end needs to grow again soon.
    #[cold]
    fn grow(&mut self)
    {
        let capacity = (self.storage.len() * 2).max(DEFAULT_CAPACITY);
        let start = (capacity - self.len) / 2;

        trace!(old = self.storage.len(), new = capacity, "Growing limbs");

        let mut storage = vec![0; capacity].into_boxed_slice();
        storage[start .. start + self.len].copy_from_slice(self.as_slice());

        self.storage = storage;
        self.start = start;
    }
}

impl Default for Limbs
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl PartialEq for Limbs
{
    fn eq(&self, other: &Self) -> bool
    {
        // Spare capacity is not part of the value.
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Limbs
{
}

impl fmt::Debug for Limbs
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator returned by [`Limbs::iter`].
#[derive(Clone)]
pub struct Iter<'a>
{
    inner: std::slice::Iter<'a, u32>,
}

impl<'a> Iterator for Iter<'a>
{
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item>
    {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        self.inner.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a>
{
    fn next_back(&mut self) -> Option<Self::Item>
    {
        self.inner.next_back().copied()
    }
}

impl<'a> ExactSizeIterator for Iter<'a>
{
}

impl<'a> FusedIterator for Iter<'a>
{
}
