use std::{
    fmt,
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoundedVecError {
    #[error("The vector has zero capacity")]
    ZeroCapacity,
    #[error("Requested {0} elements, but the capacity of the vector is {1}")]
    CapacityExceeded(usize, usize),
    #[error("Index {0} is out of range for a vector with {1} elements")]
    IndexOutOfRange(usize, usize),
}

impl From<BoundedVecError> for u32 {
    fn from(e: BoundedVecError) -> u32 {
        match e {
            BoundedVecError::ZeroCapacity => 5001,
            BoundedVecError::CapacityExceeded(_, _) => 5002,
            BoundedVecError::IndexOutOfRange(_, _) => 5003,
        }
    }
}

/// `CyclicBoundedVec` is a vector which:
///
/// * Forbids post-initialization reallocations, the capacity is defined only
///   once.
/// * Starts overwriting elements from the beginning once it reaches its
///   capacity.
///
/// Elements are written to the physical slots `0, 1, ..., capacity - 1, 0, ...`,
/// so the `n`-th pushed element (counting from 0) always lands in slot
/// `n % capacity`.
#[derive(Clone, PartialEq, Eq)]
pub struct CyclicBoundedVec<T>
where
    T: Clone,
{
    capacity: usize,
    first_index: usize,
    last_index: usize,
    data: Vec<T>,
}

impl<T> CyclicBoundedVec<T>
where
    T: Clone,
{
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self, BoundedVecError> {
        if capacity == 0 {
            return Err(BoundedVecError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            first_index: 0,
            last_index: 0,
            data: Vec::with_capacity(capacity),
        })
    }

    /// Creates a `CyclicBoundedVec<T>` from already written slots, as stored
    /// in a serialized account.
    ///
    /// `data` holds the physical slots `0..data.len()`. When the vector is
    /// full, the oldest element is the one right after `last_index`.
    pub fn from_parts(
        data: Vec<T>,
        capacity: usize,
        last_index: usize,
    ) -> Result<Self, BoundedVecError> {
        if capacity == 0 {
            return Err(BoundedVecError::ZeroCapacity);
        }
        if data.len() > capacity {
            return Err(BoundedVecError::CapacityExceeded(data.len(), capacity));
        }
        if last_index >= data.len().max(1) {
            return Err(BoundedVecError::IndexOutOfRange(last_index, data.len()));
        }
        // Until the vector wraps, the newest element is the last written slot.
        if !data.is_empty() && data.len() < capacity && last_index != data.len() - 1 {
            return Err(BoundedVecError::IndexOutOfRange(last_index, data.len()));
        }
        let first_index = if data.len() < capacity {
            0
        } else {
            (last_index + 1) % capacity
        };
        let mut vec = Self {
            capacity,
            first_index,
            last_index,
            data: Vec::with_capacity(capacity),
        };
        vec.data.extend(data);
        Ok(vec)
    }

    /// Returns the total number of elements the vector can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends an element to the back of the vector. Once the vector is full,
    /// the oldest element gets overwritten.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.is_empty() {
            self.data.push(value);
        } else if self.len() < self.capacity() {
            self.last_index += 1;
            self.data.push(value);
        } else {
            self.last_index = (self.last_index + 1) % self.capacity;
            self.first_index = (self.first_index + 1) % self.capacity;
            self.data[self.last_index] = value;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Returns the element stored in the physical slot `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Physical slots, in slot order (not in insertion order).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Iterates from the oldest to the newest element.
    #[inline]
    pub fn iter(&self) -> CyclicBoundedVecIterator<'_, T> {
        self.iter_from(self.first_index)
    }

    /// Iterates from the element in slot `start` to the newest element.
    #[inline]
    pub fn iter_from(&self, start: usize) -> CyclicBoundedVecIterator<'_, T> {
        CyclicBoundedVecIterator {
            vec: self,
            current: start,
            is_finished: self.is_empty(),
        }
    }

    /// Iterates from the newest to the oldest element.
    #[inline]
    pub fn iter_rev(&self) -> CyclicBoundedVecRevIterator<'_, T> {
        CyclicBoundedVecRevIterator {
            vec: self,
            current: self.last_index,
            remaining: self.len(),
        }
    }

    #[inline]
    pub fn first_index(&self) -> usize {
        self.first_index
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.data.get(self.first_index)
    }

    #[inline]
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.data.get(self.last_index)
    }

    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.data.get_mut(self.last_index)
    }
}

impl<T> fmt::Debug for CyclicBoundedVec<T>
where
    T: Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CyclicBoundedVec")
            .field("capacity", &self.capacity)
            .field("first_index", &self.first_index)
            .field("last_index", &self.last_index)
            .field("data", &self.data)
            .finish()
    }
}

impl<T, I> Index<I> for CyclicBoundedVec<T>
where
    T: Clone,
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.data.index(index)
    }
}

impl<T, I> IndexMut<I> for CyclicBoundedVec<T>
where
    T: Clone,
    I: SliceIndex<[T]>,
{
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.data.index_mut(index)
    }
}

pub struct CyclicBoundedVecIterator<'a, T>
where
    T: Clone,
{
    vec: &'a CyclicBoundedVec<T>,
    current: usize,
    is_finished: bool,
}

impl<'a, T> Iterator for CyclicBoundedVecIterator<'a, T>
where
    T: Clone,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished {
            None
        } else {
            if self.current == self.vec.last_index {
                self.is_finished = true;
            }
            let new_current = (self.current + 1) % self.vec.capacity();
            let element = self.vec.get(self.current);
            self.current = new_current;
            element
        }
    }
}

pub struct CyclicBoundedVecRevIterator<'a, T>
where
    T: Clone,
{
    vec: &'a CyclicBoundedVec<T>,
    current: usize,
    remaining: usize,
}

impl<'a, T> Iterator for CyclicBoundedVecRevIterator<'a, T>
where
    T: Clone,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let element = self.vec.get(self.current);
        self.current = (self.current + self.vec.capacity() - 1) % self.vec.capacity();
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(test)]
mod test {
    use rand::{thread_rng, Rng};

    use super::*;

    #[test]
    fn test_cyclic_bounded_vec_zero_capacity() {
        assert_eq!(
            CyclicBoundedVec::<u8>::with_capacity(0).unwrap_err(),
            BoundedVecError::ZeroCapacity
        );
    }

    #[test]
    fn test_cyclic_bounded_vec_manual() {
        let mut cyclic_bounded_vec = CyclicBoundedVec::with_capacity(8).unwrap();

        // Fill up the cyclic vector.
        //
        // ```
        //        ^                    $
        // index [0, 1, 2, 3, 4, 5, 6, 7]
        // value [0, 1, 2, 3, 4, 5, 6, 7]
        // ```
        //
        // * `^` - first element
        // * `$` - last element
        for i in 0..8 {
            cyclic_bounded_vec.push(i);
        }
        assert_eq!(cyclic_bounded_vec.first_index, 0);
        assert_eq!(cyclic_bounded_vec.last_index, 7);
        assert!(cyclic_bounded_vec.is_full());
        assert_eq!(
            cyclic_bounded_vec.iter().collect::<Vec<_>>().as_slice(),
            &[&0, &1, &2, &3, &4, &5, &6, &7]
        );

        // Overwrite half of values.
        //
        // ```
        //                   $  ^
        // index [0, 1,  2,  3, 4, 5, 6, 7]
        // value [8, 9, 10, 11, 4, 5, 6, 7]
        // ```
        for i in 0..4 {
            cyclic_bounded_vec.push(i + 8);
        }
        assert_eq!(cyclic_bounded_vec.first_index, 4);
        assert_eq!(cyclic_bounded_vec.last_index, 3);
        assert_eq!(
            cyclic_bounded_vec.iter().collect::<Vec<_>>().as_slice(),
            &[&4, &5, &6, &7, &8, &9, &10, &11]
        );
        assert_eq!(
            cyclic_bounded_vec.iter_rev().collect::<Vec<_>>().as_slice(),
            &[&11, &10, &9, &8, &7, &6, &5, &4]
        );

        // Overwrite all values from the first loop.
        //
        // ```
        //        ^                          $
        // index [0, 1,  2,  3,  4,  5,  6,  7]
        // value [8, 9, 10, 11, 12, 13, 14, 15]
        // ```
        for i in 0..4 {
            cyclic_bounded_vec.push(i + 12);
        }
        assert_eq!(cyclic_bounded_vec.first_index, 0);
        assert_eq!(cyclic_bounded_vec.last_index, 7);
        assert_eq!(
            cyclic_bounded_vec.iter().collect::<Vec<_>>().as_slice(),
            &[&8, &9, &10, &11, &12, &13, &14, &15]
        );
    }

    /// Iteration on a vector with one element.
    ///
    /// ```
    ///        ^$
    /// index [0]
    /// value [0]
    /// ```
    #[test]
    fn test_cyclic_bounded_vec_iter_one_element() {
        let mut cyclic_bounded_vec = CyclicBoundedVec::with_capacity(8).unwrap();
        cyclic_bounded_vec.push(0);

        assert_eq!(cyclic_bounded_vec.len(), 1);
        assert_eq!(cyclic_bounded_vec.capacity(), 8);
        assert_eq!(cyclic_bounded_vec.first_index, 0);
        assert_eq!(cyclic_bounded_vec.last_index, 0);

        let elements = cyclic_bounded_vec.iter().collect::<Vec<_>>();
        assert_eq!(elements.as_slice(), &[&0]);
        let elements = cyclic_bounded_vec.iter_rev().collect::<Vec<_>>();
        assert_eq!(elements.as_slice(), &[&0]);
    }

    #[test]
    fn test_cyclic_bounded_vec_iter_empty() {
        let cyclic_bounded_vec = CyclicBoundedVec::<u32>::with_capacity(4).unwrap();
        assert_eq!(cyclic_bounded_vec.iter().count(), 0);
        assert_eq!(cyclic_bounded_vec.iter_rev().count(), 0);
        assert!(cyclic_bounded_vec.last().is_none());
    }

    /// Iteration with reset.
    ///
    /// ```
    ///        #  #   #   #        #  #
    ///                   $  ^
    /// index [0, 1,  2,  3, 4, 5, 6, 7]
    /// value [8, 9, 10, 11, 4, 5, 6, 7]
    /// ```
    ///
    /// * `#` - visited elements
    ///
    /// Start iteration from: 6
    #[test]
    fn test_cyclic_bounded_vec_iter_reset() {
        let mut cyclic_bounded_vec = CyclicBoundedVec::with_capacity(8).unwrap();

        for i in 0..12 {
            cyclic_bounded_vec.push(i);
        }

        assert_eq!(cyclic_bounded_vec.len(), 8);
        assert_eq!(cyclic_bounded_vec.first_index, 4);
        assert_eq!(cyclic_bounded_vec.last_index, 3);

        let elements = cyclic_bounded_vec.iter_from(6).collect::<Vec<_>>();
        assert_eq!(elements.as_slice(), &[&6, &7, &8, &9, &10, &11]);
    }

    #[test]
    fn test_cyclic_bounded_vec_slot_is_push_count_modulo_capacity() {
        let mut rng = thread_rng();
        let capacity = rng.gen_range(1..64);
        let pushes = rng.gen_range(0..512);
        let mut cyclic_bounded_vec = CyclicBoundedVec::with_capacity(capacity).unwrap();

        for i in 0..pushes {
            cyclic_bounded_vec.push(i);
            assert_eq!(cyclic_bounded_vec.last_index(), i % capacity);
            assert_eq!(cyclic_bounded_vec[i % capacity], i);
        }
    }

    #[test]
    fn test_cyclic_bounded_vec_from_parts() {
        let mut expected = CyclicBoundedVec::with_capacity(4).unwrap();
        for i in 0..6u64 {
            expected.push(i);
        }

        let restored = CyclicBoundedVec::from_parts(
            expected.as_slice().to_vec(),
            expected.capacity(),
            expected.last_index(),
        )
        .unwrap();
        assert_eq!(restored, expected);
        assert_eq!(
            restored.iter().collect::<Vec<_>>(),
            expected.iter().collect::<Vec<_>>()
        );

        let not_full = CyclicBoundedVec::from_parts(vec![1u64, 2], 4, 1).unwrap();
        assert_eq!(not_full.first_index(), 0);
        assert_eq!(not_full.iter().collect::<Vec<_>>(), vec![&1, &2]);

        assert_eq!(
            CyclicBoundedVec::from_parts(vec![1u64, 2, 3], 2, 0).unwrap_err(),
            BoundedVecError::CapacityExceeded(3, 2)
        );
        assert_eq!(
            CyclicBoundedVec::from_parts(vec![1u64, 2], 4, 2).unwrap_err(),
            BoundedVecError::IndexOutOfRange(2, 2)
        );
    }

    #[test]
    fn test_cyclic_bounded_vec_from_parts_not_full_last_index() {
        // Not wrapped yet, so the newest element has to be in the last slot.
        assert_eq!(
            CyclicBoundedVec::from_parts(vec![1u64, 2, 3], 8, 0).unwrap_err(),
            BoundedVecError::IndexOutOfRange(0, 3)
        );
        assert_eq!(
            CyclicBoundedVec::from_parts(vec![1u64, 2, 3], 8, 1).unwrap_err(),
            BoundedVecError::IndexOutOfRange(1, 3)
        );

        let mut vec = CyclicBoundedVec::from_parts(vec![1u64, 2, 3], 8, 2).unwrap();
        vec.push(4);
        assert_eq!(vec.last_index(), 3);
        assert_eq!(vec.last(), Some(&4));

        // Once full, any slot may hold the newest element.
        let full = CyclicBoundedVec::from_parts(vec![1u64, 2, 3], 3, 0).unwrap();
        assert_eq!(full.first_index(), 1);
    }
}
