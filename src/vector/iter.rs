use core::cmp::Ordering;
use core::iter::FusedIterator;

/// A forward cursor over the live elements of a `Vector`.
///
/// It borrows the vector, so anything that could reallocate or drop the
/// elements can't happen while a cursor is around.
///
/// Two cursors compare by their offsets only.
#[derive(Debug)]
pub struct Iter<'a, T> {
    items:  &'a [T],
    offset: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) const fn new(items: &'a [T], offset: usize) -> Self {
        return Self {
            items:  items,
            offset: offset,
        };
    }

    /// The element under the cursor, `None` once it is at or past the end.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        return self.items.get(self.offset);
    }

    #[inline]
    pub fn advance(&mut self) {
        self.offset += 1;
    }

    #[inline]
    pub const fn offset(&self) -> usize {
        return self.offset;
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        return Self::new(self.items, self.offset);
    }
}

impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        return self.offset == other.offset;
    }
}

impl<T> Eq for Iter<'_, T> {}

impl<T> PartialOrd for Iter<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return Some(self.cmp(other));
    }
}

impl<T> Ord for Iter<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        return self.offset.cmp(&other.offset);
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.get()?;
        self.advance();
        return Some(item);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.items.len().saturating_sub(self.offset);
        return (left, Some(left));
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
