use std::cmp::Ordering;

/// A binary max-heap ordered by a caller-supplied comparator.
///
/// `pop` returns the greatest item according to `compare`. Items that compare
/// equal come out in unspecified order.
#[derive(Debug)]
pub(crate) struct SeedQueue<T, C> {
    items: Vec<T>,
    compare: C,
}

impl<T, C> SeedQueue<T, C>
where
    C: FnMut(&T, &T) -> Ordering,
{
    pub(crate) fn new(compare: C) -> Self {
        Self {
            items: Vec::new(),
            compare,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn push(&mut self, item: T) {
        self.items.push(item);
        let mut child = self.items.len() - 1;
        while child > 0 {
            let parent = (child - 1) / 2;
            if (self.compare)(&self.items[child], &self.items[parent]) != Ordering::Greater {
                break;
            }
            self.items.swap(child, parent);
            child = parent;
        }
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        let last = self.items.len().checked_sub(1)?;
        self.items.swap(0, last);
        let top = self.items.pop();

        let len = self.items.len();
        let mut parent = 0;
        loop {
            let left = 2 * parent + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < len
                && (self.compare)(&self.items[right], &self.items[left]) == Ordering::Greater
            {
                child = right;
            }
            if (self.compare)(&self.items[child], &self.items[parent]) != Ordering::Greater {
                break;
            }
            self.items.swap(child, parent);
            parent = child;
        }
        top
    }
}

impl<T, C> Extend<T> for SeedQueue<T, C>
where
    C: FnMut(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
