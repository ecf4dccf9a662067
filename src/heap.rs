//! Array-backed binary min-heap keyed on node weight.
//!
//! Ties are broken deterministically: sift-down descends into the left child
//! unless the right one is strictly lighter, and a node only moves when it is
//! strictly heavier than the child it would trade places with. Sift-up
//! likewise only lifts a node above a strictly heavier parent.

/// Anything that can be ordered by a weight in the heap.
pub trait Weighted {
    fn weight(&self) -> u64;
}

#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    items: Vec<T>,
}

impl<T: Weighted> MinHeap<T> {
    /// Arranges `items` into heap order bottom-up in O(n).
    pub fn build(items: Vec<T>) -> Self {
        let mut heap = MinHeap { items };
        let end = heap.items.len();
        for start in (0..end / 2).rev() {
            heap.sift_down(start, end);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn peek_min(&self) -> Option<&T> {
        self.items.first()
    }

    /// Restores heap order for the subtree rooted at `start`, looking only at
    /// indices below `end`.
    pub fn sift_down(&mut self, start: usize, end: usize) {
        let end = end.min(self.items.len());
        let mut root = start;
        loop {
            let mut child = 2 * root + 1;
            if child >= end {
                return;
            }
            if child + 1 < end && self.items[child + 1].weight() < self.items[child].weight() {
                child += 1;
            }
            if self.items[root].weight() <= self.items[child].weight() {
                return;
            }
            self.items.swap(root, child);
            root = child;
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index].weight() >= self.items[parent].weight() {
                return;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        let last = self.items.len() - 1;
        self.sift_up(last);
    }

    /// Removes and returns the lightest item.
    pub fn pop_min(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop();
        let end = self.items.len();
        self.sift_down(0, end);
        min
    }

    /// Checks that no item is lighter than its parent.
    pub fn is_heap(&self) -> bool {
        (1..self.items.len()).all(|i| self.items[i].weight() >= self.items[(i - 1) / 2].weight())
    }
}

impl Weighted for u64 {
    fn weight(&self) -> u64 {
        *self
    }
}
