//! Capacity-bounded priority queue.
//!
//! See documentation for [`PriorityQueue`].
use crate::{Capacity, Error, Optional, Placement, QueueConfig, Sortable};
use std::cmp::Ordering;

/// A priority queue that holds at most a fixed number of elements.
///
/// Elements are kept in a single vector, from lowest priority at index 0 to highest priority at
/// the end. [`PriorityQueue::pop()`] always takes from the end. [`PriorityQueue::push()`] finds
/// an insertion point with one linear scan driven by [`Sortable::compare()`], then evicts the
/// element at index 0 if the queue has grown past its [`Capacity`]. That can be the element that
/// was just pushed.
///
/// ## Usage
///
/// ```rust
/// # use bounded_priority::*;
/// let mut queue = PriorityQueue::with_capacity(2)?;
/// queue.push(5);
/// queue.push(1);
/// queue.push(9); // grows to three, then drops whatever sits at index 0
///
/// assert_eq!(queue.len(), 2);
/// assert_eq!(queue.pop(), Optional::Some(5));
/// assert_eq!(queue.pop(), Optional::Some(9));
/// assert_eq!(queue.pop(), Optional::None);
/// # Ok::<(), Error>(())
/// ```
///
/// ## Placement
///
/// With the default [`Placement::AfterFirstLower`], a new element goes right after the *first*
/// element that ranks below it. If several stored elements rank below it, the result is not
/// sorted: in the example above, pushing `9` into `[1, 5]` yields `[1, 9, 5]`, and eviction then
/// drops `1`. Choose [`Placement::AfterLastLower`] via [`PriorityQueue::with_config()`] to keep
/// the queue fully sorted instead. The placement is fixed for the lifetime of the queue.
///
/// Elements that compare equal are not kept in any guaranteed relative order.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    els: Vec<T>,
    capacity: Capacity,
    placement: Placement,
}

impl<T: Sortable> PriorityQueue<T> {
    /// An unbounded queue with the default placement.
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    /// A queue that keeps at most `capacity` elements.
    ///
    /// Fails with [`Error::ZeroCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        let capacity = Capacity::bounded(capacity)?;
        Ok(Self::with_config(QueueConfig::default().with_capacity(capacity)))
    }

    /// A queue with the given capacity and placement.
    ///
    /// Nothing is allocated up front, so a huge bound costs no more than an unbounded queue.
    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            els: Vec::new(),
            capacity: config.capacity,
            placement: config.placement,
        }
    }

    /// Insert `el`, then evict the lowest-priority element if over capacity.
    pub fn push(&mut self, el: T) {
        let index = self.insertion_index(&el);
        log::trace!("inserting at index {} of {}", index, self.els.len());
        self.els.insert(index, el);

        if self.capacity.is_exceeded_by(self.els.len()) {
            self.els.remove(0);
            log::debug!(
                "capacity {:?} exceeded, evicted lowest-priority element",
                self.capacity.limit()
            );
        }
    }

    /// Find where `el` goes: one past the qualifying lower-ranked element, or 0 if there is none.
    fn insertion_index(&self, el: &T) -> usize {
        let is_lower = |e: &T| e.compare(el) == Ordering::Less;
        let found = match self.placement {
            Placement::AfterFirstLower => self.els.iter().position(is_lower),
            Placement::AfterLastLower => self.els.iter().rposition(is_lower),
        };
        found.map_or(0, |i| i + 1)
    }

    /// Remove and return the highest-priority element.
    pub fn pop(&mut self) -> Optional<T> {
        self.els.pop().into()
    }
}

impl<T> PriorityQueue<T> {
    /// Drop every element.
    pub fn clear(&mut self) {
        log::debug!("clearing {} elements", self.els.len());
        self.els.clear();
    }

    /// Number of elements currently queued.
    #[inline]
    pub fn len(&self) -> usize {
        self.els.len()
    }

    /// Whether the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.els.is_empty()
    }

    /// The bound fixed at construction.
    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// The placement rule fixed at construction.
    #[inline]
    pub fn placement(&self) -> Placement {
        self.placement
    }
}

impl<T: Sortable> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sortable> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for el in iter {
            self.push(el);
        }
    }
}

impl<T: Sortable> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
