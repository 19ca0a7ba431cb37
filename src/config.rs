//! Construction-time settings for a [`PriorityQueue`](crate::PriorityQueue).
use crate::Error;
use std::num::NonZeroUsize;

/// Upper bound on the number of elements a queue holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Capacity {
    /// No bound is enforced; the queue grows as long as memory allows.
    #[default]
    Unbounded,
    /// At most this many elements are kept.
    Bounded(NonZeroUsize),
}

impl Capacity {
    /// A bound of `n` elements. Zero is rejected rather than clamped.
    pub fn bounded(n: usize) -> Result<Self, Error> {
        NonZeroUsize::new(n)
            .map(Capacity::Bounded)
            .ok_or(Error::ZeroCapacity)
    }

    /// The bound as a number, if there is one.
    #[inline]
    pub fn limit(&self) -> Option<usize> {
        match self {
            Capacity::Unbounded => None,
            Capacity::Bounded(n) => Some(n.get()),
        }
    }

    /// Whether `len` elements go over this bound.
    #[inline]
    pub(crate) fn is_exceeded_by(&self, len: usize) -> bool {
        self.limit().is_some_and(|limit| len > limit)
    }
}

/// Which qualifying position a pushed element is placed after.
///
/// During a push, the queue scans from its lowest-priority end for elements that rank below the
/// new one. If there are none, the new element becomes the lowest-priority entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Placement {
    /// Insert right after the first lower-ranked element found.
    ///
    /// The scan stops early, so the queue is only guaranteed to be sorted when elements arrive
    /// in non-increasing order; e.g. pushing `1, 2, 3` stores `[1, 3, 2]`.
    #[default]
    AfterFirstLower,
    /// Insert right after the last lower-ranked element, keeping the queue fully sorted.
    AfterLastLower,
}

/// Everything a [`PriorityQueue`](crate::PriorityQueue) is configured with.
///
/// ```rust
/// # use bounded_priority::{Capacity, Placement, PriorityQueue, QueueConfig};
/// let config = QueueConfig::default()
///     .with_capacity(Capacity::bounded(16)?)
///     .with_placement(Placement::AfterLastLower);
/// let queue: PriorityQueue<u32> = PriorityQueue::with_config(config);
/// assert_eq!(queue.capacity().limit(), Some(16));
/// # Ok::<(), bounded_priority::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QueueConfig {
    pub capacity: Capacity,
    pub placement: Placement,
}

impl QueueConfig {
    pub fn with_capacity(self, capacity: Capacity) -> Self {
        Self { capacity, ..self }
    }

    pub fn with_placement(self, placement: Placement) -> Self {
        Self { placement, ..self }
    }
}
