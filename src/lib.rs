//! A capacity-bounded priority queue, and the explicit optional type it pops into.
//!
//! Elements implement [`Sortable`], a three-way priority comparison, either by hand or with
//! `#[derive(Sortable)]`. A [`PriorityQueue`] keeps them ordered from lowest to highest
//! priority, silently evicting its lowest-priority entry when it grows past its [`Capacity`].
//! [`PriorityQueue::pop()`] hands back the highest-priority element as an [`Optional`].
//!
//! ```rust
//! use bounded_priority::{Optional, PriorityQueue, Sortable};
//!
//! #[derive(Debug, PartialEq, Sortable)]
//! struct Task {
//!     name: &'static str,
//!     #[sortable]
//!     urgency: u8,
//! }
//!
//! let mut queue = PriorityQueue::with_capacity(8)?;
//! queue.push(Task { name: "lint", urgency: 1 });
//! queue.push(Task { name: "deploy", urgency: 9 });
//!
//! let next = queue.pop().map_or(|t| t.name, "idle");
//! assert_eq!(next, "deploy");
//! # Ok::<(), bounded_priority::Error>(())
//! ```
//!
//! Logging goes through the [`log`] facade; evictions are reported at `debug` level.

// Lets `#[derive(Sortable)]` name this crate by its external path from inside it.
extern crate self as bounded_priority;

mod config;
mod error;
mod optional;
mod queue;
mod sortable;

pub use bounded_priority_macros::Sortable;
pub use config::{Capacity, Placement, QueueConfig};
pub use error::Error;
pub use optional::Optional;
pub use queue::PriorityQueue;
pub use sortable::Sortable;
