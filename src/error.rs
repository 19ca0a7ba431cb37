use std::fmt::Display;

/// Errors raised by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// [`Optional::unwrap()`](crate::Optional::unwrap) was called on an empty optional.
    EmptyUnwrap,
    /// A bounded capacity of zero was requested.
    ZeroCapacity,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyUnwrap => write!(f, "called `Optional::unwrap()` on a `None` value"),
            Error::ZeroCapacity => write!(f, "priority queue capacity must be at least 1"),
        }
    }
}

impl std::error::Error for Error {}
