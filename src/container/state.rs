//! State tags for the `Expected` container.
//!
//! The container itself is an enum, so its discriminant is never stored
//! separately. These tags are the `Copy` view of that discriminant, used for
//! inspection and for describing access failures.

use std::fmt;

/// The three states an [`Expected`](super::Expected) can be in.
///
/// # Examples
///
/// ```rust
/// use expected::{Expected, State};
///
/// let value: Expected<i32, String> = Expected::from_expected(42);
/// assert_eq!(value.state(), State::HoldsExpected);
///
/// let empty: Expected<i32, String> = Expected::default();
/// assert_eq!(empty.state(), State::Empty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// An expected payload is alive.
    HoldsExpected,
    /// An unexpected payload is alive.
    HoldsUnexpected,
    /// No payload is alive.
    Empty,
}

impl State {
    /// Returns the alternative that is alive in this state, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::{Alternative, State};
    ///
    /// assert_eq!(State::HoldsExpected.alternative(), Some(Alternative::Expected));
    /// assert_eq!(State::Empty.alternative(), None);
    /// ```
    #[inline]
    pub const fn alternative(self) -> Option<Alternative> {
        match self {
            Self::HoldsExpected => Some(Alternative::Expected),
            Self::HoldsUnexpected => Some(Alternative::Unexpected),
            Self::Empty => None,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HoldsExpected => formatter.write_str("holds the expected value"),
            Self::HoldsUnexpected => formatter.write_str("holds the unexpected value"),
            Self::Empty => formatter.write_str("is empty"),
        }
    }
}

/// One side of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alternative {
    /// The expected (success) side.
    Expected,
    /// The unexpected (error) side.
    Unexpected,
}

impl Alternative {
    /// The state in which this alternative is alive.
    #[inline]
    pub const fn state(self) -> State {
        match self {
            Self::Expected => State::HoldsExpected,
            Self::Unexpected => State::HoldsUnexpected,
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expected => formatter.write_str("expected"),
            Self::Unexpected => formatter.write_str("unexpected"),
        }
    }
}
