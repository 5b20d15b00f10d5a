//! Error types for the `Expected` container.
//!
//! Asking for an alternative that is not alive is a recoverable error: the
//! accessors return [`InvalidAccess`] instead of a reference. The fatal
//! counterpart lives in [`crate::diagnose`].

use super::state::{Alternative, State};

/// Represents an attempt to read an alternative that is not alive.
///
/// # Examples
///
/// ```rust
/// use expected::{Alternative, Expected, InvalidAccess, State};
///
/// let value: Expected<i32, String> = Expected::from_unexpected("boom".to_string());
/// let error = value.get_expected().unwrap_err();
/// assert_eq!(
///     error,
///     InvalidAccess {
///         requested: Alternative::Expected,
///         found: State::HoldsUnexpected,
///     }
/// );
/// assert_eq!(
///     error.to_string(),
///     "attempted to access the expected value, but the container holds the unexpected value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidAccess {
    /// The alternative the caller asked for.
    pub requested: Alternative,
    /// The state the container was actually in.
    pub found: State,
}

impl InvalidAccess {
    pub(crate) const fn new(requested: Alternative, found: State) -> Self {
        Self { requested, found }
    }
}

impl std::fmt::Display for InvalidAccess {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "attempted to access the {} value, but the container {}",
            self.requested, self.found
        )
    }
}

impl std::error::Error for InvalidAccess {}
