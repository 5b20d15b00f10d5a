//! The `Expected<E, U>` container.
//!
//! An `Expected<E, U>` holds an expected value of type `E`, an unexpected value
//! of type `U`, or nothing at all. Unlike `Result`, the empty state is a first
//! class citizen: it is what `Default` produces and what
//! [`NULL_EXPECT`](super::NULL_EXPECT) converts into.
//!
//! Every transition that changes the live alternative drops the old payload
//! before the new one is put in place. Accessors never read a payload that is
//! not alive: the checked ones return [`InvalidAccess`], and
//! [`value_or_terminate`](Expected::value_or_terminate) aborts the process.
//!
//! # Examples
//!
//! ```rust
//! use expected::{Expected, State};
//!
//! let mut response: Expected<u16, String> = Expected::default();
//! assert_eq!(response.state(), State::Empty);
//!
//! response.set_expected(200);
//! assert_eq!(response.get_expected(), Ok(&200));
//!
//! response.set_unexpected("timed out".to_string());
//! assert!(response.get_expected().is_err());
//! assert_eq!(response.value_or(&0), &0);
//! ```

use std::ops::{Deref, DerefMut};

use super::error::InvalidAccess;
use super::marker::NullExpect;
use super::state::{Alternative, State};
use crate::diagnose::{self, Diagnose};

/// A container holding an expected value, an unexpected value, or nothing.
///
/// # Type Parameters
///
/// * `E` - The type of the expected (success) value
/// * `U` - The type of the unexpected (error) value
///
/// The two types are independent; they may even be the same type, which is
/// why construction goes through [`from_expected`](Self::from_expected) and
/// [`from_unexpected`](Self::from_unexpected) instead of `From` impls.
///
/// # Examples
///
/// ```rust
/// use expected::Expected;
///
/// let parsed: Expected<i32, String> = match "42".parse::<i32>() {
///     Ok(number) => Expected::from_expected(number),
///     Err(error) => Expected::from_unexpected(error.to_string()),
/// };
/// assert!(parsed.is_expected());
/// assert_eq!(*parsed, 42);
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Expected<E, U> {
    /// An expected value is alive.
    Expected(E),
    /// An unexpected value is alive.
    Unexpected(U),
    /// Neither value is alive.
    Empty,
}

impl<E, U> Expected<E, U> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty container. Same as `Expected::default()`.
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Creates a container holding the expected value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::{Expected, State};
    ///
    /// let value: Expected<i32, String> = Expected::from_expected(7);
    /// assert_eq!(value.state(), State::HoldsExpected);
    /// ```
    #[inline]
    pub const fn from_expected(value: E) -> Self {
        Self::Expected(value)
    }

    /// Creates a container holding the unexpected value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::{Expected, State};
    ///
    /// let value: Expected<i32, String> = Expected::from_unexpected("bad".to_string());
    /// assert_eq!(value.state(), State::HoldsUnexpected);
    /// ```
    #[inline]
    pub const fn from_unexpected(value: U) -> Self {
        Self::Unexpected(value)
    }

    // =========================================================================
    // State Inspection
    // =========================================================================

    /// Returns the current state tag.
    #[inline]
    pub const fn state(&self) -> State {
        match self {
            Self::Expected(_) => State::HoldsExpected,
            Self::Unexpected(_) => State::HoldsUnexpected,
            Self::Empty => State::Empty,
        }
    }

    /// Returns `true` if the expected value is alive.
    ///
    /// This is the boolean view of the container. An empty container and one
    /// holding the unexpected value both answer `false`; use
    /// [`state`](Self::state) or [`is_unexpected`](Self::is_unexpected) to tell
    /// them apart.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let empty: Expected<i32, String> = Expected::empty();
    /// let failed: Expected<i32, String> = Expected::from_unexpected("no".to_string());
    /// assert!(!empty.is_expected());
    /// assert!(!failed.is_expected());
    /// assert!(Expected::<i32, String>::from_expected(1).is_expected());
    /// ```
    #[inline]
    pub const fn is_expected(&self) -> bool {
        matches!(self, Self::Expected(_))
    }

    /// Returns `true` if the unexpected value is alive.
    #[inline]
    pub const fn is_unexpected(&self) -> bool {
        matches!(self, Self::Unexpected(_))
    }

    /// Returns `true` if no value is alive.
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Empty)
    }

    // =========================================================================
    // Assignment
    // =========================================================================

    /// Stores an expected value.
    ///
    /// If the expected value is already alive, the new value is assigned into
    /// the existing slot and no unexpected value is ever touched. Otherwise the
    /// unexpected value (if any) is dropped first and then `value` is moved in.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let mut value: Expected<i32, String> = Expected::from_unexpected("bad".to_string());
    /// value.set_expected(3);
    /// assert_eq!(value.get_expected(), Ok(&3));
    /// ```
    pub fn set_expected(&mut self, value: E) {
        if let Self::Expected(slot) = self {
            *slot = value;
        } else {
            self.reset();
            *self = Self::Expected(value);
        }
    }

    /// Stores an unexpected value.
    ///
    /// Mirror image of [`set_expected`](Self::set_expected).
    pub fn set_unexpected(&mut self, value: U) {
        if let Self::Unexpected(slot) = self {
            *slot = value;
        } else {
            self.reset();
            *self = Self::Unexpected(value);
        }
    }

    /// Drops the live value, if any, leaving the container empty.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::Empty;
    }

    /// Assigns the explicit empty marker. Same as [`reset`](Self::reset).
    #[inline]
    pub fn assign_null(&mut self, _marker: NullExpect) {
        self.reset();
    }

    /// Move-assigns another container into this one.
    ///
    /// Follows the same rules as [`set_expected`](Self::set_expected) and
    /// [`set_unexpected`](Self::set_unexpected): when both containers hold the
    /// same alternative the payload is assigned in place. An empty `source`
    /// empties `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let mut target: Expected<i32, String> = Expected::from_expected(1);
    /// target.assign(Expected::from_unexpected("late".to_string()));
    /// assert_eq!(target.get_unexpected().map(String::as_str), Ok("late"));
    ///
    /// target.assign(Expected::empty());
    /// assert!(target.is_null());
    /// ```
    pub fn assign(&mut self, source: Self) {
        match source {
            Self::Expected(value) => self.set_expected(value),
            Self::Unexpected(value) => self.set_unexpected(value),
            Self::Empty => self.reset(),
        }
    }

    /// Moves the contents out, leaving the container empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let mut source: Expected<i32, String> = Expected::from_expected(9);
    /// let moved = source.take();
    /// assert_eq!(moved, Expected::from_expected(9));
    /// assert!(source.is_null());
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    // =========================================================================
    // Emplace
    // =========================================================================

    /// Drops whatever is alive, then constructs a new expected value in place
    /// and returns a reference to it.
    ///
    /// Unlike [`set_expected`](Self::set_expected), the old value is dropped
    /// even when it is already an expected value, and `make` runs only after
    /// that drop. If `make` panics the container is left empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let mut value: Expected<Vec<u8>, String> = Expected::from_expected(vec![1, 2]);
    /// let bytes = value.emplace_expected(|| Vec::with_capacity(16));
    /// bytes.push(7);
    /// assert_eq!(value.get_expected(), Ok(&vec![7]));
    /// ```
    pub fn emplace_expected<F>(&mut self, make: F) -> &mut E
    where
        F: FnOnce() -> E,
    {
        self.reset();
        *self = Self::Expected(make());
        match self {
            Self::Expected(value) => value,
            Self::Unexpected(_) | Self::Empty => unreachable!("expected value was just stored"),
        }
    }

    /// Drops whatever is alive, then constructs a new unexpected value in place.
    ///
    /// Mirror image of [`emplace_expected`](Self::emplace_expected).
    pub fn emplace_unexpected<F>(&mut self, make: F) -> &mut U
    where
        F: FnOnce() -> U,
    {
        self.reset();
        *self = Self::Unexpected(make());
        match self {
            Self::Unexpected(value) => value,
            Self::Expected(_) | Self::Empty => unreachable!("unexpected value was just stored"),
        }
    }

    // =========================================================================
    // Checked Access
    // =========================================================================

    /// Returns a reference to the expected value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAccess`] if the container holds the unexpected value
    /// or is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::{Expected, State};
    ///
    /// let value: Expected<i32, String> = Expected::from_expected(5);
    /// assert_eq!(value.get_expected(), Ok(&5));
    ///
    /// let empty: Expected<i32, String> = Expected::empty();
    /// assert_eq!(empty.get_expected().unwrap_err().found, State::Empty);
    /// ```
    #[inline]
    pub const fn get_expected(&self) -> Result<&E, InvalidAccess> {
        match self {
            Self::Expected(value) => Ok(value),
            other => Err(InvalidAccess::new(Alternative::Expected, other.state())),
        }
    }

    /// Returns a mutable reference to the expected value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAccess`] if the container holds the unexpected value
    /// or is empty.
    #[inline]
    pub fn get_expected_mut(&mut self) -> Result<&mut E, InvalidAccess> {
        match self {
            Self::Expected(value) => Ok(value),
            other => Err(InvalidAccess::new(Alternative::Expected, other.state())),
        }
    }

    /// Returns a reference to the unexpected value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAccess`] if the container holds the expected value or
    /// is empty.
    #[inline]
    pub const fn get_unexpected(&self) -> Result<&U, InvalidAccess> {
        match self {
            Self::Unexpected(value) => Ok(value),
            other => Err(InvalidAccess::new(Alternative::Unexpected, other.state())),
        }
    }

    /// Returns a mutable reference to the unexpected value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAccess`] if the container holds the expected value or
    /// is empty.
    #[inline]
    pub fn get_unexpected_mut(&mut self) -> Result<&mut U, InvalidAccess> {
        match self {
            Self::Unexpected(value) => Ok(value),
            other => Err(InvalidAccess::new(Alternative::Unexpected, other.state())),
        }
    }

    // =========================================================================
    // Fallback Access
    // =========================================================================

    /// Returns the expected value, or `fallback` if it is not alive.
    ///
    /// Never fails and never changes the state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let failed: Expected<i32, String> = Expected::from_unexpected("no".to_string());
    /// let fallback = -1;
    /// assert!(std::ptr::eq(failed.value_or(&fallback), &fallback));
    /// ```
    #[inline]
    pub const fn value_or<'a>(&'a self, fallback: &'a E) -> &'a E {
        match self {
            Self::Expected(value) => value,
            Self::Unexpected(_) | Self::Empty => fallback,
        }
    }

    /// Consuming form of [`value_or`](Self::value_or).
    #[inline]
    pub fn into_value_or(self, fallback: E) -> E {
        match self {
            Self::Expected(value) => value,
            Self::Unexpected(_) | Self::Empty => fallback,
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into a `Result`, or `None` if the container is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let value: Expected<i32, String> = Expected::from_expected(1);
    /// assert_eq!(value.into_result(), Some(Ok(1)));
    /// assert_eq!(Expected::<i32, String>::empty().into_result(), None);
    /// ```
    #[inline]
    pub fn into_result(self) -> Option<Result<E, U>> {
        match self {
            Self::Expected(value) => Some(Ok(value)),
            Self::Unexpected(value) => Some(Err(value)),
            Self::Empty => None,
        }
    }

    /// Borrows the live value without moving it.
    #[inline]
    pub const fn as_ref(&self) -> Expected<&E, &U> {
        match self {
            Self::Expected(value) => Expected::Expected(value),
            Self::Unexpected(value) => Expected::Unexpected(value),
            Self::Empty => Expected::Empty,
        }
    }

    /// Mutably borrows the live value without moving it.
    #[inline]
    pub fn as_mut(&mut self) -> Expected<&mut E, &mut U> {
        match self {
            Self::Expected(value) => Expected::Expected(value),
            Self::Unexpected(value) => Expected::Unexpected(value),
            Self::Empty => Expected::Empty,
        }
    }
}

// =============================================================================
// Terminate-on-misuse Access
// =============================================================================

impl<E, U: Diagnose> Expected<E, U> {
    /// Returns the expected value or aborts the process.
    ///
    /// Meant for call sites that cannot continue without the expected value.
    /// When it is not alive, this writes `Process terminated. Error message:`
    /// followed by the quoted [`Diagnose`] rendering of the unexpected value
    /// (or a notice that it has none, or that the container is empty) to
    /// standard error and calls [`std::process::abort`]. It does not unwind,
    /// so it cannot be caught.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let value: Expected<i32, String> = Expected::from_expected(8);
    /// assert_eq!(*value.value_or_terminate(), 8);
    /// ```
    #[inline]
    pub fn value_or_terminate(&self) -> &E {
        match self {
            Self::Expected(value) => value,
            Self::Unexpected(error) => diagnose::terminate(Some(error)),
            Self::Empty => diagnose::terminate::<U>(None),
        }
    }

    /// Mutable form of [`value_or_terminate`](Self::value_or_terminate).
    #[inline]
    pub fn value_or_terminate_mut(&mut self) -> &mut E {
        match self {
            Self::Expected(value) => value,
            Self::Unexpected(error) => diagnose::terminate(Some(&*error)),
            Self::Empty => diagnose::terminate::<U>(None),
        }
    }

    /// Consuming form of [`value_or_terminate`](Self::value_or_terminate).
    #[inline]
    pub fn into_value_or_terminate(self) -> E {
        match self {
            Self::Expected(value) => value,
            Self::Unexpected(error) => diagnose::terminate(Some(&error)),
            Self::Empty => diagnose::terminate::<U>(None),
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<E, U> Default for Expected<E, U> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<E: Clone, U: Clone> Clone for Expected<E, U> {
    fn clone(&self) -> Self {
        match self {
            Self::Expected(value) => Self::Expected(value.clone()),
            Self::Unexpected(value) => Self::Unexpected(value.clone()),
            Self::Empty => Self::Empty,
        }
    }

    /// Copy assignment.
    ///
    /// When both sides hold the same alternative the payload is updated with
    /// its own `clone_from`, so it can reuse storage. Otherwise the old payload
    /// is dropped before the source payload is cloned.
    fn clone_from(&mut self, source: &Self) {
        match source {
            Self::Expected(value) => {
                if let Self::Expected(slot) = self {
                    slot.clone_from(value);
                } else {
                    self.reset();
                    *self = Self::Expected(value.clone());
                }
            }
            Self::Unexpected(value) => {
                if let Self::Unexpected(slot) = self {
                    slot.clone_from(value);
                } else {
                    self.reset();
                    *self = Self::Unexpected(value.clone());
                }
            }
            Self::Empty => self.reset(),
        }
    }
}

impl<E, U> From<NullExpect> for Expected<E, U> {
    #[inline]
    fn from(_marker: NullExpect) -> Self {
        Self::Empty
    }
}

impl<E, U> From<Result<E, U>> for Expected<E, U> {
    /// `Ok` becomes the expected value and `Err` the unexpected one.
    #[inline]
    fn from(result: Result<E, U>) -> Self {
        match result {
            Ok(value) => Self::Expected(value),
            Err(error) => Self::Unexpected(error),
        }
    }
}

impl<E, U> From<&Expected<E, U>> for bool {
    /// Same as [`Expected::is_expected`].
    #[inline]
    fn from(container: &Expected<E, U>) -> Self {
        container.is_expected()
    }
}

/// Dereferences to the expected value.
///
/// # Panics
///
/// Panics with the [`InvalidAccess`] message if the expected value is not
/// alive. Use [`Expected::get_expected`] to handle that case.
impl<E, U> Deref for Expected<E, U> {
    type Target = E;

    fn deref(&self) -> &E {
        match self.get_expected() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

/// Mutably dereferences to the expected value.
///
/// # Panics
///
/// Panics with the [`InvalidAccess`] message if the expected value is not
/// alive.
impl<E, U> DerefMut for Expected<E, U> {
    fn deref_mut(&mut self) -> &mut E {
        match self.get_expected_mut() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

static_assertions::assert_impl_all!(Expected<String, String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(Expected<std::rc::Rc<i32>, String>: Send, Sync);
