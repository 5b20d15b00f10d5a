//! The explicit "no value" marker.

/// Zero-sized marker meaning "explicitly empty".
///
/// Converting it into any [`Expected`](super::Expected) yields the `Empty`
/// state, independent of the payload types. This keeps an empty construction
/// unambiguous even when `E` and `U` are the same type.
///
/// # Examples
///
/// ```rust
/// use expected::{Expected, NULL_EXPECT};
///
/// let mut value: Expected<i32, String> = Expected::from(NULL_EXPECT);
/// assert!(value.is_null());
///
/// value.set_expected(1);
/// value.assign_null(NULL_EXPECT);
/// assert!(value.is_null());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NullExpect;

/// The [`NullExpect`] value.
pub const NULL_EXPECT: NullExpect = NullExpect;

static_assertions::assert_eq_size!(NullExpect, ());
