//! The expected/unexpected container and its supporting types.
//!
//! - [`Expected`]: the container itself
//! - [`State`] and [`Alternative`]: `Copy` tags describing what is alive
//! - [`InvalidAccess`]: returned when the requested alternative is not alive
//! - [`NullExpect`] / [`NULL_EXPECT`]: the explicit "empty" marker
//!
//! # Examples
//!
//! ```rust
//! use expected::container::{Expected, NULL_EXPECT, State};
//!
//! let mut value: Expected<u32, &str> = Expected::from_unexpected("missing");
//! assert_eq!(value.state(), State::HoldsUnexpected);
//!
//! value.emplace_expected(|| 10);
//! assert_eq!(value.get_expected(), Ok(&10));
//!
//! value = NULL_EXPECT.into();
//! assert!(value.is_null());
//! ```

mod error;
mod expected;
mod marker;
mod state;

pub use error::InvalidAccess;
pub use self::expected::Expected;
pub use marker::{NULL_EXPECT, NullExpect};
pub use state::{Alternative, State};
