//! # expected
//!
//! A container that holds an *expected* value, an *unexpected* value, or
//! nothing.
//!
//! ## Overview
//!
//! [`Expected<E, U>`](Expected) is a three-state sum type. It differs from
//! `Result<E, U>` in two ways:
//!
//! - **An explicit empty state**: `Expected::default()` and
//!   [`NULL_EXPECT`] produce a container holding neither value.
//! - **Two failure tiers**: the checked accessors return [`InvalidAccess`]
//!   when the requested alternative is not alive, while
//!   [`Expected::value_or_terminate`] reports the unexpected value and aborts
//!   the process.
//!
//! Assignment keeps the payload in place when the alternative does not change
//! ([`Expected::set_expected`], `Clone::clone_from`), and emplacement always
//! drops the old payload before constructing the new one
//! ([`Expected::emplace_expected`]).
//!
//! ## Feature Flags
//!
//! - `tracing`: also emit a `tracing` error event before the terminate path
//!   aborts
//!
//! ## Example
//!
//! ```rust
//! use expected::prelude::*;
//!
//! fn parse_port(text: &str) -> Expected<u16, String> {
//!     text.parse::<u16>()
//!         .map_err(|error| format!("invalid port {text:?}: {error}"))
//!         .into()
//! }
//!
//! let port = parse_port("8080");
//! assert_eq!(*port.value_or_terminate(), 8080);
//!
//! let bad = parse_port("http");
//! assert!(!bad.is_expected());
//! assert_eq!(bad.value_or(&80), &80);
//! assert_eq!(
//!     bad.get_expected().unwrap_err().to_string(),
//!     "attempted to access the expected value, but the container holds the unexpected value"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use expected::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::*;
    pub use crate::diagnose::Diagnose;
}

pub mod container;
pub mod diagnose;

pub use container::{Alternative, Expected, InvalidAccess, NULL_EXPECT, NullExpect, State};
pub use diagnose::Diagnose;
