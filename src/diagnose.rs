//! Textual rendering of unexpected values and the terminate path.
//!
//! [`Expected::value_or_terminate`](crate::Expected::value_or_terminate) is
//! the crate's deliberate escape hatch: when the expected value is missing it
//! reports the unexpected payload on standard error and aborts the process.
//! Whether a payload *can* be reported is a capability of its type, expressed
//! by the [`Diagnose`] trait.
//!
//! # Opting in
//!
//! Types with a `Display` implementation opt in with
//! [`impl_diagnose_display!`](crate::impl_diagnose_display). Types without a
//! textual form use an empty impl and fall back to a fixed notice.
//!
//! ```rust
//! use expected::{Diagnose, impl_diagnose_display};
//! use std::fmt;
//!
//! #[derive(Debug)]
//! struct ParseFailure {
//!     line: usize,
//! }
//!
//! impl fmt::Display for ParseFailure {
//!     fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(formatter, "parse failure on line {}", self.line)
//!     }
//! }
//!
//! impl_diagnose_display!(ParseFailure);
//!
//! struct Opaque;
//!
//! impl Diagnose for Opaque {}
//!
//! assert_eq!(
//!     ParseFailure { line: 3 }.diagnose(),
//!     Some("parse failure on line 3".to_string())
//! );
//! assert_eq!(Opaque.diagnose(), None);
//! ```

use std::borrow::Cow;
use std::io::Write;

/// The first line written before every terminate diagnostic.
pub const TERMINATE_HEADER: &str = "Process terminated. Error message:";

/// Written instead of a rendering when the unexpected type has none.
pub const NO_RENDERING_NOTICE: &str = "Unexpected value has no textual representation.";

/// Written when the container is empty and there is nothing to render.
pub const EMPTY_NOTICE: &str = "Container is empty; there is no unexpected value to report.";

/// Capability of rendering a value for the terminate diagnostic.
///
/// The provided method returns `None`, meaning "no textual representation".
/// Implementations that have a rendering override it.
///
/// # Examples
///
/// ```rust
/// use expected::Diagnose;
///
/// assert_eq!("disk full".diagnose(), Some("disk full".to_string()));
/// assert_eq!(404_u16.diagnose(), Some("404".to_string()));
/// assert_eq!(().diagnose(), None);
/// ```
pub trait Diagnose {
    /// Renders the value, or returns `None` when the type has no rendering.
    fn diagnose(&self) -> Option<String> {
        None
    }
}

/// Implements [`Diagnose`] through `Display` for the listed types.
///
/// # Examples
///
/// ```rust
/// use expected::{Diagnose, impl_diagnose_display};
///
/// struct Code(u32);
///
/// impl std::fmt::Display for Code {
///     fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(formatter, "E{:04}", self.0)
///     }
/// }
///
/// impl_diagnose_display!(Code);
///
/// assert_eq!(Code(7).diagnose(), Some("E0007".to_string()));
/// ```
#[macro_export]
macro_rules! impl_diagnose_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Diagnose for $ty {
                fn diagnose(&self) -> ::std::option::Option<::std::string::String> {
                    ::std::option::Option::Some(::std::string::ToString::to_string(self))
                }
            }
        )*
    };
}

impl_diagnose_display!(
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    bool,
    char,
    str,
    String,
    std::io::Error,
    std::fmt::Error,
    std::num::ParseIntError,
    std::num::ParseFloatError,
    std::str::ParseBoolError,
    std::str::Utf8Error,
    std::string::FromUtf8Error,
    dyn std::error::Error,
    dyn std::error::Error + Send,
    dyn std::error::Error + Send + Sync,
    crate::container::InvalidAccess,
);

impl Diagnose for () {}

impl Diagnose for std::convert::Infallible {}

impl Diagnose for Cow<'_, str> {
    fn diagnose(&self) -> Option<String> {
        Some(self.as_ref().to_owned())
    }
}

impl<T: Diagnose + ?Sized> Diagnose for &T {
    fn diagnose(&self) -> Option<String> {
        (**self).diagnose()
    }
}

impl<T: Diagnose + ?Sized> Diagnose for Box<T> {
    fn diagnose(&self) -> Option<String> {
        (**self).diagnose()
    }
}

impl<T: Diagnose + ?Sized> Diagnose for std::rc::Rc<T> {
    fn diagnose(&self) -> Option<String> {
        (**self).diagnose()
    }
}

impl<T: Diagnose + ?Sized> Diagnose for std::sync::Arc<T> {
    fn diagnose(&self) -> Option<String> {
        (**self).diagnose()
    }
}

// =============================================================================
// Terminate Path
// =============================================================================

/// Builds the line reported after [`TERMINATE_HEADER`].
///
/// `None` means the container was empty.
pub(crate) fn diagnostic_line<U: Diagnose + ?Sized>(unexpected: Option<&U>) -> String {
    match unexpected.map(Diagnose::diagnose) {
        Some(Some(rendering)) => format!("\"{rendering}\""),
        Some(None) => NO_RENDERING_NOTICE.to_owned(),
        None => EMPTY_NOTICE.to_owned(),
    }
}

/// Writes the terminate diagnostic for `line` into `sink`.
///
/// With the `tracing` feature the same line is also emitted as an error event
/// on the `expected::terminate` target.
pub(crate) fn report<W: Write>(line: &str, sink: &mut W) {
    #[cfg(feature = "tracing")]
    tracing::error!(
        target: "expected::terminate",
        diagnostic = %line,
        "value_or_terminate called without an expected value"
    );

    // Nothing useful can be done with a failed write; the abort happens regardless.
    let _ = writeln!(sink, "{TERMINATE_HEADER}");
    let _ = writeln!(sink, "{line}");
    let _ = sink.flush();
}

/// Reports the missing expected value on standard error and aborts.
///
/// Writes go straight to the stderr handle, not through `eprintln!`, so a test
/// harness capturing output cannot swallow them before the abort.
#[cold]
#[inline(never)]
pub(crate) fn terminate<U: Diagnose + ?Sized>(unexpected: Option<&U>) -> ! {
    let line = diagnostic_line(unexpected);
    report(&line, &mut std::io::stderr().lock());
    std::process::abort()
}
