//! # exterr
//!
//! Extensible named errors that can wrap an earlier error and merge both
//! construction traces, so the full causal chain reads newest first when the
//! error is finally reported.
//!
//! ## Design Philosophy
//!
//! - **Named variants for free**: a variant declared with
//!   [`extensible_error!`] reports its own type name with zero setup
//! - **Three construction shapes**: message, cause, or both - the shapes a
//!   custom error is actually built from at a raise site
//! - **Merged traces**: wrapping appends the cause's summary and full trace
//!   after the new error's own, with no depth limit
//! - **Graceful degradation**: construction never fails; a cause without
//!   trace information contributes its summary line only
//!
//! ## Usage
//!
//! ```rust
//! use exterr::{caught, Extensible};
//!
//! exterr::extensible_error! {
//!     /// Raised when the cache cannot be refreshed.
//!     pub struct RefreshError;
//! }
//!
//! fn refresh() -> Result<(), RefreshError> {
//!     let io = std::io::Error::new(std::io::ErrorKind::NotFound, "disk full");
//!     Err(RefreshError::from_message_and_cause("retry failed", caught(io)))
//! }
//!
//! let err = refresh().unwrap_err();
//! assert_eq!(err.to_string(), "RefreshError: retry failed");
//! assert!(err.trace().contains("Error: disk full"));
//! ```
//!
//! ## Principles
//!
//! - Wrap, don't discard: constructing from a cause keeps its summary and
//!   full trace, so every layer of context survives to the final report
//! - Foreign errors enter through [`caught`] and are retained as the
//!   `source` of the new error
//! - Construction is infallible and side-effect free

mod cause;
mod error;
mod extensible;
mod macros;
mod trace;

pub use cause::{caught, Caught, Cause};
pub use error::ExtensibleError;
pub use extensible::Extensible;

// Used by the expansion of `extensible_error!`.
#[doc(hidden)]
pub use anyhow;

/// Result type alias using the base error
pub type Result<T> = std::result::Result<T, ExtensibleError>;
