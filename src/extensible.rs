//! Construction shapes shared by every variant

use std::any::type_name;

use crate::cause::{self, Cause};
use crate::error::ExtensibleError;
use crate::trace;

/// Gives a variant type the three construction shapes, derives its reported
/// name from its concrete type, and exposes trace capture as an overridable
/// hook.
///
/// A variant only needs `From<ExtensibleError>`; everything else has a
/// default. The `extensible_error!` macro declares conforming variants in
/// one line, and any such variant reports its own type name without setting
/// it anywhere.
pub trait Extensible: From<ExtensibleError> {
    /// The reported variant name. Defaults to the type's own name; override
    /// to report something other than the type identity.
    fn error_name() -> &'static str
    where
        Self: Sized,
    {
        trace::simple_name(type_name::<Self>())
    }

    /// Capture the trace for this construction point.
    ///
    /// Defaults to the runtime's native backtrace facility. Override to
    /// inject a fixed trace in tests or on hosts without backtraces.
    fn capture_trace() -> String
    where
        Self: Sized,
    {
        trace::capture()
    }

    /// Plain variant with a message; the trace is this call site's own.
    fn from_message(message: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        ExtensibleError::assemble(
            Self::error_name(),
            Some(message.into()),
            None,
            Self::capture_trace(),
        )
        .into()
    }

    /// Wrap-only: the message becomes the cause's rendered summary, and the
    /// cause's summary and trace are appended after this call site's own.
    fn from_cause(cause: impl Cause) -> Self
    where
        Self: Sized,
    {
        let own_trace = Self::capture_trace();
        ExtensibleError::assemble(
            Self::error_name(),
            None,
            Some(cause::extract(cause)),
            own_trace,
        )
        .into()
    }

    /// Wrap with a new top-level message; the cause's summary and trace go
    /// into the merged trace rather than the message.
    fn from_message_and_cause(message: impl Into<String>, cause: impl Cause) -> Self
    where
        Self: Sized,
    {
        let own_trace = Self::capture_trace();
        ExtensibleError::assemble(
            Self::error_name(),
            Some(message.into()),
            Some(cause::extract(cause)),
            own_trace,
        )
        .into()
    }
}
