//! The "error-like" shape accepted by the wrapping constructors

use std::any::type_name;
use std::error::Error as StdError;
use std::fmt;

use crate::trace;

/// The minimal shape a wrapped error must expose: a one-line summary and,
/// when available, the trace captured at its own construction point.
///
/// `ExtensibleError` and every variant declared with `extensible_error!`
/// implement this with a real trace; foreign errors are adapted with
/// [`caught`] and contribute their summary line only.
///
/// The `std::error::Error + Send + Sync + 'static` bound lets the wrapped
/// value be retained as the new error's source.
pub trait Cause: StdError + Send + Sync + 'static {
    /// Name-colon-message line, as the default reporter prints it.
    fn summary(&self) -> String {
        format!("{}: {}", trace::simple_name(type_name::<Self>()), self)
    }

    /// The captured trace, if this error carries one.
    fn trace(&self) -> Option<&str> {
        None
    }
}

/// Adapter giving any standard error the error-like shape.
///
/// The summary uses the adapted error's own type name, so a caught
/// `std::io::Error` with message `"disk full"` renders as
/// `"Error: disk full"`. No trace is available for errors caught at a
/// boundary; wrapping one degrades to summary-only merging.
pub struct Caught<E>(E);

/// Wrap a foreign error so it can be passed to the wrapping constructors.
pub fn caught<E>(err: E) -> Caught<E>
where
    E: StdError + Send + Sync + 'static,
{
    Caught(err)
}

impl<E: fmt::Display> fmt::Display for Caught<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<E: fmt::Debug> fmt::Debug for Caught<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<E> StdError for Caught<E>
where
    E: StdError + Send + Sync + 'static,
{
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl<E> Cause for Caught<E>
where
    E: StdError + Send + Sync + 'static,
{
    fn summary(&self) -> String {
        format!("{}: {}", trace::simple_name(type_name::<E>()), self.0)
    }
}

/// Pieces pulled out of a cause before it is moved into the source slot.
pub(crate) struct Extracted {
    pub(crate) summary: String,
    pub(crate) trace: Option<String>,
    pub(crate) source: anyhow::Error,
}

pub(crate) fn extract(cause: impl Cause) -> Extracted {
    let summary = cause.summary();
    let trace = cause.trace().map(str::to_owned);
    Extracted {
        summary,
        trace,
        source: anyhow::Error::new(cause),
    }
}
