//! The base extensible error type

use std::fmt;

use crate::cause::{Cause, Extracted};
use crate::extensible::Extensible;

/// A named error that optionally wraps an earlier error and merges both
/// construction traces, so the causal chain reads newest first.
///
/// This type provides:
/// - `name`: the concrete variant's identity, fixed at construction
/// - `message`: the supplied message, or the wrapped error's summary when
///   no message was given
/// - `trace`: the construction-site trace, with the wrapped error's summary
///   and full trace appended when one was supplied
/// - `source`: the wrapped error, reachable through `std::error::Error`
///
/// `ExtensibleError` is usable directly, but it is meant to back named
/// variants declared with `extensible_error!`; each variant gets the three
/// construction shapes from [`Extensible`] with no code of its own.
///
/// # Example
///
/// ```rust
/// use exterr::{Extensible, ExtensibleError};
///
/// let err = ExtensibleError::from_message("boom");
/// assert_eq!(err.name(), "ExtensibleError");
/// assert_eq!(err.message(), "boom");
/// assert_eq!(err.to_string(), "ExtensibleError: boom");
/// ```
pub struct ExtensibleError {
    name: &'static str,
    message: String,
    trace: String,
    source: Option<anyhow::Error>,
}

impl ExtensibleError {
    /// Assemble the final instance from the classified construction inputs.
    ///
    /// With a cause present the merged trace is the own trace, then the
    /// cause's summary line, then the cause's own trace when it has one.
    /// A missing message falls back to the cause's summary so no context
    /// is silently dropped.
    pub(crate) fn assemble(
        name: &'static str,
        message: Option<String>,
        cause: Option<Extracted>,
        own_trace: String,
    ) -> Self {
        match cause {
            None => Self {
                name,
                message: message.unwrap_or_default(),
                trace: own_trace,
                source: None,
            },
            Some(Extracted { summary, trace: cause_trace, source }) => {
                let mut trace = own_trace;
                trace.push('\n');
                trace.push_str(&summary);
                if let Some(lines) = cause_trace.as_deref() {
                    trace.push('\n');
                    trace.push_str(lines);
                }
                Self {
                    name,
                    message: message.unwrap_or(summary),
                    trace,
                    source: Some(source),
                }
            }
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the variant name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the merged diagnostic trace
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// Get the wrapped error (if any)
    pub fn source_ref(&self) -> Option<&anyhow::Error> {
        self.source.as_ref()
    }
}

impl Extensible for ExtensibleError {}

impl Cause for ExtensibleError {
    fn summary(&self) -> String {
        format!("{}: {}", self.name, self.message)
    }

    fn trace(&self) -> Option<&str> {
        Some(&self.trace)
    }
}

// =============================================================================
// Display - compact, single-line format for logs
// =============================================================================

impl fmt::Display for ExtensibleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

// =============================================================================
// Debug - summary line followed by the merged trace
// =============================================================================

impl fmt::Debug for ExtensibleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.name, self.message)?;
        f.write_str(&self.trace)
    }
}

// =============================================================================
// std::error::Error implementation
// =============================================================================

impl std::error::Error for ExtensibleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
