//! One-line declaration of named error variants

/// Declare a named error variant backed by [`crate::ExtensibleError`].
///
/// The variant gets the three construction shapes from
/// [`crate::Extensible`], delegating getters, `Display`/`Debug`,
/// `std::error::Error`, and the error-like shape so it can itself be
/// wrapped. The reported name is the declared type's own name; the
/// `as "Label"` form overrides it.
///
/// # Example
///
/// ```rust
/// use exterr::Extensible;
///
/// exterr::extensible_error! {
///     /// Raised when the input cannot be parsed.
///     pub struct ParseError;
/// }
///
/// let err = ParseError::from_message("unexpected token");
/// assert_eq!(err.name(), "ParseError");
/// assert_eq!(err.to_string(), "ParseError: unexpected token");
/// ```
#[macro_export]
macro_rules! extensible_error {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $crate::extensible_error!(@base $(#[$meta])* $vis struct $name);

        impl $crate::Extensible for $name {}
    };
    ($(#[$meta:meta])* $vis:vis struct $name:ident as $label:literal;) => {
        $crate::extensible_error!(@base $(#[$meta])* $vis struct $name);

        impl $crate::Extensible for $name {
            fn error_name() -> &'static str {
                $label
            }
        }
    };
    (@base $(#[$meta:meta])* $vis:vis struct $name:ident) => {
        $(#[$meta])*
        $vis struct $name($crate::ExtensibleError);

        impl $name {
            /// Get the variant name
            $vis fn name(&self) -> &'static str {
                self.0.name()
            }

            /// Get the error message
            $vis fn message(&self) -> &str {
                self.0.message()
            }

            /// Get the merged diagnostic trace
            $vis fn trace(&self) -> &str {
                self.0.trace()
            }

            /// Get the wrapped error (if any)
            $vis fn source_ref(&self) -> ::std::option::Option<&$crate::anyhow::Error> {
                self.0.source_ref()
            }
        }

        impl ::std::convert::From<$crate::ExtensibleError> for $name {
            fn from(inner: $crate::ExtensibleError) -> Self {
                Self(inner)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.0, f)
            }
        }

        impl ::std::error::Error for $name {
            fn source(&self) -> ::std::option::Option<&(dyn ::std::error::Error + 'static)> {
                ::std::error::Error::source(&self.0)
            }
        }

        impl $crate::Cause for $name {
            fn summary(&self) -> ::std::string::String {
                $crate::Cause::summary(&self.0)
            }

            fn trace(&self) -> ::std::option::Option<&str> {
                $crate::Cause::trace(&self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{caught, Extensible};

    crate::extensible_error! {
        /// Raised when the input cannot be parsed.
        struct ParseError;
    }

    crate::extensible_error! {
        struct GatewayError as "HTTP";
    }

    #[test]
    fn test_variant_reports_its_own_name() {
        let err = ParseError::from_message("unexpected token");
        assert_eq!(err.name(), "ParseError");
        assert_eq!(err.message(), "unexpected token");
        assert_eq!(err.to_string(), "ParseError: unexpected token");
    }

    #[test]
    fn test_label_overrides_reflective_name() {
        let err = GatewayError::from_message("status 502");
        assert_eq!(err.name(), "HTTP");
        assert_eq!(err.to_string(), "HTTP: status 502");
    }

    #[test]
    fn test_variant_wraps_foreign_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "disk full");
        let err = ParseError::from_cause(caught(io));
        assert_eq!(err.message(), "Error: disk full");
        assert!(err.trace().contains("Error: disk full"));
        assert!(err.source_ref().is_some());
    }

    #[test]
    fn test_variant_wraps_variant_with_full_trace() {
        let inner = ParseError::from_message("unexpected token");
        let inner_trace = inner.trace().to_string();
        let err = GatewayError::from_message_and_cause("request failed", inner);
        assert_eq!(err.message(), "request failed");
        assert!(err.trace().contains("ParseError: unexpected token"));
        assert!(err.trace().ends_with(&inner_trace));
    }

    #[test]
    fn test_variant_propagates_through_question_mark() {
        fn parse() -> Result<(), ParseError> {
            Err(ParseError::from_message("bad digit"))
        }
        fn run() -> Result<(), ParseError> {
            parse()?;
            Ok(())
        }
        let err = run().unwrap_err();
        assert_eq!(err.name(), "ParseError");
    }
}
