//! Native trace capture and type-name helpers

use std::backtrace::Backtrace;

/// Capture the point-of-construction trace using the runtime's native
/// backtrace facility.
pub(crate) fn capture() -> String {
    let trace = Backtrace::force_capture().to_string();
    trace.trim_end().to_string()
}

/// Last path segment of a fully qualified type name.
///
/// `"exterr::error::ExtensibleError"` becomes `"ExtensibleError"`. Generic
/// arguments are kept as written, so `"a::Caught<std::io::Error>"` becomes
/// `"Caught<std::io::Error>"`.
pub(crate) fn simple_name(full: &'static str) -> &'static str {
    let head = full.split('<').next().unwrap_or(full);
    match head.rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(simple_name("exterr::error::ExtensibleError"), "ExtensibleError");
        assert_eq!(simple_name("ParseError"), "ParseError");
        assert_eq!(simple_name("a::Caught<std::io::Error>"), "Caught<std::io::Error>");
    }

    #[test]
    fn test_capture_is_non_empty() {
        let trace = capture();
        assert!(!trace.is_empty());
        assert!(!trace.ends_with('\n'));
    }
}
