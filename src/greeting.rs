//! The greeting value handed across the native boundary.

/// Greeting constant returned to the managed host.
pub const GREETING: &str = "Hello from Rust";

/// Builds a fresh greeting value.
///
/// Each call constructs a new owned string; how the value crosses the
/// boundary is the caller's concern.
pub fn greeting() -> String {
    GREETING.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_is_ascii() {
        // Modified UTF-8 and UTF-8 agree on ASCII, so the host string holds
        // the same bytes the constant does.
        assert!(GREETING.is_ascii());
    }

    #[test]
    fn constant_has_no_interior_nul() {
        assert!(!GREETING.as_bytes().contains(&0));
    }

    #[test]
    fn each_call_builds_a_fresh_value() {
        let a = greeting();
        let b = greeting();
        assert_eq!(a, b);
        assert_ne!(a.as_ptr(), b.as_ptr());
    }
}
