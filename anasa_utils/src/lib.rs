/// Version of the relay. Release builds may override it by setting
/// `ANASA_VERSION` at compile time.
pub fn anasa_version() -> &'static str {
    option_env!("ANASA_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Assert that a value matches a pattern, optionally followed by a guard.
///
/// ```rust
/// # use anasa_utils::assert_matches;
/// let result: Result<u8, String> = Err("535 authentication failed".into());
/// assert_matches!(result, Err(ref err) if err.starts_with("535"));
/// ```
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $($pattern:tt)+) => {
        match $expr {
            $($pattern)+ => {}
            ref value => ::core::panic!(
                "value {:?} does not match `{}`",
                value,
                ::core::stringify!($($pattern)+)
            ),
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn matches() {
        assert_matches!(Some(3), Some(3));
        assert_matches!(Some(3), Some(x) if x > 2);
    }

    #[test]
    #[should_panic(expected = "does not match `Some(x) if x > 3`")]
    fn guard_fails() {
        assert_matches!(Some(3), Some(x) if x > 3);
    }

    #[test]
    fn version() {
        assert!(!super::anasa_version().is_empty());
    }
}
