//! Pluralization for log lines.

/// Return "s" suffix for plural counts
///
/// - `plural_s(0)` -> `"s"` (0 works)
/// - `plural_s(1)` -> `""` (1 work)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(0, "work")` -> `"0 works"`
/// - `plural_count(1, "work")` -> `"1 work"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "work"), "0 works");
        assert_eq!(plural_count(1, "work"), "1 work");
        assert_eq!(plural_count(12, "error"), "12 errors");
    }
}
