//! Small helpers for logging and display formatting.
//!
//! - String truncation for log fields
//! - Title-casing of country names without a display override

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` characters with an ellipsis and a count of
/// the characters dropped. Counts characters, not bytes, so accented text
/// never splits inside a code point.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 chars)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    let total = s.chars().count();
    if total <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max).collect();
        format!("{}…(+{} chars)", head, total - max)
    }
}

/// Uppercase the first letter of every word and lowercase the rest.
///
/// A word starts at any letter that follows a non-letter, so
/// `"costa rica"` becomes `"Costa Rica"` and `"guinea-bisáu"` becomes
/// `"Guinea-Bisáu"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 chars)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        let result = truncate_for_log("deforestación", 12);
        assert_eq!(result, "deforestació…(+1 chars)");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("costa rica"), "Costa Rica");
        assert_eq!(title_case("el salvador"), "El Salvador");
        assert_eq!(title_case("BRASIL"), "Brasil");
        assert_eq!(title_case("méxico"), "México");
        assert_eq!(title_case("guinea-bisáu"), "Guinea-Bisáu");
        assert_eq!(title_case(""), "");
    }
}
