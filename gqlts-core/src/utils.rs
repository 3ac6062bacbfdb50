//! Shared string helpers for code generation.

/// Lowercase the first character, leaving the rest untouched
/// (e.g., "DateTime" -> "dateTime", "JSON" -> "jSON").
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("Color"), "color");
        assert_eq!(lower_first("DateTime"), "dateTime");
        assert_eq!(lower_first("JSON"), "jSON");
        assert_eq!(lower_first("item"), "item");
        assert_eq!(lower_first(""), "");
    }
}
