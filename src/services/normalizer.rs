// src/services/normalizer.rs

/// Lower-cases raw input for keyword matching. Whitespace is left untouched.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
}

/// `None` for absent input or input made only of ASCII control characters
/// and spaces (`<= U+0020`). Unicode spaces such as U+00A0 count as content.
pub fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| s.chars().any(|c| c > ' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_without_trimming() {
        assert_eq!(normalize("  METAL Rod "), "  metal rod ");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn blank_inputs_are_rejected() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some(" \t\n")), None);
        assert_eq!(non_blank(Some(" steel ")), Some(" steel "));
        assert_eq!(non_blank(Some("\r\x0b\x00")), None);
    }

    #[test]
    fn unicode_spaces_are_not_blank() {
        assert_eq!(non_blank(Some("\u{00A0}")), Some("\u{00A0}"));
        assert_eq!(non_blank(Some("\u{2003}")), Some("\u{2003}"));
    }
}
