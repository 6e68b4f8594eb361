use std::sync::Arc;

/// Transforms the text of a single token.
pub type Formatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

pub fn lowercase(token: &str) -> String {
    token.to_lowercase()
}

pub fn uppercase(token: &str) -> String {
    token.to_uppercase()
}

/// Uppercases the first `char` and leaves the rest untouched, so an already
/// shouting token such as `"EIGHT"` stays as it is.
pub fn uppercase_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_first() {
        assert_eq!(uppercase_first(""), "");
        assert_eq!(uppercase_first("a"), "A");
        assert_eq!(uppercase_first("rawr"), "Rawr");
        assert_eq!(uppercase_first("EIGHT"), "EIGHT");
        assert_eq!(uppercase_first("99two"), "99two");
        assert_eq!(uppercase_first("élan"), "Élan");
    }

    #[test]
    fn test_uppercase_first_expands_multi_char_mappings() {
        assert_eq!(uppercase_first("ßa"), "SSa");
    }

    #[test]
    fn test_case_mapping() {
        assert_eq!(lowercase("XMLHttp"), "xmlhttp");
        assert_eq!(uppercase("spam99"), "SPAM99");
    }
}
