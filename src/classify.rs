use std::sync::Arc;

/// A predicate deciding whether a single `char` belongs to a "separator" class.
///
/// Any `Fn(char) -> bool` works wherever a classifier is expected; this alias is
/// the shared, thread-safe form the pipeline stores.
pub type Classifier = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// True for anything that is neither a letter nor a digit (punctuation, whitespace, symbols)
pub fn not_letter_or_digit(ch: char) -> bool {
    !ch.is_alphabetic() && !ch.is_numeric()
}

/// True for uppercase letters and for anything that is not a letter or digit
pub fn not_lower_or_digit(ch: char) -> bool {
    !ch.is_lowercase() && !ch.is_numeric()
}

/// True for uppercase letters only
pub fn is_upper(ch: char) -> bool {
    ch.is_uppercase()
}
