//! Boundary detection: deciding whether a token splits at a given position.
//!
//! A detector sees the whole token (as `char`s), the position under test and
//! the classifier, so it can look at neighbours as well as the current `char`.

/// Decides whether a split point exists at `idx` of `text`.
///
/// Implemented for every `Fn(&[char], usize, &dyn Fn(char) -> bool) -> bool`,
/// so plain functions such as [`simple`] and [`look_around`] can be used directly.
pub trait BoundaryTest: Send + Sync {
    fn is_boundary(&self, text: &[char], idx: usize, class: &dyn Fn(char) -> bool) -> bool;
}

impl<F> BoundaryTest for F
where
    F: Fn(&[char], usize, &dyn Fn(char) -> bool) -> bool + Send + Sync,
{
    fn is_boundary(&self, text: &[char], idx: usize, class: &dyn Fn(char) -> bool) -> bool {
        self(text, idx, class)
    }
}

/// Only the `char` at `idx` is considered.
pub fn simple(text: &[char], idx: usize, class: &dyn Fn(char) -> bool) -> bool {
    text.get(idx).is_some_and(|&ch| class(ch))
}

/// A boundary fires only at the edge of a run of separator-class `char`s.
///
/// The current `char` must be in the class, and at least one neighbour must not
/// be. A missing neighbour (start or end of text) counts as being in the class,
/// so `"AAa"` with an uppercase classifier splits before the final `A`, while
/// `"AAA"` never splits.
pub fn look_around(text: &[char], idx: usize, class: &dyn Fn(char) -> bool) -> bool {
    let Some(&current) = text.get(idx) else {
        return false;
    };

    let prev = idx
        .checked_sub(1)
        .and_then(|i| text.get(i))
        .map_or(true, |&ch| class(ch));
    let next = text.get(idx + 1).map_or(true, |&ch| class(ch));

    class(current) && (!prev || !next)
}
