//! Selectors pick which tokens a formatter acts on.
//!
//! A selector maps a token sequence to a list of indices. The primitives
//! ([`first`], [`last`], [`rest`], [`all`], keyword membership) combine with
//! [`not`], [`and`] and [`or`].
//!
//! Indices are signed: [`last`] of an empty sequence yields `-1`. Formatter
//! application matches indices by membership, so such values are never used
//! to address a token.

use crate::keywords::KeywordSet;
use crate::token::Tokens;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;

pub type Index = isize;

type SelectFn = dyn Fn(&Tokens) -> Vec<Index> + Send + Sync;

/// A shareable selector value
#[derive(Clone)]
pub struct Selector(Arc<SelectFn>);

impl Selector {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Tokens) -> Vec<Index> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn select(&self, tokens: &Tokens) -> Vec<Index> {
        (self.0)(tokens)
    }

    pub fn first() -> Self {
        Self::from_fn(first)
    }

    pub fn last() -> Self {
        Self::from_fn(last)
    }

    pub fn rest() -> Self {
        Self::from_fn(rest)
    }

    pub fn all() -> Self {
        Self::from_fn(all)
    }

    /// Tokens whose lowercased text is in `keywords`
    pub fn keywords(keywords: KeywordSet) -> Self {
        Self::from_fn(move |tokens| keyword_indices(tokens, &keywords))
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Selector(..)")
    }
}

/// Always `[0]`, even for an empty sequence
pub fn first(_tokens: &Tokens) -> Vec<Index> {
    vec![0]
}

/// The last index; `-1` for an empty sequence
pub fn last(tokens: &Tokens) -> Vec<Index> {
    vec![tokens.len() as Index - 1]
}

pub fn rest(tokens: &Tokens) -> Vec<Index> {
    (1..tokens.len() as Index).collect()
}

pub fn all(tokens: &Tokens) -> Vec<Index> {
    (0..tokens.len() as Index).collect()
}

pub fn keyword_indices(tokens: &Tokens, keywords: &KeywordSet) -> Vec<Index> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| keywords.contains(&token.to_lowercase()))
        .map(|(i, _)| i as Index)
        .collect()
}

/// Complement of `selector` within `0..len`.
///
/// Walks the gaps between consecutive selected indices, so `selector` must
/// yield ascending, duplicate-free indices for an exact complement. Anything
/// else still produces indices within range, just not a meaningful set.
pub fn not(selector: Selector) -> Selector {
    Selector::from_fn(move |tokens| {
        let len = tokens.len() as Index;
        let mut out = Vec::new();
        let mut at: Index = 0;

        for i in selector.select(tokens) {
            out.extend(at..i.min(len));
            at = at.max(i + 1);
        }
        out.extend(at..len);

        out
    })
}

/// Indices picked by both selectors, in the order `a` produced them
pub fn and(a: Selector, b: Selector) -> Selector {
    Selector::from_fn(move |tokens| {
        let wanted: HashSet<Index> = b.select(tokens).into_iter().collect();
        a.select(tokens)
            .into_iter()
            .filter(|i| wanted.contains(i))
            .collect()
    })
}

/// Indices picked by either selector, ascending and without duplicates
pub fn or(a: Selector, b: Selector) -> Selector {
    Selector::from_fn(move |tokens| {
        let union: BTreeSet<Index> = a.select(tokens).into_iter().chain(b.select(tokens)).collect();
        union.into_iter().collect()
    })
}
