use crate::boundary::BoundaryTest;
use crate::selector::{Index, Selector};
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;

/// An ordered sequence of tokens produced by splitting a string at boundaries.
///
/// Tokenizer passes only ever subdivide tokens and formatter passes only ever
/// rewrite them in place, so order always follows the original text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens(Vec<String>);

impl Tokens {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The whole input as a single token
    pub fn seed(input: &str) -> Self {
        Self(vec![input.to_string()])
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Split every token with the given boundary test and classifier.
    ///
    /// With `delete_separator` set, `char`s the classifier puts in the separator
    /// class are dropped instead of starting the next token.
    pub fn tokenize(
        &self,
        test: &dyn BoundaryTest,
        class: &dyn Fn(char) -> bool,
        delete_separator: bool,
    ) -> Tokens {
        let mut out = Vec::with_capacity(self.0.len());
        for token in &self.0 {
            out.extend(tokenize_str(token, test, class, delete_separator).0);
        }
        Tokens(out)
    }

    /// Apply `formatter` to the tokens whose index `selector` picks.
    ///
    /// Indices are matched by membership, so out-of-range or negative values
    /// from a selector are ignored.
    pub fn format(&self, formatter: &dyn Fn(&str) -> String, selector: &Selector) -> Tokens {
        let selected: HashSet<Index> = selector.select(self).into_iter().collect();

        self.0
            .iter()
            .enumerate()
            .map(|(i, token)| {
                if selected.contains(&(i as Index)) {
                    formatter(token.as_str())
                } else {
                    token.clone()
                }
            })
            .collect()
    }

    pub fn format_all(&self, formatter: &dyn Fn(&str) -> String) -> Tokens {
        self.0.iter().map(|token| formatter(token.as_str())).collect()
    }

    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

/// Break a single string into tokens.
///
/// Empty runs between two boundaries never produce a token.
pub fn tokenize_str(
    input: &str,
    test: &dyn BoundaryTest,
    class: &dyn Fn(char) -> bool,
    delete_separator: bool,
) -> Tokens {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if test.is_boundary(&chars, i, class) && !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
        if !delete_separator || !class(ch) {
            current.push(ch);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    Tokens(tokens)
}

impl Deref for Tokens {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join(" "))
    }
}

impl From<Vec<String>> for Tokens {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}

impl<S: Into<String>> FromIterator<S> for Tokens {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Tokens {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
