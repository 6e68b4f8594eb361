//! Persistent pipeline builder.
//!
//! A [`Pipeline`] is an immutable chain of stages. Every builder call returns a
//! new pipeline sharing the receiver's stages, so a common prefix such as
//! "split into words" can be branched into several conventions:
//!
//! ```
//! use wordcase::boundary::look_around;
//! use wordcase::classify::{not_letter_or_digit, not_lower_or_digit};
//! use wordcase::format::{lowercase, uppercase};
//! use wordcase::Pipeline;
//!
//! let words = Pipeline::new()
//!     .tokenize_using(look_around, not_letter_or_digit, true)
//!     .tokenize_using(look_around, not_lower_or_digit, false);
//!
//! let snake = words.with_all_formatter(lowercase).join_with("_");
//! let shout = words.with_all_formatter(uppercase).join_with("_");
//!
//! assert_eq!(snake.apply("maxID"), "max_id");
//! assert_eq!(shout.apply("maxID"), "MAX_ID");
//! ```

use crate::boundary::BoundaryTest;
use crate::classify::Classifier;
use crate::format::Formatter;
use crate::selector::Selector;
use crate::token::Tokens;
use std::fmt;
use std::sync::Arc;

enum Stage {
    Tokenize {
        test: Arc<dyn BoundaryTest>,
        class: Classifier,
        delete_separator: bool,
    },
    Format {
        formatter: Formatter,
        selector: Selector,
    },
    FormatAll {
        formatter: Formatter,
    },
}

impl Stage {
    fn apply(&self, tokens: &Tokens) -> Tokens {
        match self {
            Stage::Tokenize {
                test,
                class,
                delete_separator,
            } => tokens.tokenize(test.as_ref(), class.as_ref(), *delete_separator),
            Stage::Format {
                formatter,
                selector,
            } => tokens.format(formatter.as_ref(), selector),
            Stage::FormatAll { formatter } => tokens.format_all(formatter.as_ref()),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Stage::Tokenize { .. } => "tokenize",
            Stage::Format { .. } => "format",
            Stage::FormatAll { .. } => "format-all",
        }
    }
}

struct Node {
    stage: Stage,
    prev: Option<Arc<Node>>,
}

/// A composable, immutable string-to-tokens transform.
///
/// The empty pipeline wraps its input as a single token.
#[derive(Clone, Default)]
pub struct Pipeline {
    head: Option<Arc<Node>>,
    len: usize,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, stage: Stage) -> Self {
        Self {
            head: Some(Arc::new(Node {
                stage,
                prev: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Append a tokenizer pass.
    ///
    /// `test` decides where a token splits, `class` decides which `char`s are
    /// separators, and `delete_separator` drops separator `char`s instead of
    /// starting the next token with them.
    pub fn tokenize_using<B, C>(&self, test: B, class: C, delete_separator: bool) -> Self
    where
        B: BoundaryTest + 'static,
        C: Fn(char) -> bool + Send + Sync + 'static,
    {
        self.push(Stage::Tokenize {
            test: Arc::new(test),
            class: Arc::new(class),
            delete_separator,
        })
    }

    /// Append a formatter applied to the tokens `selector` picks
    pub fn with_formatter<F>(&self, formatter: F, selector: Selector) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.push(Stage::Format {
            formatter: Arc::new(formatter),
            selector,
        })
    }

    /// Append a formatter applied to every token
    pub fn with_all_formatter<F>(&self, formatter: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.push(Stage::FormatAll {
            formatter: Arc::new(formatter),
        })
    }

    /// Finish the pipeline with a separator to join the tokens
    pub fn join_with(&self, separator: impl Into<String>) -> Combiner {
        Combiner {
            pipeline: self.clone(),
            separator: separator.into(),
        }
    }

    /// Number of stages after the seed
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn stages(&self) -> Vec<&Stage> {
        let mut stages = Vec::with_capacity(self.len);
        let mut node = self.head.as_deref();
        while let Some(n) = node {
            stages.push(&n.stage);
            node = n.prev.as_deref();
        }
        stages.reverse();
        stages
    }

    /// Run every stage over `input`
    pub fn tokens(&self, input: &str) -> Tokens {
        let mut tokens = Tokens::seed(input);
        for stage in self.stages() {
            tokens = stage.apply(&tokens);
            log::trace!("{} stage -> {} tokens", stage.name(), tokens.len());
        }
        tokens
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.stages().iter().map(|s| s.name()))
            .finish()
    }
}

/// A finished pipeline: converts a string to a string.
#[derive(Clone, Debug)]
pub struct Combiner {
    pipeline: Pipeline,
    separator: String,
}

impl Combiner {
    pub fn apply(&self, input: &str) -> String {
        self.pipeline.tokens(input).join(&self.separator)
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Turn the combiner into a plain closure
    pub fn into_fn(self) -> impl Fn(&str) -> String + Clone + Send + Sync {
        move |input: &str| self.apply(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{look_around, simple};
    use crate::classify::{not_letter_or_digit, not_lower_or_digit};
    use crate::format::{lowercase, uppercase, uppercase_first};

    fn words() -> Pipeline {
        Pipeline::new()
            .tokenize_using(look_around, not_letter_or_digit, true)
            .tokenize_using(look_around, not_lower_or_digit, false)
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let p = Pipeline::new();
        assert!(p.is_empty());
        assert_eq!(p.tokens("One Two").len(), 1);
        assert_eq!(p.join_with("-").apply("One Two"), "One Two");
    }

    #[test]
    fn test_stages_run_in_order() {
        let p = words()
            .with_all_formatter(lowercase)
            .with_formatter(uppercase_first, Selector::rest());
        assert_eq!(p.len(), 4);
        assert_eq!(p.join_with("").apply("one two three-four."), "oneTwoThreeFour");

        // the same stages the other way round: lowercasing undoes the first pass
        let p = words()
            .with_formatter(uppercase_first, Selector::rest())
            .with_all_formatter(lowercase);
        assert_eq!(p.join_with("").apply("one two three-four."), "onetwothreefour");
    }

    #[test]
    fn test_extending_does_not_alter_base() {
        let base = words();
        let loud = base.with_all_formatter(uppercase);
        let quiet = base.with_all_formatter(lowercase);

        assert_eq!(base.len(), 2);
        assert_eq!(base.join_with(" ").apply("One Two"), "One Two");
        assert_eq!(loud.join_with(" ").apply("One Two"), "ONE TWO");
        assert_eq!(quiet.join_with(" ").apply("One Two"), "one two");
    }

    #[test]
    fn test_custom_stage_values() {
        let p = Pipeline::new()
            .tokenize_using(simple, |ch: char| ch == '/', true)
            .with_formatter(|s: &str| format!("<{s}>"), Selector::last());
        assert_eq!(p.join_with("::").apply("a/b/c"), "a::b::<c>");
    }

    #[test]
    fn test_into_fn_and_threads() {
        let convert = words().with_all_formatter(lowercase).join_with("_").into_fn();
        let handles: Vec<_> = ["fooBar", "BAZ_qux"]
            .into_iter()
            .map(|input| {
                let convert = convert.clone();
                std::thread::spawn(move || convert(input))
            })
            .collect();
        let got: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(got, vec!["foo_bar", "baz_qux"]);
    }

    #[test]
    fn test_debug_lists_stages() {
        let p = words().with_all_formatter(lowercase);
        assert_eq!(format!("{p:?}"), r#"["tokenize", "tokenize", "format-all"]"#);
    }
}
