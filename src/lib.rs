//! Convert identifiers between naming conventions.
//!
//! Input is split into tokens by tokenizer passes, selected tokens are
//! reformatted, and the result is joined with a separator. The preset
//! conventions ([`snake_case`], [`camel_case`], ...) are all built from the
//! same [`Pipeline`] pieces a caller can use to build their own.

pub mod boundary;
pub mod classify;
pub mod cli;
pub mod config;
pub mod convention;
pub mod error;
pub mod format;
pub mod keywords;
pub mod pipeline;
pub mod selector;
pub mod token;

pub use config::Config;
pub use convention::{
    camel_case, dot_case, kebab_case, pascal_case, screaming_snake_case, snake_case, title_case,
    word_pipeline, words, Convention, Conventions,
};
pub use error::ParseConventionError;
pub use keywords::KeywordSet;
pub use pipeline::{Combiner, Pipeline};
pub use selector::Selector;
pub use token::Tokens;
