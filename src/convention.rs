use crate::boundary::look_around;
use crate::classify::{not_letter_or_digit, not_lower_or_digit};
use crate::error::ParseConventionError;
use crate::format::{lowercase, uppercase, uppercase_first};
use crate::keywords::KeywordSet;
use crate::pipeline::{Combiner, Pipeline};
use crate::selector::{self, Selector};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref DEFAULT: Conventions = Conventions::default();
}

/// The named conventions every preset converter targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Convention {
    Snake,
    Kebab,
    Dot,
    ScreamingSnake,
    Camel,
    Pascal,
    Words,
    Title,
}

impl Convention {
    pub const ALL: [Convention; 8] = [
        Convention::Snake,
        Convention::Kebab,
        Convention::Dot,
        Convention::ScreamingSnake,
        Convention::Camel,
        Convention::Pascal,
        Convention::Words,
        Convention::Title,
    ];

    /// The convention's name, written in that convention
    pub fn name(self) -> &'static str {
        match self {
            Convention::Snake => "snake_case",
            Convention::Kebab => "kebab-case",
            Convention::Dot => "dot.case",
            Convention::ScreamingSnake => "SCREAMING_SNAKE_CASE",
            Convention::Camel => "camelCase",
            Convention::Pascal => "PascalCase",
            Convention::Words => "word case",
            Convention::Title => "Title Case",
        }
    }

    /// Convert `input` using the default keyword set
    pub fn convert(self, input: &str) -> String {
        DEFAULT.convert(self, input)
    }

    /// Build this convention's converter bound to `keywords`
    pub fn build(self, keywords: &KeywordSet) -> Combiner {
        self.build_from(&word_pipeline(), keywords)
    }

    fn build_from(self, words: &Pipeline, keywords: &KeywordSet) -> Combiner {
        match self {
            Convention::Snake => words.with_all_formatter(lowercase).join_with("_"),
            Convention::Kebab => words.with_all_formatter(lowercase).join_with("-"),
            Convention::Dot => words.with_all_formatter(lowercase).join_with("."),
            Convention::ScreamingSnake => words.with_all_formatter(uppercase).join_with("_"),
            Convention::Camel => words
                .with_all_formatter(lowercase)
                .with_formatter(uppercase_first, Selector::rest())
                .with_formatter(
                    uppercase,
                    selector::and(Selector::rest(), Selector::keywords(keywords.clone())),
                )
                .join_with(""),
            Convention::Pascal => words
                .with_all_formatter(lowercase)
                .with_all_formatter(uppercase_first)
                .join_with(""),
            Convention::Words => words.join_with(" "),
            Convention::Title => words
                .with_all_formatter(lowercase)
                .with_formatter(uppercase, Selector::keywords(keywords.clone()))
                .with_all_formatter(uppercase_first)
                .join_with(" "),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Convention {
    type Err = ParseConventionError;

    /// Accepts a convention's name in any style, with or without the
    /// trailing "case": `kebab`, `KebabCase`, `kebab-case` all work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = snake_case(s);
        let key = key.strip_suffix("_case").unwrap_or(&key);

        match key {
            "snake" => Ok(Convention::Snake),
            "kebab" => Ok(Convention::Kebab),
            "dot" => Ok(Convention::Dot),
            "screaming_snake" | "screaming" | "constant" => Ok(Convention::ScreamingSnake),
            "camel" => Ok(Convention::Camel),
            "pascal" => Ok(Convention::Pascal),
            "word" | "words" => Ok(Convention::Words),
            "title" => Ok(Convention::Title),
            _ => Err(ParseConventionError {
                input: s.to_string(),
                expected: Convention::ALL
                    .iter()
                    .map(|c| c.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

impl TryFrom<String> for Convention {
    type Error = ParseConventionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Convention> for String {
    fn from(convention: Convention) -> Self {
        convention.name().to_string()
    }
}

/// The two tokenizer passes every preset starts from: split on (and drop)
/// punctuation and whitespace, then split on case transitions keeping every letter.
pub fn word_pipeline() -> Pipeline {
    Pipeline::new()
        .tokenize_using(look_around, not_letter_or_digit, true)
        .tokenize_using(look_around, not_lower_or_digit, false)
}

/// Every preset converter, bound to one keyword set
#[derive(Debug, Clone)]
pub struct Conventions {
    keywords: KeywordSet,
    combiners: Vec<Combiner>,
}

impl Conventions {
    pub fn with_keywords(keywords: KeywordSet) -> Self {
        let words = word_pipeline();
        let combiners = Convention::ALL
            .iter()
            .map(|c| c.build_from(&words, &keywords))
            .collect();
        log::debug!("built conventions with {} keywords", keywords.len());

        Self {
            keywords,
            combiners,
        }
    }

    pub fn get(&self, convention: Convention) -> &Combiner {
        &self.combiners[convention.index()]
    }

    pub fn convert(&self, convention: Convention, input: &str) -> String {
        self.get(convention).apply(input)
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }
}

impl Default for Conventions {
    fn default() -> Self {
        Self::with_keywords(KeywordSet::default())
    }
}

pub fn snake_case(input: &str) -> String {
    DEFAULT.convert(Convention::Snake, input)
}

pub fn kebab_case(input: &str) -> String {
    DEFAULT.convert(Convention::Kebab, input)
}

pub fn dot_case(input: &str) -> String {
    DEFAULT.convert(Convention::Dot, input)
}

pub fn screaming_snake_case(input: &str) -> String {
    DEFAULT.convert(Convention::ScreamingSnake, input)
}

/// camelCase; keywords after the first token are fully uppercased
pub fn camel_case(input: &str) -> String {
    DEFAULT.convert(Convention::Camel, input)
}

pub fn pascal_case(input: &str) -> String {
    DEFAULT.convert(Convention::Pascal, input)
}

/// Space-separated tokens with their original casing
pub fn words(input: &str) -> String {
    DEFAULT.convert(Convention::Words, input)
}

/// Title Case; keywords are fully uppercased
pub fn title_case(input: &str) -> String {
    DEFAULT.convert(Convention::Title, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(snake_case("ENV_VAR"), "env_var");
        assert_eq!(kebab_case("dookerSpam99_rawr"), "dooker-spam99-rawr");
        assert_eq!(dot_case("IDOne"), "id.one");
        assert_eq!(camel_case("IDOne_XMLHttp_ON"), "idOneXMLHTTPOn");
        assert_eq!(pascal_case("maxID"), "MaxId");
        assert_eq!(screaming_snake_case("kebab-case"), "KEBAB_CASE");
        assert_eq!(words("IDOne_XMLHttp_ON"), "ID One XML Http ON");
        assert_eq!(title_case("EIGHT html rawr"), "Eight HTML Rawr");
    }

    #[test]
    fn test_title_without_lowercasing_keeps_shouting_tokens() {
        let title = word_pipeline()
            .with_formatter(uppercase, Selector::keywords(KeywordSet::default()))
            .with_all_formatter(uppercase_first)
            .join_with(" ");
        assert_eq!(title.apply("EIGHT html rawr"), "EIGHT HTML Rawr");
        assert_eq!(title.apply("fooBarBaz"), "Foo Bar Baz");
    }

    #[test]
    fn test_empty_and_symbol_only_input() {
        for convention in Convention::ALL {
            assert_eq!(convention.convert(""), "", "{convention}");
            assert_eq!(convention.convert("$$$ --- ..."), "", "{convention}");
        }
    }

    #[test]
    fn test_custom_keywords() {
        let conventions = Conventions::with_keywords(KeywordSet::new(["wasm"]));
        assert_eq!(conventions.convert(Convention::Camel, "load_wasm_id"), "loadWASMId");
        assert_eq!(conventions.convert(Convention::Title, "load_wasm_id"), "Load WASM Id");
        assert!(conventions.keywords().contains("wasm"));
    }

    #[test]
    fn test_build_matches_bundle() {
        let keywords = KeywordSet::default();
        for convention in Convention::ALL {
            let built = convention.build(&keywords);
            assert_eq!(built.apply("maxID_html"), convention.convert("maxID_html"));
        }
    }

    #[test]
    fn test_parse_convention_names() {
        for convention in Convention::ALL {
            assert_eq!(convention.name().parse::<Convention>(), Ok(convention));
        }
        assert_eq!("kebab".parse::<Convention>(), Ok(Convention::Kebab));
        assert_eq!("KebabCase".parse::<Convention>(), Ok(Convention::Kebab));
        assert_eq!("screaming-snake".parse::<Convention>(), Ok(Convention::ScreamingSnake));
        assert_eq!("words".parse::<Convention>(), Ok(Convention::Words));
    }

    #[test]
    fn test_parse_unknown_convention() {
        let err = "sponge-bob".parse::<Convention>().unwrap_err();
        assert_eq!(err.input, "sponge-bob");
        assert!(err.to_string().contains("snake_case"));
    }

    #[test]
    fn test_serde_uses_names() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            case: Convention,
        }

        let parsed: Wrapper = toml::from_str(r#"case = "camel""#).unwrap();
        assert_eq!(parsed.case, Convention::Camel);

        let out = toml::to_string(&Wrapper { case: Convention::Dot }).unwrap();
        assert_eq!(out.trim(), r#"case = "dot.case""#);
    }
}
