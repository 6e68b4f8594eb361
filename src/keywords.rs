use lazy_static::lazy_static;
use std::collections::HashSet;
use std::sync::Arc;

/// Common initialisms that golint expects to be same-cased
pub const GOLINT_KEYWORDS: &[&str] = &[
    "acl", "api", "ascii", "cpu", "css", "dns", "eof", "guid", "html", "http", "https", "id",
    "ip", "json", "lhs", "qps", "ram", "rhs", "rpc", "sla", "smtp", "sql", "ssh", "tcp", "tls",
    "ttl", "udp", "ui", "uid", "uuid", "uri", "url", "utf8", "vm", "xml", "xmpp", "xsrf", "xss",
];

/// Format and protocol names worth same-casing on top of [`GOLINT_KEYWORDS`]
pub const EXTRA_KEYWORDS: &[&str] = &["grpc", "tml", "toml", "yaml", "yml"];

lazy_static! {
    static ref USEFUL: KeywordSet = KeywordSet::new(GOLINT_KEYWORDS.iter().chain(EXTRA_KEYWORDS));
}

/// An immutable set of lowercase words (acronyms) rendered fully uppercase by
/// the keyword-aware conventions.
///
/// Cloning is cheap and clones share the same storage, so one set can be bound
/// into any number of pipelines and used from several threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    words: Arc<HashSet<String>>,
}

impl KeywordSet {
    /// Build a set from the given words; each one is stored lowercased
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        log::trace!("built keyword set with {} entries", words.len());

        Self {
            words: Arc::new(words),
        }
    }

    pub fn empty() -> Self {
        Self::new(std::iter::empty::<&str>())
    }

    pub fn golint() -> Self {
        Self::new(GOLINT_KEYWORDS)
    }

    /// The golint initialisms plus [`EXTRA_KEYWORDS`]
    pub fn useful() -> Self {
        USEFUL.clone()
    }

    /// Exact membership test; callers lowercase the word first
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// A new set holding these words plus `more`; `self` is left untouched
    pub fn extended<I, S>(&self, more: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let more: Vec<String> = more.into_iter().map(|w| w.as_ref().to_string()).collect();
        Self::new(self.words.iter().map(String::as_str).chain(more.iter().map(String::as_str)))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::useful()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
