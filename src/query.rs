//! Query-string editing for filter-driven navigation.
//!
//! Both operations take the current location explicitly and return a new
//! `path?query` string; nothing global is read or written. Queries are parsed
//! and serialized as `application/x-www-form-urlencoded`, the same way browser
//! `URLSearchParams` does it (spaces become `+`, a bare key becomes `key=`).

use std::borrow::Cow;

use clap::ValueEnum;
use url::form_urlencoded;

/// Path and query of a navigational location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    /// Raw query without the leading `?`.
    pub query: String,
}

impl Location {
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        let mut query = query.into();
        if query.starts_with('?') {
            query.remove(0);
        }
        Self {
            path: path.into(),
            query,
        }
    }

    /// Split `"/cars?model=civic#top"` into path and query. The fragment is dropped.
    pub fn parse(location: &str) -> Self {
        let without_fragment = location.split_once('#').map_or(location, |(head, _)| head);
        match without_fragment.split_once('?') {
            Some((path, query)) => Self::new(path, query),
            None => Self::new(without_fragment, ""),
        }
    }
}

/// How a key argument is matched against existing query keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum KeyCase {
    /// Match the key exactly as given.
    #[default]
    Preserve,
    /// Lowercase the key before matching.
    Lower,
}

impl KeyCase {
    fn apply(self, key: &str) -> Cow<'_, str> {
        match self {
            KeyCase::Preserve => Cow::Borrowed(key),
            KeyCase::Lower => Cow::Owned(key.to_lowercase()),
        }
    }
}

/// Key-case policy for each operation.
///
/// The default keeps the long-standing asymmetry of the browsing UI: keys are
/// set exactly as given but lowercased before removal. `uniform` applies one
/// policy to both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryEditor {
    pub set_case: KeyCase,
    pub delete_case: KeyCase,
}

impl Default for QueryEditor {
    fn default() -> Self {
        Self {
            set_case: KeyCase::Preserve,
            delete_case: KeyCase::Lower,
        }
    }
}

impl QueryEditor {
    pub fn uniform(case: KeyCase) -> Self {
        Self {
            set_case: case,
            delete_case: case,
        }
    }

    /// Set `key=value`, replacing the first existing entry in place and
    /// dropping any later duplicates; append when absent.
    pub fn with_param(&self, location: &Location, key: &str, value: &str) -> String {
        let key = self.set_case.apply(key);
        let mut pairs = parse_pairs(&location.query);

        let mut found = false;
        pairs.retain_mut(|(k, v)| {
            if *k != key {
                return true;
            }
            if found {
                return false;
            }
            found = true;
            *v = value.to_string();
            true
        });
        if !found {
            pairs.push((key.into_owned(), value.to_string()));
        }

        render(&location.path, &pairs)
    }

    /// Remove every entry for `key`. An empty result keeps the trailing `?`.
    pub fn without_param(&self, location: &Location, key: &str) -> String {
        let key = self.delete_case.apply(key);
        let mut pairs = parse_pairs(&location.query);
        pairs.retain(|(k, _)| *k != key);
        render(&location.path, &pairs)
    }
}

/// `QueryEditor::default().with_param(..)`.
pub fn with_param(location: &Location, key: &str, value: &str) -> String {
    QueryEditor::default().with_param(location, key, value)
}

/// `QueryEditor::default().without_param(..)`.
pub fn without_param(location: &Location, key: &str) -> String {
    QueryEditor::default().without_param(location, key)
}

fn parse_pairs(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes()).into_owned().collect()
}

fn render(path: &str, pairs: &[(String, String)]) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("{path}?{query}")
}
