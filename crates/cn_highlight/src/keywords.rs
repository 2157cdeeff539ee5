//! Keyword table: exact word → [`Category`] lookup.
//!
//! The table is a set of named keyword groups. Each word belongs to at most
//! one group, and lookup is an exact, case-sensitive hash probe (no prefix
//! or fuzzy matching). Anything not in the table is [`Category::Default`].
//!
//! # Built-in Groups
//!
//! | Group     | Words                          |
//! |-----------|--------------------------------|
//! | `blue`    | `class`                        |
//! | `magenta` | `import`, `from`, `export`     |
//! | `green`   | `TestComponent`, `Component`   |
//!
//! Tables are immutable once built. Build one per theme and share it by
//! reference.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::category::{Category, KeywordGroup};
use cn_lexer_core::{is_delimiter, is_quote};

/// Declaration keywords.
pub const BLUE_KEYWORDS: &[&str] = &["class"];

/// Module keywords.
pub const MAGENTA_KEYWORDS: &[&str] = &["import", "from", "export"];

/// Known type names.
pub const GREEN_KEYWORDS: &[&str] = &["TestComponent", "Component"];

/// Built-in groups in [`KeywordGroup`] index order.
pub(crate) const BUILTIN_GROUPS: [(&str, &[&str]); 3] = [
    ("blue", BLUE_KEYWORDS),
    ("magenta", MAGENTA_KEYWORDS),
    ("green", GREEN_KEYWORDS),
];

/// One named keyword list.
#[derive(Clone, Debug, PartialEq, Eq)]
struct GroupEntry {
    name: Box<str>,
    keywords: Vec<Box<str>>,
}

/// Immutable keyword → group table.
#[derive(Clone, Debug, Default)]
pub struct KeywordTable {
    words: FxHashMap<Box<str>, KeywordGroup>,
    groups: Vec<GroupEntry>,
}

impl KeywordTable {
    /// Start an empty table.
    pub fn builder() -> KeywordTableBuilder {
        KeywordTableBuilder::default()
    }

    /// The fixed built-in table.
    ///
    /// The built-in lists are checked by the builder's validation in tests,
    /// so this path inserts them directly.
    pub fn builtin() -> Self {
        let mut table = KeywordTable::default();
        for (name, keywords) in BUILTIN_GROUPS {
            table.push_group(name, keywords.iter().copied());
        }
        table
    }

    /// Classify one token.
    #[inline]
    pub fn classify(&self, text: &str) -> Category {
        self.words
            .get(text)
            .map_or(Category::Default, |&group| Category::Keyword(group))
    }

    /// Number of keyword groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Name of `group`, if it exists in this table.
    pub fn group_name(&self, group: KeywordGroup) -> Option<&str> {
        self.groups.get(group.index()).map(|entry| &*entry.name)
    }

    /// Words of `group` in insertion order.
    pub fn keywords(&self, group: KeywordGroup) -> impl Iterator<Item = &str> + '_ {
        self.groups
            .get(group.index())
            .into_iter()
            .flat_map(|entry| entry.keywords.iter().map(|word| &**word))
    }

    /// All groups in index order.
    pub fn groups(&self) -> impl Iterator<Item = KeywordGroup> + '_ {
        (0..self.groups.len()).filter_map(KeywordGroup::from_index)
    }

    /// Total number of keywords across all groups.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Append a group without validation.
    ///
    /// Callers guarantee unique, reachable words and a group count that
    /// fits in `u16`.
    fn push_group<'w>(&mut self, name: &str, keywords: impl Iterator<Item = &'w str>) {
        let Some(group) = KeywordGroup::from_index(self.groups.len()) else {
            return;
        };
        let keywords: Vec<Box<str>> = keywords.map(Box::from).collect();
        for word in &keywords {
            self.words.insert(word.clone(), group);
        }
        self.groups.push(GroupEntry {
            name: name.into(),
            keywords,
        });
    }
}

/// Validating builder for [`KeywordTable`].
///
/// Each [`group`](Self::group) call is all-or-nothing: a rejected group
/// leaves the builder unchanged.
#[derive(Debug, Default)]
pub struct KeywordTableBuilder {
    table: KeywordTable,
    names: FxHashSet<Box<str>>,
}

impl KeywordTableBuilder {
    /// Add a named keyword group, returning its index.
    pub fn group<I, S>(&mut self, name: &str, keywords: I) -> Result<KeywordGroup, TableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.names.contains(name) {
            return Err(TableError::DuplicateGroup {
                name: name.to_owned(),
            });
        }
        let group = KeywordGroup::from_index(self.table.groups.len()).ok_or(
            TableError::TooManyGroups {
                limit: usize::from(u16::MAX) + 1,
            },
        )?;

        let keywords: Vec<S> = keywords.into_iter().collect();
        let mut seen = FxHashSet::default();
        for word in &keywords {
            let word = word.as_ref();
            if !is_reachable(word) {
                return Err(TableError::UnreachableKeyword {
                    keyword: word.to_owned(),
                    group: name.to_owned(),
                });
            }
            let first = match self.table.words.get(word) {
                Some(&existing) => self.table.group_name(existing),
                None if !seen.insert(word) => Some(name),
                None => None,
            };
            if let Some(first) = first {
                return Err(TableError::DuplicateKeyword {
                    keyword: word.to_owned(),
                    first: first.to_owned(),
                    second: name.to_owned(),
                });
            }
        }

        self.table
            .push_group(name, keywords.iter().map(AsRef::as_ref));
        self.names.insert(name.into());
        Ok(group)
    }

    /// Finish the table.
    pub fn build(self) -> KeywordTable {
        self.table
    }
}

/// Could `word` ever come out of the scanner as one plain token?
fn is_reachable(word: &str) -> bool {
    !word.is_empty() && !word.chars().any(|ch| is_delimiter(ch) || is_quote(ch))
}

/// Keyword table construction failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("keyword `{keyword}` is listed in both `{first}` and `{second}`")]
    DuplicateKeyword {
        keyword: String,
        first: String,
        second: String,
    },
    #[error("keyword group `{name}` is defined twice")]
    DuplicateGroup { name: String },
    #[error(
        "keyword `{keyword:?}` in group `{group}` can never match: \
         keywords must be non-empty and contain no whitespace, quotes or symbols"
    )]
    UnreachableKeyword { keyword: String, group: String },
    #[error("too many keyword groups (limit {limit})")]
    TooManyGroups { limit: usize },
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
