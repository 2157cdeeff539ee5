//! Themes: a keyword table paired with its palette.
//!
//! A [`Theme`] is built once and then only read. Hosts that are happy with
//! the built-in colors can use [`Theme::builtin_shared`], which builds the
//! built-in theme on first use behind a [`OnceLock`] and hands out the same
//! instance afterwards, from any thread.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "default": "#EEEEEE",
//!   "string": "#CF9279",
//!   "groups": [
//!     { "name": "blue", "color": "#3B99C9", "keywords": ["class"] }
//!   ]
//! }
//! ```

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::Category;
use crate::color::Rgb;
use crate::keywords::{KeywordTable, TableError};
use crate::palette::Palette;

/// Keyword table plus palette.
#[derive(Clone, Debug)]
pub struct Theme {
    keywords: KeywordTable,
    palette: Palette,
}

impl Theme {
    pub fn new(keywords: KeywordTable, palette: Palette) -> Self {
        Theme { keywords, palette }
    }

    /// The fixed built-in theme.
    pub fn builtin() -> Self {
        Theme::new(KeywordTable::builtin(), Palette::builtin())
    }

    /// Process-wide built-in theme, built on first call.
    pub fn builtin_shared() -> &'static Theme {
        static BUILTIN: OnceLock<Theme> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            debug!("building built-in theme");
            Theme::builtin()
        })
    }

    /// Build a theme from its configuration.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let mut builder = KeywordTable::builder();
        let mut palette = Palette::new(config.default, config.string);
        for group in &config.groups {
            builder.group(&group.name, &group.keywords)?;
            palette.push_group(group.color);
        }
        let keywords = builder.build();
        debug!(
            groups = keywords.group_count(),
            keywords = keywords.len(),
            "theme built from config"
        );
        Ok(Theme::new(keywords, palette))
    }

    /// Parse a JSON theme document.
    pub fn from_json(text: &str) -> Result<Self, ThemeError> {
        let config: ThemeConfig = serde_json::from_str(text)?;
        Theme::from_config(&config)
    }

    /// Configuration that rebuilds this theme.
    pub fn to_config(&self) -> ThemeConfig {
        let groups = self
            .keywords
            .groups()
            .map(|group| GroupConfig {
                name: self.keywords.group_name(group).unwrap_or_default().to_owned(),
                color: self.palette.color_of(Category::Keyword(group)),
                keywords: self.keywords.keywords(group).map(str::to_owned).collect(),
            })
            .collect();
        ThemeConfig {
            default: self.palette.default_color(),
            string: self.palette.string_color(),
            groups,
        }
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Classify one token against this theme's keyword table.
    #[inline]
    pub fn classify(&self, text: &str) -> Category {
        self.keywords.classify(text)
    }

    /// Display color of `category`.
    #[inline]
    pub fn color_of(&self, category: Category) -> Rgb {
        self.palette.color_of(category)
    }

    /// Stable name of `category`: `default`, `string`, or the group name.
    pub fn category_name(&self, category: Category) -> &str {
        match category {
            Category::Default => "default",
            Category::StringLiteral => "string",
            Category::Keyword(group) => self.keywords.group_name(group).unwrap_or("keyword"),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::builtin()
    }
}

/// Serializable theme description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Color of unclassified text.
    pub default: Rgb,
    /// Color of string literals.
    pub string: Rgb,
    /// Keyword groups; position decides the group index.
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

/// One keyword group in a [`ThemeConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
    pub name: String,
    pub color: Rgb,
    pub keywords: Vec<String>,
}

/// Theme loading failure.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Table(#[from] TableError),
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
