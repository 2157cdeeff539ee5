//! Display categories for scanned spans.

/// Index of a keyword group inside a [`KeywordTable`](crate::KeywordTable).
///
/// Groups are numbered in the order they were added. The built-in table
/// defines [`BLUE`](Self::BLUE), [`MAGENTA`](Self::MAGENTA) and
/// [`GREEN`](Self::GREEN); custom tables may define any number up to
/// `u16::MAX + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeywordGroup(u16);

impl KeywordGroup {
    /// Declaration keywords (`class`).
    pub const BLUE: Self = KeywordGroup(0);
    /// Module keywords (`import`, `from`, `export`).
    pub const MAGENTA: Self = KeywordGroup(1);
    /// Known type names (`Component`, `TestComponent`).
    pub const GREEN: Self = KeywordGroup(2);

    #[inline]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Group for position `index`, if it fits.
    pub(crate) fn from_index(index: usize) -> Option<Self> {
        u16::try_from(index).ok().map(KeywordGroup)
    }
}

/// Classification outcome of a span; decides its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Unclassified text, including whitespace and symbols.
    Default,
    /// A word found in the keyword table.
    Keyword(KeywordGroup),
    /// A quoted literal, quotes included.
    StringLiteral,
}

impl Category {
    #[inline]
    pub fn is_default(self) -> bool {
        self == Category::Default
    }
}
