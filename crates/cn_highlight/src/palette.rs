//! Category → color mapping.

use crate::category::{Category, KeywordGroup};
use crate::color::Rgb;

/// Colors for every category a theme can produce.
///
/// A keyword group with no color of its own is drawn in the default color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    default: Rgb,
    string: Rgb,
    groups: Vec<Rgb>,
}

impl Palette {
    pub const DEFAULT_TEXT: Rgb = Rgb::new(0xEE, 0xEE, 0xEE);
    pub const BLUE: Rgb = Rgb::new(0x3B, 0x99, 0xC9);
    pub const MAGENTA: Rgb = Rgb::new(0xC6, 0x85, 0xBE);
    pub const GREEN: Rgb = Rgb::new(0x49, 0xC9, 0xB1);
    pub const STRING: Rgb = Rgb::new(0xCF, 0x92, 0x79);

    /// A palette with no keyword group colors yet.
    pub fn new(default: Rgb, string: Rgb) -> Self {
        Palette {
            default,
            string,
            groups: Vec::new(),
        }
    }

    /// Built-in colors, groups in [`KeywordGroup`] index order.
    pub fn builtin() -> Self {
        Palette {
            default: Self::DEFAULT_TEXT,
            string: Self::STRING,
            groups: vec![Self::BLUE, Self::MAGENTA, Self::GREEN],
        }
    }

    /// Append the color for the next keyword group.
    pub fn push_group(&mut self, color: Rgb) {
        self.groups.push(color);
    }

    pub fn default_color(&self) -> Rgb {
        self.default
    }

    pub fn string_color(&self) -> Rgb {
        self.string
    }

    /// Color assigned to `group`, if any.
    pub fn group_color(&self, group: KeywordGroup) -> Option<Rgb> {
        self.groups.get(group.index()).copied()
    }

    /// Resolve the display color of `category`.
    #[inline]
    pub fn color_of(&self, category: Category) -> Rgb {
        match category {
            Category::Default => self.default,
            Category::StringLiteral => self.string,
            Category::Keyword(group) => self.group_color(group).unwrap_or(self.default),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::builtin()
    }
}
