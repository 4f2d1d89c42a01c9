//! Spine color palette and the next-color policy

use super::Book;

/// Brown shades used for spines, in assignment order
pub const DEFAULT_BOOK_COLORS: [&str; 10] = [
    "#8D6E63", "#795548", "#6D4C41", "#5D4037", "#A1887F", "#9F744F", "#C8A285", "#855E42",
    "#8B572A", "#AB9186",
];

/// A fixed, ordered, non-empty list of spine colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Build a palette; `None` if `colors` is empty
    pub fn new<I, S>(colors: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false, construction rejects empty palettes
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn contains(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Color for the next book added after `existing`.
    ///
    /// The first palette entry no existing book uses wins. Once every entry
    /// is taken the palette is indexed by collection length, wrapping.
    pub fn next_color(&self, existing: &[Book]) -> &str {
        self.colors
            .iter()
            .find(|color| !existing.iter().any(|book| &book.color == *color))
            .unwrap_or_else(|| &self.colors[existing.len() % self.colors.len()])
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_BOOK_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}
