//! Cell styling: colors, text attributes, and the styled cell itself.

/// The color palette available to cells. A small enumerated set mapping
/// directly onto the standard terminal colors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Color {
    Black,
    DarkGrey,
    Red,
    DarkRed,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
    Blue,
    DarkBlue,
    Magenta,
    DarkMagenta,
    Cyan,
    DarkCyan,
    White,
    Grey,
}

/// A single text attribute.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Attr {
    Bold,
    CrossedOut,
    Dim,
    Italic,
    Reverse,
    Underline,
}

/// A set of active text attributes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct AttrSet {
    pub bold: bool,
    pub crossedout: bool,
    pub dim: bool,
    pub italic: bool,
    pub reverse: bool,
    pub underline: bool,
}

impl AttrSet {
    /// Construct a set with a single attribute turned on.
    pub fn new(attr: Attr) -> Self {
        Self::default().with(attr)
    }

    /// Is this attribute set empty?
    pub fn is_empty(&self) -> bool {
        !(self.bold
            || self.crossedout
            || self.dim
            || self.italic
            || self.reverse
            || self.underline)
    }

    /// A helper for progressive construction of attribute sets.
    pub fn with(mut self, attr: Attr) -> Self {
        match attr {
            Attr::Bold => self.bold = true,
            Attr::CrossedOut => self.crossedout = true,
            Attr::Dim => self.dim = true,
            Attr::Italic => self.italic = true,
            Attr::Reverse => self.reverse = true,
            Attr::Underline => self.underline = true,
        }
        self
    }
}

/// Visual attributes for a cell. Colors are optional per channel: a
/// `None` renders with the terminal's default for that channel.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: AttrSet,
}

impl Style {
    /// A style with only a foreground color.
    pub fn fg(fg: Color) -> Self {
        Self {
            fg: Some(fg),
            ..Self::default()
        }
    }

    /// A style with only a background color.
    pub fn bg(bg: Color) -> Self {
        Self {
            bg: Some(bg),
            ..Self::default()
        }
    }

    pub fn with_fg(mut self, fg: Color) -> Self {
        self.fg = Some(fg);
        self
    }

    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    pub fn with_attr(mut self, attr: Attr) -> Self {
        self.attrs = self.attrs.with(attr);
        self
    }

    /// Fill in any unset channel from `other`.
    pub fn or(&self, other: &Self) -> Self {
        Self {
            fg: self.fg.or(other.fg),
            bg: self.bg.or(other.bg),
            attrs: if self.attrs.is_empty() {
                other.attrs
            } else {
                self.attrs
            },
        }
    }
}

/// One cell of the character grid: a glyph plus its style. Equality is
/// structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    pub fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }

    /// An unwritten cell: the NUL glyph with no styling.
    pub fn blank() -> Self {
        Self {
            ch: '\0',
            style: Style::default(),
        }
    }

    /// True if this cell has never been written to.
    pub fn is_blank(&self) -> bool {
        self.ch == '\0'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attrset_builders() {
        let a = AttrSet::new(Attr::Bold).with(Attr::Underline);
        assert!(a.bold && a.underline);
        assert!(!a.italic);
        assert!(!a.is_empty());
        assert!(AttrSet::default().is_empty());
    }

    #[test]
    fn style_or() {
        let a = Style::fg(Color::Red);
        let b = Style::bg(Color::Blue).with_fg(Color::Green);
        let joined = a.or(&b);
        assert_eq!(joined.fg, Some(Color::Red));
        assert_eq!(joined.bg, Some(Color::Blue));
    }

    #[test]
    fn cell_blank() {
        assert!(Cell::blank().is_blank());
        assert!(!Cell::new('x', Style::default()).is_blank());
    }
}
