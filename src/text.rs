//! Cell text and the per-cell layout overrides.
//!
//! A [`Txt`] is the unit of content in a table: the title, every header and
//! every data cell. Besides the raw text it may carry an [`Alignment`] and a
//! [`Wrapping`] that take precedence over the owning column's defaults.

use std::fmt;

/// Horizontal component of an [`Alignment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlign {
    /// Pad on the right.
    #[default]
    Left,
    /// Split padding, the odd column goes to the right.
    Center,
    /// Pad on the left.
    Right,
}

/// Vertical component of an [`Alignment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlign {
    /// Blank lines are appended after the content.
    #[default]
    Top,
    /// Blank lines are split, the odd line goes after the content.
    Middle,
    /// Blank lines are prepended before the content.
    Bottom,
}

/// Placement of cell content inside its block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Alignment {
    /// Combine a vertical and a horizontal component.
    #[must_use]
    pub const fn new(vertical: VerticalAlign, horizontal: HorizontalAlign) -> Self {
        match (vertical, horizontal) {
            (VerticalAlign::Top, HorizontalAlign::Left) => Self::TopLeft,
            (VerticalAlign::Top, HorizontalAlign::Center) => Self::TopCenter,
            (VerticalAlign::Top, HorizontalAlign::Right) => Self::TopRight,
            (VerticalAlign::Middle, HorizontalAlign::Left) => Self::MiddleLeft,
            (VerticalAlign::Middle, HorizontalAlign::Center) => Self::MiddleCenter,
            (VerticalAlign::Middle, HorizontalAlign::Right) => Self::MiddleRight,
            (VerticalAlign::Bottom, HorizontalAlign::Left) => Self::BottomLeft,
            (VerticalAlign::Bottom, HorizontalAlign::Center) => Self::BottomCenter,
            (VerticalAlign::Bottom, HorizontalAlign::Right) => Self::BottomRight,
        }
    }

    /// The horizontal component.
    #[must_use]
    pub const fn horizontal(self) -> HorizontalAlign {
        match self {
            Self::TopLeft | Self::MiddleLeft | Self::BottomLeft => HorizontalAlign::Left,
            Self::TopCenter | Self::MiddleCenter | Self::BottomCenter => HorizontalAlign::Center,
            Self::TopRight | Self::MiddleRight | Self::BottomRight => HorizontalAlign::Right,
        }
    }

    /// The vertical component.
    #[must_use]
    pub const fn vertical(self) -> VerticalAlign {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => VerticalAlign::Top,
            Self::MiddleLeft | Self::MiddleCenter | Self::MiddleRight => VerticalAlign::Middle,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => VerticalAlign::Bottom,
        }
    }
}

/// How text is broken into lines of a given width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Wrapping {
    /// Break at whitespace, force-splitting words longer than the width.
    #[default]
    Word,
    /// Break at any unit, preferring a nearby whitespace.
    Char,
    /// Keep one line per paragraph, shortened with an ellipsis.
    Cut,
}

/// Table text: content plus optional layout overrides.
///
/// Equality and hashing cover the text and both overrides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Txt {
    text: String,
    alignment: Option<Alignment>,
    wrapping: Option<Wrapping>,
}

impl Txt {
    /// Create text without overrides.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: None,
            wrapping: None,
        }
    }

    /// Override the column alignment for this text.
    #[must_use]
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Override the column wrapping for this text.
    #[must_use]
    pub fn wrap(mut self, wrapping: Wrapping) -> Self {
        self.wrapping = Some(wrapping);
        self
    }

    /// The raw text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The alignment override, if any.
    #[must_use]
    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    /// The wrapping override, if any.
    #[must_use]
    pub fn wrapping(&self) -> Option<Wrapping> {
        self.wrapping
    }

    /// Whether the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Txt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Txt {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Txt {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&String> for Txt {
    fn from(value: &String) -> Self {
        Self::new(value.clone())
    }
}
