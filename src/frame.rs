//! Frame glyphs and frame options.
//!
//! A [`FrameStyle`] holds the 15 strings a frame is drawn from. Glyphs that
//! stack on top of each other in the output (for example every string drawn
//! at the left edge) must have the same character count, and the three
//! horizontal fill glyphs must be exactly one character, otherwise the frame
//! would not line up. [`FrameStyle::new`] checks this and is a `const fn`, so
//! the built-in presets are verified at compile time.
//!
//! Which parts of the frame are drawn is controlled by [`FrameOptions`].

use std::fmt;

use bitflags::bitflags;

use crate::cells::glyph_len;

/// Slot of a glyph within a [`FrameStyle`], in array order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// `┌`
    TopLeft,
    /// `┐`
    TopRight,
    /// `└`
    BottomLeft,
    /// `┘`
    BottomRight,
    /// Fill of the top and bottom rules.
    OuterHorizontal,
    /// Fill of the title, header and row rules.
    InsideHorizontal,
    /// Fill of the rule between non-contiguous row ranges.
    GapHorizontal,
    /// Left edge of content lines.
    LeftVertical,
    /// Separator between cells of a content line.
    InsideVertical,
    /// Right edge of content lines.
    RightVertical,
    /// `┬`
    TopJunction,
    /// `┼`
    InsideJunction,
    /// `┴`
    BottomJunction,
    /// `├`
    InsideLeft,
    /// `┤`
    InsideRight,
}

impl Glyph {
    /// Every slot, in array order.
    pub const ALL: [Self; 15] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::OuterHorizontal,
        Self::InsideHorizontal,
        Self::GapHorizontal,
        Self::LeftVertical,
        Self::InsideVertical,
        Self::RightVertical,
        Self::TopJunction,
        Self::InsideJunction,
        Self::BottomJunction,
        Self::InsideLeft,
        Self::InsideRight,
    ];

    /// Snake case name of the slot.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "top_left",
            Self::TopRight => "top_right",
            Self::BottomLeft => "bottom_left",
            Self::BottomRight => "bottom_right",
            Self::OuterHorizontal => "outer_horizontal",
            Self::InsideHorizontal => "inside_horizontal",
            Self::GapHorizontal => "gap_horizontal",
            Self::LeftVertical => "left_vertical",
            Self::InsideVertical => "inside_vertical",
            Self::RightVertical => "right_vertical",
            Self::TopJunction => "top_junction",
            Self::InsideJunction => "inside_junction",
            Self::BottomJunction => "bottom_junction",
            Self::InsideLeft => "inside_left",
            Self::InsideRight => "inside_right",
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fill glyphs, each exactly one character.
const SINGLE_GLYPHS: [Glyph; 3] = [
    Glyph::OuterHorizontal,
    Glyph::InsideHorizontal,
    Glyph::GapHorizontal,
];

/// Glyphs drawn in the same columns; the first of each group is the reference.
const ALIGNED_GROUPS: [[Glyph; 4]; 3] = [
    [
        Glyph::TopLeft,
        Glyph::BottomLeft,
        Glyph::LeftVertical,
        Glyph::InsideLeft,
    ],
    [
        Glyph::TopRight,
        Glyph::BottomRight,
        Glyph::RightVertical,
        Glyph::InsideRight,
    ],
    [
        Glyph::TopJunction,
        Glyph::InsideJunction,
        Glyph::BottomJunction,
        Glyph::InsideVertical,
    ],
];

/// Error for a [`FrameStyle`] whose glyphs would not line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleError {
    /// Two glyphs drawn in the same columns differ in length.
    Mismatch {
        /// Offending glyph.
        glyph: Glyph,
        /// Glyph it must match.
        expected: Glyph,
        /// Characters in `glyph`.
        glyph_units: usize,
        /// Characters in `expected`.
        expected_units: usize,
    },
    /// A fill glyph is not exactly one character.
    NotSingle {
        /// Offending glyph.
        glyph: Glyph,
        /// Characters found.
        units: usize,
    },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch {
                glyph,
                expected,
                glyph_units,
                expected_units,
            } => write!(
                f,
                "frame glyph {glyph} has {glyph_units} characters but {expected} has {expected_units}"
            ),
            Self::NotSingle { glyph, units } => {
                write!(f, "frame glyph {glyph} must be one character, found {units}")
            }
        }
    }
}

impl std::error::Error for StyleError {}

const fn check(glyphs: &[&str; 15]) -> Result<(), StyleError> {
    let mut i = 0;
    while i < SINGLE_GLYPHS.len() {
        let glyph = SINGLE_GLYPHS[i];
        let units = glyph_len(glyphs[glyph as usize]);
        if units != 1 {
            return Err(StyleError::NotSingle { glyph, units });
        }
        i += 1;
    }

    let mut g = 0;
    while g < ALIGNED_GROUPS.len() {
        let expected = ALIGNED_GROUPS[g][0];
        let expected_units = glyph_len(glyphs[expected as usize]);
        let mut j = 1;
        while j < ALIGNED_GROUPS[g].len() {
            let glyph = ALIGNED_GROUPS[g][j];
            let glyph_units = glyph_len(glyphs[glyph as usize]);
            if glyph_units != expected_units {
                return Err(StyleError::Mismatch {
                    glyph,
                    expected,
                    glyph_units,
                    expected_units,
                });
            }
            j += 1;
        }
        g += 1;
    }
    Ok(())
}

/// Border glyphs of a frame.
///
/// Glyphs are given in [`Glyph::ALL`] order.
///
/// ```
/// use framegrid::frame::{FrameStyle, Glyph};
///
/// let stars = FrameStyle::new([
///     "*", "*", "*", "*",
///     "*", "-", "~",
///     "*", ":", "*",
///     "*", "+", "*",
///     "*", "*",
/// ])
/// .unwrap();
/// assert_eq!(stars.glyph(Glyph::InsideJunction), "+");
///
/// assert!(FrameStyle::new(["+"; 15]).is_ok());
/// assert!(FrameStyle::new(["=="; 15]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameStyle<'a> {
    glyphs: [&'a str; 15],
}

impl<'a> FrameStyle<'a> {
    /// Validate and build a style.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError`] if a fill glyph is not one character or two
    /// glyphs drawn in the same columns differ in length.
    pub const fn new(glyphs: [&'a str; 15]) -> Result<Self, StyleError> {
        match check(&glyphs) {
            Ok(()) => Ok(Self { glyphs }),
            Err(e) => Err(e),
        }
    }

    #[cfg(test)]
    pub(crate) const fn unchecked(glyphs: [&'a str; 15]) -> Self {
        Self { glyphs }
    }

    /// Replace one glyph, validating the result.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError`] if the new glyph breaks alignment.
    pub fn with_glyph(self, glyph: Glyph, value: &'a str) -> Result<Self, StyleError> {
        let mut glyphs = self.glyphs;
        glyphs[glyph as usize] = value;
        Self::new(glyphs)
    }

    /// Re-check the alignment rules.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub const fn validate(&self) -> Result<(), StyleError> {
        check(&self.glyphs)
    }

    /// The glyph in `slot`.
    #[must_use]
    pub const fn glyph(&self, slot: Glyph) -> &'a str {
        self.glyphs[slot as usize]
    }

    /// All glyphs in [`Glyph::ALL`] order.
    #[must_use]
    pub const fn glyphs(&self) -> &[&'a str; 15] {
        &self.glyphs
    }

    /// Characters taken by the left edge.
    #[must_use]
    pub const fn left_len(&self) -> usize {
        glyph_len(self.glyph(Glyph::LeftVertical))
    }

    /// Characters taken by each column separator.
    #[must_use]
    pub const fn junction_len(&self) -> usize {
        glyph_len(self.glyph(Glyph::InsideVertical))
    }

    /// Characters taken by the right edge.
    #[must_use]
    pub const fn right_len(&self) -> usize {
        glyph_len(self.glyph(Glyph::RightVertical))
    }

    /// Glyphs of a horizontal rule.
    #[must_use]
    pub const fn rule(&self, kind: RuleKind) -> RuleGlyphs<'a> {
        let (left, fill, junction, right) = match kind {
            RuleKind::Top => (
                Glyph::TopLeft,
                Glyph::OuterHorizontal,
                Glyph::TopJunction,
                Glyph::TopRight,
            ),
            RuleKind::TitleDivider => (
                Glyph::InsideLeft,
                Glyph::InsideHorizontal,
                Glyph::TopJunction,
                Glyph::InsideRight,
            ),
            RuleKind::HeaderDivider | RuleKind::RowDivider => (
                Glyph::InsideLeft,
                Glyph::InsideHorizontal,
                Glyph::InsideJunction,
                Glyph::InsideRight,
            ),
            RuleKind::Gap => (
                Glyph::InsideLeft,
                Glyph::GapHorizontal,
                Glyph::InsideJunction,
                Glyph::InsideRight,
            ),
            RuleKind::Bottom => (
                Glyph::BottomLeft,
                Glyph::OuterHorizontal,
                Glyph::BottomJunction,
                Glyph::BottomRight,
            ),
        };
        RuleGlyphs {
            left: self.glyph(left),
            fill: self.glyph(fill),
            junction: self.glyph(junction),
            right: self.glyph(right),
        }
    }
}

impl Default for FrameStyle<'_> {
    fn default() -> Self {
        ASCII
    }
}

/// Kind of horizontal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Above everything.
    Top,
    /// Between the title and the first column section.
    TitleDivider,
    /// Between the header block and the data rows.
    HeaderDivider,
    /// Between two adjacent data rows.
    RowDivider,
    /// Between two non-contiguous row ranges.
    Gap,
    /// Below everything.
    Bottom,
}

/// The four glyphs a rule is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleGlyphs<'a> {
    /// Left end.
    pub left: &'a str,
    /// One character repeated over each column width.
    pub fill: &'a str,
    /// Between two columns.
    pub junction: &'a str,
    /// Right end.
    pub right: &'a str,
}

bitflags! {
    /// Parts of the frame to draw.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FrameOptions: u8 {
        /// Top rule.
        const TOP               = 1 << 0;
        /// Bottom rule.
        const BOTTOM            = 1 << 1;
        /// Left edge of every line.
        const LEFT              = 1 << 2;
        /// Right edge of every line.
        const RIGHT             = 1 << 3;
        /// Title, header and row dividers.
        const INSIDE_HORIZONTAL = 1 << 4;
        /// Separators between columns.
        const INSIDE_VERTICAL   = 1 << 5;
    }
}

impl FrameOptions {
    /// Every part.
    pub const ALL: Self = Self::all();
    /// No frame at all.
    pub const NONE: Self = Self::empty();
    /// Inner dividers and separators only.
    pub const INSIDE: Self = Self::INSIDE_HORIZONTAL.union(Self::INSIDE_VERTICAL);
    /// Outer box only.
    pub const OUTSIDE: Self = Self::TOP
        .union(Self::BOTTOM)
        .union(Self::LEFT)
        .union(Self::RIGHT);
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self::ALL
    }
}

// ============================================================================
// Built-in Frame Styles
// ============================================================================

const fn preset(glyphs: [&'static str; 15]) -> FrameStyle<'static> {
    match FrameStyle::new(glyphs) {
        Ok(style) => style,
        Err(_) => panic!("built-in frame style is misaligned"),
    }
}

/// Plain ASCII frame (default).
pub const ASCII: FrameStyle<'static> = preset([
    "+", "+", "+", "+", // corners
    "-", "-", "~", // outer, inside, gap
    "|", "|", "|", // verticals
    "+", "+", "+", // junctions
    "+", "+", // inside edges
]);

/// Unicode single line frame.
pub const SINGLE: FrameStyle<'static> = preset([
    "┌", "┐", "└", "┘", //
    "─", "─", "┄", //
    "│", "│", "│", //
    "┬", "┼", "┴", //
    "├", "┤",
]);

/// Unicode single line frame with rounded corners.
pub const ROUNDED: FrameStyle<'static> = preset([
    "╭", "╮", "╰", "╯", //
    "─", "─", "┄", //
    "│", "│", "│", //
    "┬", "┼", "┴", //
    "├", "┤",
]);

/// Unicode double line frame.
pub const DOUBLE: FrameStyle<'static> = preset([
    "╔", "╗", "╚", "╝", //
    "═", "═", "╌", //
    "║", "║", "║", //
    "╦", "╬", "╩", //
    "╠", "╣",
]);

/// Single line frame with one space of padding around every cell.
pub const PADDED: FrameStyle<'static> = preset([
    "┌─", "─┐", "└─", "─┘", //
    "─", "─", "┄", //
    "│ ", " │ ", " │", //
    "─┬─", "─┼─", "─┴─", //
    "├─", "─┤",
]);

/// Names accepted by [`get_style`].
pub const STYLE_NAMES: [&str; 5] = ["ascii", "single", "rounded", "double", "padded"];

/// Get a frame style by name (case-insensitive).
#[must_use]
pub fn get_style(name: &str) -> Option<&'static FrameStyle<'static>> {
    match name.to_lowercase().as_str() {
        "ascii" => Some(&ASCII),
        "single" => Some(&SINGLE),
        "rounded" => Some(&ROUNDED),
        "double" => Some(&DOUBLE),
        "padded" => Some(&PADDED),
        _ => None,
    }
}
