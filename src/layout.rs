//! Cell layout: wrapping plus horizontal and vertical alignment.
//!
//! [`CellLayout::lay_out`] turns one piece of text into a *block*: lines of
//! exactly the column width. [`PlacedBlock`] then positions a block inside
//! the row height, producing the blank lines above or below it on demand.
//!
//! # Example
//!
//! ```
//! use framegrid::layout::CellLayout;
//! use framegrid::text::Alignment;
//!
//! let block = CellLayout::new(6).alignment(Alignment::TopRight).lay_out("a bc");
//! assert_eq!(block, vec!["  a bc"]);
//! ```

use crate::cells::{clip, unit_len};
use crate::text::{Alignment, HorizontalAlign, VerticalAlign, Wrapping};
use crate::trim::Trimming;
use crate::wrap::wrap;

/// Everything needed to lay out one cell's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellLayout {
    /// Resolved column width.
    pub width: usize,
    /// Effective alignment (cell override, else column default).
    pub alignment: Alignment,
    /// Effective wrapping (cell override, else column default).
    pub wrapping: Wrapping,
    /// Trimming applied before wrapping.
    pub trimming: Trimming,
    /// Padding character.
    pub fill: char,
}

impl CellLayout {
    /// Top-left aligned, word wrapped, untrimmed, space filled.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            alignment: Alignment::default(),
            wrapping: Wrapping::default(),
            trimming: Trimming::NONE,
            fill: ' ',
        }
    }

    /// Set the alignment.
    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the wrapping.
    #[must_use]
    pub fn wrapping(mut self, wrapping: Wrapping) -> Self {
        self.wrapping = wrapping;
        self
    }

    /// Set the trimming.
    #[must_use]
    pub fn trimming(mut self, trimming: Trimming) -> Self {
        self.trimming = trimming;
        self
    }

    /// Set the padding character.
    #[must_use]
    pub fn fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    /// Trim, wrap and pad `text` into lines of exactly `width` units.
    ///
    /// The block always holds at least one line.
    #[must_use]
    pub fn lay_out(&self, text: &str) -> Vec<String> {
        let trimmed = self.trimming.apply(text);
        wrap(&trimmed, self.width, self.wrapping)
            .iter()
            .map(|line| pad_line(line, self.width, self.alignment.horizontal(), self.fill))
            .collect()
    }
}

/// Pad (or clip) `line` to exactly `width` units.
#[must_use]
pub fn pad_line(line: &str, width: usize, align: HorizontalAlign, fill: char) -> String {
    let line = clip(line, width);
    let padding = width - unit_len(line);
    let (left, right) = match align {
        HorizontalAlign::Left => (0, padding),
        HorizontalAlign::Right => (padding, 0),
        HorizontalAlign::Center => (padding / 2, padding - padding / 2),
    };

    let mut out = String::with_capacity(line.len() + padding * fill.len_utf8());
    out.extend(std::iter::repeat_n(fill, left));
    out.push_str(line);
    out.extend(std::iter::repeat_n(fill, right));
    out
}

/// Blank lines `(before, after)` needed to grow `lines` to `height`.
#[must_use]
pub fn vertical_padding(lines: usize, height: usize, align: VerticalAlign) -> (usize, usize) {
    let extra = height.saturating_sub(lines);
    match align {
        VerticalAlign::Top => (0, extra),
        VerticalAlign::Bottom => (extra, 0),
        VerticalAlign::Middle => (extra / 2, extra - extra / 2),
    }
}

/// A laid-out block positioned inside a row.
#[derive(Debug, Clone, Copy)]
pub struct PlacedBlock<'a> {
    lines: &'a [String],
    top: usize,
    width: usize,
    fill: char,
}

impl<'a> PlacedBlock<'a> {
    /// Place `lines` within a row of `height` lines.
    #[must_use]
    pub fn new(
        lines: &'a [String],
        height: usize,
        align: VerticalAlign,
        width: usize,
        fill: char,
    ) -> Self {
        let (top, _) = vertical_padding(lines.len(), height, align);
        Self {
            lines,
            top,
            width,
            fill,
        }
    }

    /// Append line `index` of the placed block to `out`.
    pub fn write_line(&self, index: usize, out: &mut String) {
        match index.checked_sub(self.top).and_then(|i| self.lines.get(i)) {
            Some(line) => out.push_str(line),
            None => out.extend(std::iter::repeat_n(self.fill, self.width)),
        }
    }
}

/// Grow `block` to `height` lines with blank, full-width lines.
#[must_use]
pub fn align_block(
    block: &[String],
    height: usize,
    align: VerticalAlign,
    width: usize,
    fill: char,
) -> Vec<String> {
    let height = height.max(block.len());
    let placed = PlacedBlock::new(block, height, align, width, fill);
    (0..height)
        .map(|i| {
            let mut line = String::new();
            placed.write_line(i, &mut line);
            line
        })
        .collect()
}
