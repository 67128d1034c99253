//! Frame assembly.
//!
//! [`FrameAssembler`] receives the sections of a table in order (title,
//! header, rows) and remembers which section it drew last. The rule between
//! two sections is chosen from that transition, so callers never draw rules
//! themselves:
//!
//! | previous | next   | rule                          |
//! |----------|--------|-------------------------------|
//! | nothing  | any    | top (no junctions above title) |
//! | title    | header | title divider                 |
//! | title    | row    | title divider                 |
//! | header   | row    | header divider                |
//! | row      | row    | row divider, or gap           |
//! | any      | end    | bottom (no junctions below title) |
//!
//! Dividers between title, header and rows, gap rules included, are only
//! drawn with [`FrameOptions::INSIDE_HORIZONTAL`]. Every emitted line ends
//! with `\n`.

use std::fmt;

use crate::frame::{FrameOptions, FrameStyle, Glyph, RuleKind};
use crate::layout::PlacedBlock;
use crate::text::VerticalAlign;

/// Relation of a data row to the row drawn before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// The rows are neighbours in the table.
    #[default]
    Contiguous,
    /// Rows between them were skipped.
    Gap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Start,
    Title,
    Header,
    Rows,
}

/// Builds the text of a framed table, section by section.
#[derive(Debug)]
pub struct FrameAssembler<'a> {
    style: FrameStyle<'a>,
    options: FrameOptions,
    widths: Vec<usize>,
    section: Section,
    out: String,
    lines: usize,
}

impl<'a> FrameAssembler<'a> {
    /// Start a frame over visible columns of the given widths.
    #[must_use]
    pub fn new(style: FrameStyle<'a>, options: FrameOptions, widths: Vec<usize>) -> Self {
        Self {
            style,
            options,
            widths,
            section: Section::Start,
            out: String::new(),
            lines: 0,
        }
    }

    /// Width between the left and right edges.
    #[must_use]
    pub fn inner_width(&self) -> usize {
        let content: usize = self.widths.iter().sum();
        if self.options.contains(FrameOptions::INSIDE_VERTICAL) {
            content + self.widths.len().saturating_sub(1) * self.style.junction_len()
        } else {
            content
        }
    }

    /// Width of every emitted line.
    #[must_use]
    pub fn line_width(&self) -> usize {
        let mut width = self.inner_width();
        if self.options.contains(FrameOptions::LEFT) {
            width += self.style.left_len();
        }
        if self.options.contains(FrameOptions::RIGHT) {
            width += self.style.right_len();
        }
        width
    }

    /// Lines emitted so far.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines
    }

    /// Draw title lines spanning all columns.
    ///
    /// Each line must already be [`inner_width`](Self::inner_width) wide.
    pub fn title(&mut self, lines: &[String]) {
        if self.section == Section::Start && self.options.contains(FrameOptions::TOP) {
            self.rule(RuleKind::Top, false);
        }
        for line in lines {
            self.open_line(Glyph::LeftVertical);
            self.out.push_str(line);
            self.close_line(Glyph::RightVertical);
        }
        self.section = Section::Title;
    }

    /// Draw the header block.
    pub fn header(&mut self, cells: &[PlacedBlock<'_>], height: usize) {
        self.enter_columns();
        self.content(cells, height);
        self.section = Section::Header;
    }

    /// Draw one data row.
    pub fn row(&mut self, cells: &[PlacedBlock<'_>], height: usize, boundary: Boundary) {
        match (self.section, boundary) {
            (Section::Rows, _) => {
                if self.options.contains(FrameOptions::INSIDE_HORIZONTAL) {
                    let kind = match boundary {
                        Boundary::Contiguous => RuleKind::RowDivider,
                        Boundary::Gap => RuleKind::Gap,
                    };
                    self.rule(kind, true);
                }
            }
            (Section::Header, _) => {
                if self.options.contains(FrameOptions::INSIDE_HORIZONTAL) {
                    self.rule(RuleKind::HeaderDivider, true);
                }
            }
            _ => self.enter_columns(),
        }
        self.content(cells, height);
        self.section = Section::Rows;
    }

    /// Close the frame and return the text.
    #[must_use]
    pub fn finish(mut self) -> String {
        if self.section == Section::Start && self.options.contains(FrameOptions::TOP) {
            self.rule(RuleKind::Top, true);
        }
        if self.options.contains(FrameOptions::BOTTOM) {
            self.rule(RuleKind::Bottom, self.section != Section::Title);
        }
        self.out
    }

    fn enter_columns(&mut self) {
        match self.section {
            Section::Start if self.options.contains(FrameOptions::TOP) => {
                self.rule(RuleKind::Top, true);
            }
            Section::Title if self.options.contains(FrameOptions::INSIDE_HORIZONTAL) => {
                self.rule(RuleKind::TitleDivider, true);
            }
            _ => {}
        }
    }

    fn rule(&mut self, kind: RuleKind, junctions: bool) {
        let glyphs = self.style.rule(kind);
        let inside = self.options.contains(FrameOptions::INSIDE_VERTICAL);

        if self.options.contains(FrameOptions::LEFT) {
            self.out.push_str(glyphs.left);
        }
        for (i, &width) in self.widths.iter().enumerate() {
            if i > 0 && inside {
                if junctions {
                    self.out.push_str(glyphs.junction);
                } else {
                    self.out.push_str(&glyphs.fill.repeat(self.style.junction_len()));
                }
            }
            self.out.push_str(&glyphs.fill.repeat(width));
        }
        if self.options.contains(FrameOptions::RIGHT) {
            self.out.push_str(glyphs.right);
        }
        self.out.push('\n');
        self.lines += 1;
    }

    fn content(&mut self, cells: &[PlacedBlock<'_>], height: usize) {
        debug_assert_eq!(cells.len(), self.widths.len());
        let inside = self.options.contains(FrameOptions::INSIDE_VERTICAL);
        for index in 0..height {
            self.open_line(Glyph::LeftVertical);
            for (i, cell) in cells.iter().enumerate() {
                if i > 0 && inside {
                    self.out.push_str(self.style.glyph(Glyph::InsideVertical));
                }
                cell.write_line(index, &mut self.out);
            }
            self.close_line(Glyph::RightVertical);
        }
    }

    fn open_line(&mut self, edge: Glyph) {
        if self.options.contains(FrameOptions::LEFT) {
            self.out.push_str(self.style.glyph(edge));
        }
    }

    fn close_line(&mut self, edge: Glyph) {
        if self.options.contains(FrameOptions::RIGHT) {
            self.out.push_str(self.style.glyph(edge));
        }
        self.out.push('\n');
        self.lines += 1;
    }
}

impl fmt::Display for FrameStyle<'_> {
    /// A sample frame: header, two rows and a gap.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blank = ["   ".to_string()];
        let cell = PlacedBlock::new(&blank, 1, VerticalAlign::Top, 3, ' ');
        let cells = [cell; 3];

        let mut frame = FrameAssembler::new(*self, FrameOptions::ALL, vec![3; 3]);
        frame.header(&cells, 1);
        frame.row(&cells, 1, Boundary::Contiguous);
        frame.row(&cells, 1, Boundary::Gap);
        f.write_str(frame.finish().trim_end_matches('\n'))
    }
}
