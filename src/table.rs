//! Tables and the render entry points.
//!
//! A [`Table`] owns an optional title, its [`Column`]s and the rows of
//! [`Txt`] cells. Rendering resolves column widths once (memoised on the
//! table), lays every cell out with [`CellLayout`] and streams the sections
//! through a [`FrameAssembler`].
//!
//! # Example
//!
//! ```
//! use framegrid::prelude::*;
//!
//! let table = Table::new()
//!     .with_column(Column::new("Col1").width(Width::Fixed(4)))
//!     .with_column(Column::new("Col2").width(Width::Fixed(4)).alignment(Alignment::TopRight))
//!     .with_row(["A", "B"]);
//!
//! assert_eq!(
//!     table.render().unwrap(),
//!     "+----+----+\n|Col1|Col2|\n+----+----+\n|A   |   B|\n+----+----+\n"
//! );
//! ```
//!
//! Rows may hold fewer cells than there are columns (the missing cells are
//! empty) or more (the surplus is never shown and never measured).

use std::borrow::Cow;
use std::fmt;
use std::ops::Range;
use std::rc::Rc;
use std::sync::{Arc, OnceLock};

use crate::assembler::{Boundary, FrameAssembler};
use crate::cache::{DEFAULT_CAPACITY, RenderCache};
use crate::cells::widest_line;
use crate::frame::{self, FrameOptions, FrameStyle, StyleError};
use crate::layout::{CellLayout, PlacedBlock};
use crate::text::{Alignment, Txt, Wrapping};
use crate::trim::Trimming;
use crate::width::{ColumnSample, Width, resolve_widths};

/// Whether a column's cells are worth memoising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentHint {
    /// Cells rarely repeat; layouts are never cached.
    #[default]
    Unique,
    /// Cells often repeat; layouts go through the render cache.
    Repetitive,
}

/// Column definition for a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header text.
    pub header: Option<Txt>,
    /// Width policy.
    pub width: Width,
    /// Default alignment of the column's cells.
    pub alignment: Alignment,
    /// Default wrapping of the column's cells.
    pub wrapping: Wrapping,
    /// Trimming applied to every cell before measuring.
    pub trimming: Trimming,
    /// Whether layouts are cached.
    pub content_hint: ContentHint,
    /// Padding character.
    pub fill: char,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            header: None,
            width: Width::Auto,
            alignment: Alignment::TopLeft,
            wrapping: Wrapping::Word,
            trimming: Trimming::NONE,
            content_hint: ContentHint::Unique,
            fill: ' ',
        }
    }
}

impl Column {
    /// Create a new column with a header.
    #[must_use]
    pub fn new(header: impl Into<Txt>) -> Self {
        Self {
            header: Some(header.into()),
            ..Self::default()
        }
    }

    /// Create a new column without a header.
    #[must_use]
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Set the header.
    #[must_use]
    pub fn header(mut self, header: impl Into<Txt>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the width policy.
    #[must_use]
    pub fn width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    /// Set the default alignment.
    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the default wrapping.
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

    /// Set the content hint.
    #[must_use]
    pub fn content_hint(mut self, hint: ContentHint) -> Self {
        self.content_hint = hint;
        self
    }

    /// Shorthand for [`ContentHint::Repetitive`].
    #[must_use]
    pub fn repetitive(self) -> Self {
        self.content_hint(ContentHint::Repetitive)
    }

    /// Set the padding character.
    #[must_use]
    pub fn fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    /// Layout of `txt` in this column at `width`.
    fn layout(&self, width: usize, txt: &Txt) -> CellLayout {
        CellLayout {
            width,
            alignment: txt.alignment().unwrap_or(self.alignment),
            wrapping: txt.wrapping().unwrap_or(self.wrapping),
            trimming: self.trimming,
            fill: self.fill,
        }
    }

    fn measure(&self, txt: &Txt) -> usize {
        widest_line(&self.trimming.apply(txt.text()))
    }
}

/// Labels the implicit line number column, given the absolute row index.
pub type LineLabel = Arc<dyn Fn(usize) -> Txt + Send + Sync>;

#[derive(Clone)]
struct LineNumbers {
    column: Column,
    label: LineLabel,
}

impl fmt::Debug for LineNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineNumbers")
            .field("column", &self.column)
            .finish_non_exhaustive()
    }
}

/// Ordered half-open row ranges selecting what to render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowRanges {
    ranges: Vec<Range<usize>>,
    suppress_gaps: bool,
}

impl RowRanges {
    /// Render the given ranges, in order.
    #[must_use]
    pub fn new(ranges: impl IntoIterator<Item = Range<usize>>) -> Self {
        Self {
            ranges: ranges.into_iter().collect(),
            suppress_gaps: false,
        }
    }

    /// Draw ordinary row dividers instead of gap rules between ranges.
    #[must_use]
    pub fn suppress_gaps(mut self) -> Self {
        self.suppress_gaps = true;
        self
    }

    /// The ranges.
    #[must_use]
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Whether gap rules are suppressed.
    #[must_use]
    pub fn gaps_suppressed(&self) -> bool {
        self.suppress_gaps
    }

    fn check(&self, rows: usize) -> Result<(), RenderError> {
        for range in &self.ranges {
            if range.start > range.end {
                return Err(RenderError::InvertedRange {
                    range: range.clone(),
                });
            }
            if range.end > rows {
                return Err(RenderError::RangeOutOfBounds {
                    range: range.clone(),
                    rows,
                });
            }
        }
        Ok(())
    }
}

impl From<Vec<Range<usize>>> for RowRanges {
    fn from(ranges: Vec<Range<usize>>) -> Self {
        Self::new(ranges)
    }
}

impl FromIterator<Range<usize>> for RowRanges {
    fn from_iter<I: IntoIterator<Item = Range<usize>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Error returned when a table cannot be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The frame style is misaligned.
    Style(StyleError),
    /// A row range ends past the last row.
    RangeOutOfBounds {
        /// Offending range.
        range: Range<usize>,
        /// Rows in the table.
        rows: usize,
    },
    /// A row range starts after it ends.
    InvertedRange {
        /// Offending range.
        range: Range<usize>,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Style(e) => write!(f, "invalid frame style: {e}"),
            Self::RangeOutOfBounds { range, rows } => write!(
                f,
                "row range {}..{} is out of bounds for a table of {rows} rows",
                range.start, range.end
            ),
            Self::InvertedRange { range } => {
                write!(f, "row range {}..{} starts after it ends", range.start, range.end)
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Style(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StyleError> for RenderError {
    fn from(err: StyleError) -> Self {
        Self::Style(err)
    }
}

/// A cell laid out for one render.
struct LaidOut {
    lines: Rc<[String]>,
    layout: CellLayout,
}

/// A titled grid of text cells.
#[derive(Debug, Clone)]
pub struct Table {
    title: Option<Txt>,
    columns: Vec<Column>,
    rows: Vec<Vec<Txt>>,
    style: FrameStyle<'static>,
    options: FrameOptions,
    line_numbers: Option<LineNumbers>,
    cache_capacity: usize,
    /// Resolved widths of the layout columns (line numbers first).
    widths: OnceLock<Vec<Option<usize>>>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            title: None,
            columns: Vec::new(),
            rows: Vec::new(),
            style: frame::ASCII,
            options: FrameOptions::ALL,
            line_numbers: None,
            cache_capacity: DEFAULT_CAPACITY,
            widths: OnceLock::new(),
        }
    }
}

impl Table {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<Txt>) -> Self {
        self.title = Some(title.into());
        self.widths = OnceLock::new();
        self
    }

    /// Add a column.
    #[must_use]
    pub fn with_column(mut self, column: Column) -> Self {
        self.add_column(column);
        self
    }

    /// Add columns.
    #[must_use]
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        for column in columns {
            self.add_column(column);
        }
        self
    }

    /// Add a row.
    #[must_use]
    pub fn with_row<T: Into<Txt>>(mut self, cells: impl IntoIterator<Item = T>) -> Self {
        self.add_row(cells);
        self
    }

    /// Add rows.
    #[must_use]
    pub fn with_rows<R, T>(mut self, rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = T>,
        T: Into<Txt>,
    {
        for row in rows {
            self.add_row(row);
        }
        self
    }

    /// Add a column in place.
    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
        self.widths = OnceLock::new();
    }

    /// Add a row in place.
    pub fn add_row<T: Into<Txt>>(&mut self, cells: impl IntoIterator<Item = T>) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self.widths = OnceLock::new();
    }

    /// Set the frame style used by [`render`](Self::render).
    #[must_use]
    pub fn style(mut self, style: FrameStyle<'static>) -> Self {
        self.style = style;
        self
    }

    /// Set the frame options used by [`render`](Self::render).
    #[must_use]
    pub fn options(mut self, options: FrameOptions) -> Self {
        self.options = options;
        self
    }

    /// Prepend a line number column labelled by `label(row_index)`.
    ///
    /// The column takes part in width resolution and layout like any other
    /// column but is not part of [`columns`](Self::columns) or exports.
    #[must_use]
    pub fn line_numbers<F>(mut self, column: Column, label: F) -> Self
    where
        F: Fn(usize) -> Txt + Send + Sync + 'static,
    {
        self.line_numbers = Some(LineNumbers {
            column,
            label: Arc::new(label),
        });
        self.widths = OnceLock::new();
        self
    }

    /// Set the render cache capacity.
    #[must_use]
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// The declared columns.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The rows as given.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Txt>] {
        &self.rows
    }

    /// Resolved width of each declared column, `None` when hidden.
    #[must_use]
    pub fn column_widths(&self) -> &[Option<usize>] {
        let offset = usize::from(self.line_numbers.is_some());
        &self.resolved_widths()[offset..]
    }

    /// Resolved width of the line number column, if any.
    #[must_use]
    pub fn line_number_width(&self) -> Option<usize> {
        self.line_numbers.as_ref()?;
        self.resolved_widths().first().copied().flatten()
    }

    /// Render with the table's own style and options.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Style`] if the style is misaligned.
    pub fn render(&self) -> Result<String, RenderError> {
        self.render_with(&self.style, self.options, None)
    }

    /// Render with an explicit style, options and row selection.
    ///
    /// # Errors
    ///
    /// Returns an error, without producing output, if the style is misaligned
    /// or a row range is inverted or out of bounds.
    pub fn render_with(
        &self,
        style: &FrameStyle<'_>,
        options: FrameOptions,
        ranges: Option<&RowRanges>,
    ) -> Result<String, RenderError> {
        style.validate()?;
        if let Some(ranges) = ranges {
            ranges.check(self.rows.len())?;
        }

        let widths = self.resolved_widths();
        let visible: Vec<(usize, usize)> = widths
            .iter()
            .enumerate()
            .filter_map(|(i, w)| w.map(|w| (i, w)))
            .collect();

        if visible.is_empty() && self.title.is_none() {
            log::debug!(target: "framegrid::table", "nothing to render");
            return Ok(String::new());
        }

        // Zero-width columns leave no room for a title; the frame is sized
        // to the title alone, as when every column is hidden.
        let title_only = self.title.is_some() && visible.iter().all(|&(_, w)| w == 0);
        let frame_widths = if title_only {
            vec![self.title_width().unwrap_or(0)]
        } else {
            visible.iter().map(|&(_, w)| w).collect()
        };
        let mut frame = FrameAssembler::new(*style, options, frame_widths);

        if let Some(title) = &self.title {
            let lines = CellLayout::new(frame.inner_width())
                .alignment(title.alignment().unwrap_or_default())
                .wrapping(title.wrapping().unwrap_or_default())
                .lay_out(title.text());
            log::trace!(target: "framegrid::table", "title: {} lines", lines.len());
            frame.title(&lines);
        }

        if title_only {
            log::debug!(target: "framegrid::table", "no column width, rendering the title alone");
            return Ok(frame.finish());
        }

        let columns: Vec<&Column> = self.layout_columns().collect();
        if visible.iter().any(|&(i, _)| columns[i].header.is_some()) {
            let empty = Txt::default();
            let cells: Vec<LaidOut> = visible
                .iter()
                .map(|&(i, width)| {
                    let header = columns[i].header.as_ref().unwrap_or(&empty);
                    let layout = columns[i].layout(width, header);
                    LaidOut {
                        lines: layout.lay_out(header.text()).into(),
                        layout,
                    }
                })
                .collect();
            let (blocks, height) = place(&cells);
            log::trace!(target: "framegrid::table", "header: {height} lines");
            frame.header(&blocks, height);
        }

        let mut cache = RenderCache::with_capacity(self.cache_capacity);
        let all_rows = [0..self.rows.len()];
        let (selected, suppress_gaps) = match ranges {
            Some(ranges) => (ranges.ranges(), ranges.gaps_suppressed()),
            None => (&all_rows[..], false),
        };

        let mut previous: Option<usize> = None;
        let mut rendered = 0usize;
        for row in selected.iter().flat_map(Clone::clone) {
            let boundary = match previous {
                Some(prev) if prev + 1 != row && !suppress_gaps => Boundary::Gap,
                _ => Boundary::Contiguous,
            };
            let cells: Vec<LaidOut> = visible
                .iter()
                .map(|&(i, width)| {
                    let column = columns[i];
                    let txt = self.cell(row, i);
                    let layout = column.layout(width, &txt);
                    let lines = match column.content_hint {
                        ContentHint::Repetitive => cache.lay_out(&layout, txt.text()),
                        ContentHint::Unique => layout.lay_out(txt.text()).into(),
                    };
                    LaidOut { lines, layout }
                })
                .collect();
            let (blocks, height) = place(&cells);
            frame.row(&blocks, height, boundary);
            previous = Some(row);
            rendered += 1;
        }

        log::debug!(
            target: "framegrid::table",
            "rendered {rendered} rows in {} lines of {} units ({})",
            frame.line_count(),
            frame.line_width(),
            cache.stats()
        );
        Ok(frame.finish())
    }

    /// Columns in layout order: line numbers first, then the declared ones.
    fn layout_columns(&self) -> impl Iterator<Item = &Column> {
        self.line_numbers
            .iter()
            .map(|numbers| &numbers.column)
            .chain(&self.columns)
    }

    /// Text of layout column `index` in `row`.
    fn cell(&self, row: usize, index: usize) -> Cow<'_, Txt> {
        let index = match &self.line_numbers {
            Some(numbers) if index == 0 => return Cow::Owned((numbers.label)(row)),
            Some(_) => index - 1,
            None => index,
        };
        self.rows[row]
            .get(index)
            .map_or_else(|| Cow::Owned(Txt::default()), Cow::Borrowed)
    }

    fn resolved_widths(&self) -> &[Option<usize>] {
        self.widths.get_or_init(|| {
            let samples: Vec<ColumnSample> = self
                .layout_columns()
                .enumerate()
                .map(|(index, column)| self.sample(index, column))
                .collect();
            let widths = resolve_widths(&samples, self.title_width());
            log::debug!(target: "framegrid::table", "resolved widths {widths:?}");
            widths
        })
    }

    fn title_width(&self) -> Option<usize> {
        self.title.as_ref().map(|title| widest_line(title.text()))
    }

    fn sample(&self, index: usize, column: &Column) -> ColumnSample {
        let observed = match column.width {
            Width::Hidden | Width::Collapsed | Width::Fixed(_) => 0,
            _ => (0..self.rows.len())
                .map(|row| column.measure(&self.cell(row, index)))
                .max()
                .unwrap_or(0),
        };
        ColumnSample {
            policy: column.width,
            observed,
            header: column.header.as_ref().map(|h| column.measure(h)),
        }
    }
}

/// Position every cell of a row within the row height.
fn place(cells: &[LaidOut]) -> (Vec<PlacedBlock<'_>>, usize) {
    let height = cells.iter().map(|c| c.lines.len()).max().unwrap_or(0);
    let blocks = cells
        .iter()
        .map(|c| {
            PlacedBlock::new(
                &c.lines,
                height,
                c.layout.alignment.vertical(),
                c.layout.width,
                c.layout.fill,
            )
        })
        .collect();
    (blocks, height)
}

/// Render `table` with an explicit style, options and row selection.
///
/// # Errors
///
/// See [`Table::render_with`].
pub fn render(
    table: &Table,
    style: &FrameStyle<'_>,
    options: FrameOptions,
    ranges: Option<&RowRanges>,
) -> Result<String, RenderError> {
    table.render_with(style, options, ranges)
}
