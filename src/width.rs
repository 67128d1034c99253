//! Column width policies and their resolution to concrete widths.
//!
//! A [`Width`] is declarative: it says how a column's width relates to the
//! content observed in that column. [`resolve_widths`] reduces the policies of
//! a whole table to one number per column (or `None` for hidden columns).

use std::ops::{Range, RangeInclusive};

/// Upper bound for any resolved width, keeping frame arithmetic small.
pub const MAX_WIDTH: usize = 32_767;

/// Width policy of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Width {
    /// Widest observed content.
    #[default]
    Auto,
    /// Not laid out and not drawn at all.
    Hidden,
    /// Zero columns wide, but still separated by frame junctions.
    Collapsed,
    /// Exactly this wide; content is wrapped or cut to fit.
    Fixed(usize),
    /// At least this wide, growing with content.
    Min(usize),
    /// Grows with content up to this width.
    Max(usize),
    /// Observed width clamped into `[start, end)`.
    Range(usize, usize),
    /// Observed width clamped into `[start, end]`.
    ClosedRange(usize, usize),
}

impl Width {
    /// Half-open range policy.
    #[must_use]
    pub fn range(range: Range<usize>) -> Self {
        Self::Range(range.start, range.end)
    }

    /// Closed range policy.
    #[must_use]
    pub fn closed(range: RangeInclusive<usize>) -> Self {
        Self::ClosedRange(*range.start(), *range.end())
    }

    /// Whether the column is excluded from layout and output.
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Reduce the policy against the widest observed content.
    ///
    /// Returns `None` for [`Width::Hidden`]. [`Width::Auto`] returns the
    /// observed width unchanged; the empty-column fallback lives in
    /// [`resolve_widths`] because it needs the sibling columns.
    #[must_use]
    pub fn apply(self, observed: usize) -> Option<usize> {
        let width = match self {
            Self::Hidden => return None,
            Self::Collapsed => 0,
            Self::Auto => observed,
            Self::Fixed(n) => n,
            Self::Min(n) => observed.max(n),
            Self::Max(n) => observed.min(n),
            // An empty range degenerates to its lower bound.
            Self::Range(lo, hi) => observed.min(hi.saturating_sub(1)).max(lo),
            Self::ClosedRange(lo, hi) => observed.min(hi).max(lo),
        };
        Some(width.min(MAX_WIDTH))
    }
}

/// What [`resolve_widths`] knows about one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnSample {
    /// Declared policy.
    pub policy: Width,
    /// Widest line over the column's data cells, in units.
    pub observed: usize,
    /// Widest line of the header, if the column has one.
    pub header: Option<usize>,
}

/// Resolve every column to a concrete width.
///
/// `None` marks a hidden column. An [`Width::Auto`] column that observed no
/// content falls back to its header width, clamped to the (rounded up)
/// average header width of the visible columns, so one long header cannot
/// dominate an otherwise empty table.
///
/// If every visible column still resolves to 0, the empty auto columns share
/// `title` (the title's widest line) so a titled table keeps room for it.
#[must_use]
pub fn resolve_widths(samples: &[ColumnSample], title: Option<usize>) -> Vec<Option<usize>> {
    let headers: Vec<usize> = samples
        .iter()
        .filter(|s| !s.policy.is_hidden())
        .filter_map(|s| s.header)
        .collect();
    let average_header = if headers.is_empty() {
        0
    } else {
        headers.iter().sum::<usize>().div_ceil(headers.len())
    };

    let mut widths: Vec<Option<usize>> = samples
        .iter()
        .map(|sample| {
            let width = sample.policy.apply(sample.observed)?;
            if width == 0 && sample.policy == Width::Auto {
                let fallback = sample.header.map_or(0, |h| h.min(average_header));
                return Some(fallback.min(MAX_WIDTH));
            }
            Some(width)
        })
        .collect();

    let title = title.unwrap_or(0).min(MAX_WIDTH);
    if title > 0 && widths.iter().flatten().all(|&w| w == 0) {
        let empty_auto: Vec<usize> = samples
            .iter()
            .enumerate()
            .filter(|(_, s)| s.policy == Width::Auto)
            .map(|(i, _)| i)
            .collect();
        if !empty_auto.is_empty() {
            let share = title.div_ceil(empty_auto.len());
            for i in empty_auto {
                widths[i] = Some(share);
            }
        }
    }
    widths
}
