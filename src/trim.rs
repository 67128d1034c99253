//! Whitespace trimming applied to raw cell text before measuring and wrapping.

use std::borrow::Cow;
use std::sync::LazyLock;

use bitflags::bitflags;
use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

bitflags! {
    /// Independent trimming steps.
    ///
    /// Whitespace flags act on every line, blank-line flags act on the line
    /// list. A line is blank when it holds only whitespace.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Trimming: u8 {
        /// Strip whitespace at the start of each line.
        const LEADING_WHITESPACE   = 1 << 0;
        /// Drop blank lines before the first non-blank line.
        const LEADING_BLANK_LINES  = 1 << 1;
        /// Collapse whitespace runs inside a line to one space.
        const INNER_WHITESPACE     = 1 << 2;
        /// Collapse runs of blank lines to one blank line.
        const INNER_BLANK_LINES    = 1 << 3;
        /// Strip whitespace at the end of each line.
        const TRAILING_WHITESPACE  = 1 << 4;
        /// Drop blank lines after the last non-blank line.
        const TRAILING_BLANK_LINES = 1 << 5;
    }
}

impl Trimming {
    /// No trimming at all.
    pub const NONE: Self = Self::empty();
    /// Every trimming step.
    pub const ALL: Self = Self::all();
    /// Outer whitespace and outer blank lines, interior untouched.
    pub const OUTER: Self = Self::LEADING_WHITESPACE
        .union(Self::LEADING_BLANK_LINES)
        .union(Self::TRAILING_WHITESPACE)
        .union(Self::TRAILING_BLANK_LINES);

    /// Apply the selected steps to `text`.
    #[must_use]
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        if self.is_empty() {
            return Cow::Borrowed(text);
        }

        let mut lines: Vec<Cow<'_, str>> = text
            .split('\n')
            .map(|line| self.trim_line(line))
            .collect();

        if self.contains(Self::LEADING_BLANK_LINES) {
            let first = lines.iter().position(|l| !is_blank(l)).unwrap_or(lines.len());
            lines.drain(..first);
        }
        if self.contains(Self::TRAILING_BLANK_LINES) {
            while lines.last().is_some_and(|l| is_blank(l)) {
                lines.pop();
            }
        }
        if self.contains(Self::INNER_BLANK_LINES) {
            lines.dedup_by(|next, prev| is_blank(next) && is_blank(prev));
        }

        Cow::Owned(lines.join("\n"))
    }

    fn trim_line(self, line: &str) -> Cow<'_, str> {
        let mut line = line;
        if self.contains(Self::LEADING_WHITESPACE) {
            line = line.trim_start();
        }
        if self.contains(Self::TRAILING_WHITESPACE) {
            line = line.trim_end();
        }
        if !self.contains(Self::INNER_WHITESPACE) {
            return Cow::Borrowed(line);
        }

        let core = line.trim();
        if core.is_empty() {
            return Cow::Borrowed(line);
        }
        let start = line.len() - line.trim_start().len();
        let end = start + core.len();
        let collapsed = WHITESPACE_RUN.replace_all(core, " ");
        Cow::Owned(format!("{}{collapsed}{}", &line[..start], &line[end..]))
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
