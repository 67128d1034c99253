//! Text reflow to a column width.
//!
//! Text is first split on `\n` into paragraphs. Each paragraph is wrapped on
//! its own and a paragraph boundary is always a hard line break: neither
//! wrapping nor compaction ever joins text across a newline.
//!
//! # Example
//!
//! ```
//! use framegrid::text::Wrapping;
//! use framegrid::wrap::wrap;
//!
//! let lines = wrap("Quick brown fox jumps over the lazy dog", 12, Wrapping::Word);
//! assert_eq!(lines.into_vec(), vec!["Quick", "brown fox", "jumps over", "the lazy dog"]);
//!
//! assert_eq!(wrap("Hello", 3, Wrapping::Cut).into_vec(), vec!["H…o"]);
//! ```

use smallvec::SmallVec;

use crate::cells::{chop_units, clip, last_units, take_units, unit_len, units};
use crate::compact::compact;
use crate::text::Wrapping;

/// Marker inserted where [`Wrapping::Cut`] removed text.
pub const ELLIPSIS: char = '…';

/// Wrapped lines; most cells fit in a handful.
pub type Lines = SmallVec<[String; 4]>;

/// Wrap `text` to `width` units.
///
/// Every paragraph produces at least one line, so the result is never empty.
/// For [`Wrapping::Word`] and [`Wrapping::Char`] each line is at most `width`
/// units; for [`Wrapping::Cut`] each paragraph yields exactly one line of at
/// most `width` units.
#[must_use]
pub fn wrap(text: &str, width: usize, wrapping: Wrapping) -> Lines {
    let mut lines = Lines::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        match wrapping {
            Wrapping::Word => lines.extend(wrap_words(paragraph, width)),
            Wrapping::Char => lines.extend(wrap_chars(paragraph, width)),
            Wrapping::Cut => lines.push(cut(paragraph, width)),
        }
    }
    lines
}

/// Word wrap one paragraph.
fn wrap_words(paragraph: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut fragments = Vec::new();
    for word in paragraph.split_whitespace() {
        if unit_len(word) <= width {
            fragments.push(word.to_string());
            continue;
        }
        let mut rest = word;
        while !rest.is_empty() {
            let (piece, tail) = chop_units(rest, width);
            fragments.push(piece.to_string());
            rest = tail;
        }
    }

    if fragments.is_empty() {
        return vec![String::new()];
    }
    compact(fragments, width)
}

/// Character wrap one paragraph into `ceil(len / width)` slices.
///
/// A slice may end early, right after a whitespace unit, as long as the
/// remaining slices can still hold the rest of the paragraph. Whitespace at
/// a slice boundary is dropped from the lines on both sides.
fn wrap_chars(paragraph: &str, width: usize) -> Vec<String> {
    let all: Vec<&str> = units(paragraph).collect();
    if width == 0 || all.is_empty() {
        return vec![String::new()];
    }

    let slices = all.len().div_ceil(width);
    let mut lines = Vec::with_capacity(slices);
    let mut start = 0;

    for slice in 0..slices {
        let remaining = all.len() - start;
        let slices_after = slices - slice - 1;
        let most = width.min(remaining);
        let least = remaining.saturating_sub(slices_after * width).max(1);

        let mut take = most;
        let mid_word = start + most < all.len()
            && !is_space(all[start + most])
            && !is_space(all[start + most - 1]);
        if mid_word {
            let breaks_after_content = |n: usize| {
                is_space(all[start + n - 1])
                    && !all[start..start + n - 1].iter().all(|u| is_space(u))
            };
            if let Some(n) = (least..most).rev().find(|&n| breaks_after_content(n)) {
                take = n;
            }
        }

        let joined = all[start..start + take].concat();
        let mut line = joined.as_str();
        if slice > 0 {
            line = line.trim_start();
        }
        if slice + 1 < slices {
            line = line.trim_end();
        }
        lines.push(line.to_string());
        start += take;
    }

    lines
}

fn is_space(unit: &str) -> bool {
    unit.chars().all(char::is_whitespace)
}

/// Shorten one paragraph to `width` units, marking the removed middle.
///
/// | width | result for `"Hello"` |
/// |-------|----------------------|
/// | 0     | `""`                 |
/// | 1     | `"…"`                |
/// | 2     | `"H…"`               |
/// | 3     | `"H…o"`              |
/// | 4     | `"He…o"`             |
#[must_use]
pub fn cut(paragraph: &str, width: usize) -> String {
    let len = unit_len(paragraph);
    if len <= width {
        return paragraph.to_string();
    }

    let cut = match width {
        0 => String::new(),
        1 => ELLIPSIS.to_string(),
        2 => format!("{}{ELLIPSIS}", take_units(paragraph, 1)),
        3 => format!(
            "{}{ELLIPSIS}{}",
            take_units(paragraph, 1),
            last_units(paragraph, 1)
        ),
        _ => {
            let head = width / 2;
            let tail = width - 1 - head;
            format!(
                "{}{ELLIPSIS}{}",
                take_units(paragraph, head),
                last_units(paragraph, tail)
            )
        }
    };
    clip(&cut, width).to_string()
}
