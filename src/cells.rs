//! Column unit measurement.
//!
//! Every width in this crate is counted in *units*: one extended grapheme
//! cluster occupies one column. No attempt is made to predict how wide a
//! terminal will actually draw a glyph, so CJK text or emoji are counted as
//! one column per cluster, and combining marks never add a column of their own.

use std::num::NonZeroUsize;
use std::sync::{LazyLock, Mutex};

use lru::LruCache;
use unicode_segmentation::UnicodeSegmentation;

use crate::sync::lock_recover;

/// Minimum string length (in bytes) worth caching.
const CACHE_MIN_LEN: usize = 8;

const CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(n) => n,
    None => unreachable!(),
};

static UNIT_LEN_CACHE: LazyLock<Mutex<LruCache<String, usize>>> =
    LazyLock::new(|| Mutex::new(LruCache::new(CACHE_CAPACITY)));

/// Iterate over the units (grapheme clusters) of `text`.
pub fn units(text: &str) -> impl DoubleEndedIterator<Item = &str> {
    text.graphemes(true)
}

#[inline]
fn count_units(text: &str) -> usize {
    if text.is_ascii() {
        // "\r\n" is a single cluster; everything else is one byte per unit.
        return text.len() - text.matches("\r\n").count();
    }
    text.graphemes(true).count()
}

/// Get the number of units in `text` (cached for longer strings).
#[must_use]
pub fn unit_len(text: &str) -> usize {
    if text.len() < CACHE_MIN_LEN {
        return count_units(text);
    }

    if let Some(&cached) = lock_recover(&UNIT_LEN_CACHE).get(text) {
        return cached;
    }

    let len = count_units(text);
    lock_recover(&UNIT_LEN_CACHE).put(text.to_string(), len);
    len
}

/// Widest line of `text` in units, splitting on `\n` and `\r\n`.
#[must_use]
pub fn widest_line(text: &str) -> usize {
    text.split('\n')
        .map(|line| unit_len(line.strip_suffix('\r').unwrap_or(line)))
        .max()
        .unwrap_or(0)
}

/// Byte offset just past the first `count` units of `text`.
fn unit_offset(text: &str, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    text.grapheme_indices(true)
        .nth(count)
        .map_or(text.len(), |(idx, _)| idx)
}

/// Split `text` after `count` units.
///
/// Returns `(head, tail)`; `head` holds at most `count` units.
#[must_use]
pub fn chop_units(text: &str, count: usize) -> (&str, &str) {
    text.split_at(unit_offset(text, count))
}

/// The first `count` units of `text`.
#[must_use]
pub fn take_units(text: &str, count: usize) -> &str {
    chop_units(text, count).0
}

/// The last `count` units of `text`.
#[must_use]
pub fn last_units(text: &str, count: usize) -> &str {
    if count == 0 {
        return "";
    }
    let start = text
        .grapheme_indices(true)
        .rev()
        .nth(count - 1)
        .map_or(0, |(idx, _)| idx);
    &text[start..]
}

/// Clip `text` to at most `width` units.
#[must_use]
pub fn clip(text: &str, width: usize) -> &str {
    take_units(text, width)
}

/// Count `chars` of a glyph string.
///
/// Frame glyphs are measured in `char`s so the check can run in const
/// context; a glyph never carries combining marks.
#[must_use]
pub const fn glyph_len(glyph: &str) -> usize {
    let bytes = glyph.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] & 0xC0 != 0x80 {
            count += 1;
        }
        i += 1;
    }
    count
}
