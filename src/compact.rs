//! Reverse-greedy line compaction.
//!
//! Word wrapping first produces one fragment per word (long words already
//! split to the width). [`compact`] then merges neighbours back together,
//! scanning from the tail: whenever a fragment and the line that follows it
//! still fit the width once joined by a single space, they become one line.
//!
//! Merging from the right means the *last* lines end up full and any slack
//! collects in the first lines. This is a simple greedy pass, not an optimal
//! fit, and it never reorders fragments.

use crate::cells::unit_len;

/// Merge adjacent fragments, tail first, while they fit `width`.
///
/// Fragments are joined with one space. The result holds at most as many
/// lines as the input and every merged line is at most `width` units.
#[must_use]
pub fn compact(fragments: Vec<String>, width: usize) -> Vec<String> {
    if fragments.len() < 2 {
        return fragments;
    }

    let mut merged: Vec<(String, usize)> = Vec::with_capacity(fragments.len());
    let mut fragments = fragments.into_iter().rev();
    let Some(last) = fragments.next() else {
        return Vec::new();
    };
    let last_len = unit_len(&last);
    let mut current = (last, last_len);

    // Every pair down to the first two fragments is checked: the window
    // ends only once fragment 0 has been tried against its successor.
    for fragment in fragments {
        let len = unit_len(&fragment);
        if len + 1 + current.1 <= width {
            let joined = format!("{fragment} {}", current.0);
            current = (joined, len + 1 + current.1);
        } else {
            merged.push(current);
            current = (fragment, len);
        }
    }
    merged.push(current);

    merged.into_iter().rev().map(|(line, _)| line).collect()
}
