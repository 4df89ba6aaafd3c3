//! Jump-table construction
//!
//! For requirement `k` of entry `i` (letter L, count C) the jump target is the first
//! index `j > i` whose count of L is strictly below C, or the end sentinel
//! (`entries.len()`). Every entry between `i` and `j` needs at least C copies of L,
//! so a query that fails requirement `k` can skip straight to `j`.

use crate::core::{ALPHABET_LEN, Entry};

/// Compute jump targets for every requirement of every entry
///
/// `entries` must already be in final order. Runs one backward pass keeping, per
/// letter and per count threshold, the nearest following index whose count is
/// below that threshold.
pub(crate) fn build_jumps(entries: &[Entry]) -> Vec<Box<[usize]>> {
    let end = entries.len();
    let max_count = entries
        .iter()
        .map(|entry| usize::from(entry.counts().max_count()))
        .max()
        .unwrap_or(0);

    // next_below[c][letter]: smallest index seen so far with count(letter) < c
    let mut next_below = vec![[end; ALPHABET_LEN]; max_count + 1];
    let mut jumps = vec![Box::default(); end];

    for (index, entry) in entries.iter().enumerate().rev() {
        jumps[index] = entry
            .requirements()
            .iter()
            .map(|req| next_below[usize::from(req.count)][usize::from(req.letter - b'A')])
            .collect();

        for letter in 0..ALPHABET_LEN {
            let count = usize::from(entry.counts().at(letter));
            for row in next_below.iter_mut().skip(count + 1) {
                row[letter] = index;
            }
        }
    }

    jumps
}

/// Straightforward forward-scan construction, quadratic in the entry count
///
/// Kept as the reference the backward pass is checked against.
#[cfg(test)]
pub(crate) fn build_jumps_naive(entries: &[Entry]) -> Vec<Box<[usize]>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .requirements()
                .iter()
                .map(|req| {
                    entries[index + 1..]
                        .iter()
                        .position(|later| later.counts().get(req.letter) < req.count)
                        .map_or(entries.len(), |offset| index + 1 + offset)
                })
                .collect()
        })
        .collect()
}
