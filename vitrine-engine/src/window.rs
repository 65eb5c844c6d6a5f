//! Derives the set of deck indices that must be rendered for a given
//! active slide, including seam padding.

use crate::constants::{SEAM_PAD_DEPTH, WINDOW_HALF_WIDTH};

/// Indices that must be materialized for rendering while `active` is focal.
///
/// The base window is `active + k` for `k` in `[-3, 3]`, wrapped into
/// `[0, len)`. When the active slide sits within three positions of either
/// end of the deck, the slides physically adjacent across the seam are
/// pulled in as well (up to two from the far edge), so they already exist
/// in the render set before a transition crosses the seam.
///
/// The result is deduplicated and at most `min(len, 9)` entries; for decks
/// of seven or fewer it may cover the whole deck.
pub fn visible_indices(len: usize, active: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    debug_assert!(active < len, "active index out of deck range");

    let n = len as isize;
    let half = WINDOW_HALF_WIDTH as isize;
    let mut out = Vec::with_capacity(2 * WINDOW_HALF_WIDTH + 1 + SEAM_PAD_DEPTH);

    for k in -half..=half {
        push_unique(&mut out, (active as isize + k).rem_euclid(n) as usize);
    }

    // Seam padding: near the front of the deck the tail is about to scroll
    // in, and vice versa.
    if active < WINDOW_HALF_WIDTH {
        for back in 1..=SEAM_PAD_DEPTH.min(len) {
            push_unique(&mut out, len - back);
        }
    }
    if active + WINDOW_HALF_WIDTH >= len {
        for front in 0..SEAM_PAD_DEPTH.min(len) {
            push_unique(&mut out, front);
        }
    }

    out
}

fn push_unique(out: &mut Vec<usize>, index: usize) {
    if !out.contains(&index) {
        out.push(index);
    }
}
