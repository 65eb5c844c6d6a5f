//! Signed shortest-path offsets around the wrap seam and their display
//! classification.
//!
//! Both functions here are pure mappings, re-derived from state on every
//! frame and never accumulated; that keeps them immune to drift across
//! repeated rotations.

use crate::constants::WINDOW_HALF_WIDTH;

/// Which side of the active slide a nearby slot sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Counter-clockwise neighbor (negative offset).
    Left,
    /// Clockwise neighbor (positive offset).
    Right,
}

/// Display-layer classification of a slot relative to the active slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotClass {
    /// The focal slide itself.
    Active,
    /// Within the rendered window, `depth` steps out on `side` (1..=3).
    Near {
        /// Side of the active slide.
        side: Side,
        /// Steps away from the active slide, 1 through 3.
        depth: u8,
    },
    /// Outside the rendered window.
    Hidden,
}

/// Shortest signed path from `active` to `candidate` on a circle of `len`.
///
/// The raw difference `candidate - active` is folded through the wrap seam
/// whenever the other way around is shorter, so the result is always in
/// `(-ceil(len/2), ceil(len/2)]`. An exact half-circle distance (even `len`)
/// ties both ways; the tie resolves to the positive/right direction. That
/// tie-break is a fixed policy, and it is why a two-slide deck reports `+1`
/// for its single neighbor regardless of direction.
pub fn offset(len: usize, active: usize, candidate: usize) -> isize {
    debug_assert!(len > 0, "offset on an empty deck");
    debug_assert!(active < len && candidate < len, "index out of deck range");
    let n = len as isize;
    let mut off = candidate as isize - active as isize;
    if off > n / 2 {
        off -= n;
    } else if off <= -((n + 1) / 2) {
        off += n;
    }
    off
}

/// Classify a signed offset into its display slot.
///
/// Offset 0 is the active slide; magnitudes 1 through
/// [`WINDOW_HALF_WIDTH`] are near slots; anything farther is hidden.
pub fn classify(offset: isize) -> SlotClass {
    let half = WINDOW_HALF_WIDTH as isize;
    match offset {
        0 => SlotClass::Active,
        o if o > 0 && o <= half => SlotClass::Near {
            side: Side::Right,
            depth: o as u8,
        },
        o if o < 0 && -o <= half => SlotClass::Near {
            side: Side::Left,
            depth: (-o) as u8,
        },
        _ => SlotClass::Hidden,
    }
}
