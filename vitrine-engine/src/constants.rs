//! Timing and geometry constants shared by the engine and its runtime shell.

use std::time::Duration;

/// How long a transition lock is held after an accepted rotation.
///
/// Must match the display layer's visual transition duration exactly;
/// a mismatch shows up as jitter at the end of every rotation.
pub const LOCK_DURATION: Duration = Duration::from_millis(700);

/// Autoplay cadence: one `Advance` request per period while armed.
pub const ROTATION_PERIOD: Duration = Duration::from_millis(3000);

/// Slots materialized on each side of the active slide.
pub const WINDOW_HALF_WIDTH: usize = 3;

/// Extra indices pulled in from the far edge when the active slide sits
/// close enough to the seam that a wrap crossing is imminent.
pub const SEAM_PAD_DEPTH: usize = 2;
