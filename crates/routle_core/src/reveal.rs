//! Background reveal intensity as a function of guess count.

use crate::rules::MAX_GUESSES;

/// Intensity added by each guess.
pub const REVEAL_STEP: f64 = 1.0 / MAX_GUESSES as f64;

/// Maps a guess count to a reveal intensity in `[0, 1]`.
///
/// Each guess uncovers one more step of the background layer:
/// `0.0, 0.2, 0.4, 0.6, 0.8, 1.0` for counts `0..=5`. Counts past the
/// limit stay at full intensity.
///
/// The count is divided rather than multiplied by [`REVEAL_STEP`] so the
/// results land on the exact decimal values.
pub fn reveal(guess_count: usize) -> f64 {
    (guess_count as f64 / MAX_GUESSES as f64).clamp(0.0, 1.0)
}
