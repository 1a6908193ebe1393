//! Scoring, gravity speed and level.
//!
//! Every cleared line is worth [`LINE_SCORE`] points, with no bonus for
//! clearing several at once. Gravity speeds up by a fixed step for every
//! [`SCORE_PER_LEVEL`] points until it reaches the floor interval. The level
//! is derived from the score for display only.

use crate::types::{
    BASE_DROP_MS, DROP_STEP_MS, LINE_SCORE, MAX_LEVEL, MIN_DROP_MS, SCORE_PER_LEVEL,
};

/// Points for clearing `lines` rows at once.
pub fn line_clear_score(lines: u32) -> u32 {
    LINE_SCORE.saturating_mul(lines)
}

/// Gravity interval for `score` with the default curve.
///
/// ```
/// use blockfall_core::drop_interval_ms;
///
/// assert_eq!(drop_interval_ms(0), 500);
/// assert_eq!(drop_interval_ms(2500), 400);
/// assert_eq!(drop_interval_ms(50_000), 100);
/// ```
pub fn drop_interval_ms(score: u32) -> u32 {
    drop_interval_with(score, BASE_DROP_MS, MIN_DROP_MS, DROP_STEP_MS)
}

/// `max(min, base - (score / SCORE_PER_LEVEL) * step)` without underflow.
pub fn drop_interval_with(score: u32, base_ms: u32, min_ms: u32, step_ms: u32) -> u32 {
    let speedup = (score / SCORE_PER_LEVEL).saturating_mul(step_ms);
    base_ms.saturating_sub(speedup).max(min_ms)
}

/// Level shown to the player: `min(9, score / 1000 + 1)`.
pub fn level_for_score(score: u32) -> u32 {
    (score / SCORE_PER_LEVEL + 1).min(MAX_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_line_scores() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 200);
        assert_eq!(line_clear_score(4), 400);
    }

    #[test]
    fn test_drop_interval_curve() {
        assert_eq!(drop_interval_ms(0), 500);
        assert_eq!(drop_interval_ms(999), 500);
        assert_eq!(drop_interval_ms(1000), 450);
        assert_eq!(drop_interval_ms(2500), 400);
        assert_eq!(drop_interval_ms(8000), 100);
        assert_eq!(drop_interval_ms(9000), 100);
        assert_eq!(drop_interval_ms(u32::MAX), 100);
    }

    #[test]
    fn test_level() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(2500), 3);
        assert_eq!(level_for_score(8999), 9);
        assert_eq!(level_for_score(100_000), 9);
    }
}
