//! Scoring module - chain step scoring
//!
//! One erasing step scores `erased * 10 * max(1, chain + color + group)` where:
//! - chain power grows with the chain step and is 0 for the first step,
//! - color bonus grows with the number of distinct colors erased in the step,
//! - group bonus sums a per-group term that is 0 for minimum-size groups.

use crate::types::{
    CHAIN_POWER_TABLE, COLOR_BONUS_TABLE, GROUP_BONUS_TABLE, MIN_GROUP_SIZE, POINTS_PER_CELL,
};

/// Score calculation result for one chain step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub chain_power: u32,
    pub color_bonus: u32,
    pub group_bonus: u32,
    /// Bonus multiplier actually applied (never below 1)
    pub multiplier: u32,
    pub total: u32,
}

/// Chain power for a 1-based chain step (0 for step 0 or 1)
pub fn chain_power_bonus(step: u32) -> u32 {
    if step == 0 {
        return 0;
    }
    let idx = (step as usize - 1).min(CHAIN_POWER_TABLE.len() - 1);
    CHAIN_POWER_TABLE[idx]
}

/// Color bonus for the number of distinct colors erased in one step
pub fn color_bonus(distinct_colors: usize) -> u32 {
    let idx = distinct_colors.min(COLOR_BONUS_TABLE.len() - 1);
    COLOR_BONUS_TABLE[idx]
}

/// Group bonus for a single erased group
pub fn group_bonus(size: usize) -> u32 {
    if size <= MIN_GROUP_SIZE {
        return 0;
    }
    let idx = (size - MIN_GROUP_SIZE).min(GROUP_BONUS_TABLE.len() - 1);
    GROUP_BONUS_TABLE[idx]
}

/// Calculate the score of one erasing step
///
/// - `erased`: colored cells erased in this step (garbage excluded)
/// - `step`: 1-based chain step
/// - `distinct_colors`: number of different colors among the erased groups
/// - `group_sizes`: size of each erased group
pub fn calculate_score(
    erased: usize,
    step: u32,
    distinct_colors: usize,
    group_sizes: &[usize],
) -> ScoreResult {
    if erased == 0 {
        return ScoreResult::default();
    }

    let chain_power = chain_power_bonus(step);
    let color_bonus = color_bonus(distinct_colors);
    let group_bonus: u32 = group_sizes.iter().map(|&s| group_bonus(s)).sum();

    let multiplier = (chain_power + color_bonus + group_bonus).max(1);
    let total = (erased as u32)
        .saturating_mul(POINTS_PER_CELL)
        .saturating_mul(multiplier);

    ScoreResult {
        chain_power,
        color_bonus,
        group_bonus,
        multiplier,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_power_table() {
        assert_eq!(chain_power_bonus(0), 0);
        assert_eq!(chain_power_bonus(1), 0);
        assert_eq!(chain_power_bonus(2), 8);
        assert_eq!(chain_power_bonus(3), 16);
        assert_eq!(chain_power_bonus(4), 32);
        assert_eq!(chain_power_bonus(19), 512);
        assert_eq!(chain_power_bonus(40), 512);
    }

    #[test]
    fn test_chain_power_is_monotonic() {
        for step in 1..30 {
            assert!(chain_power_bonus(step) <= chain_power_bonus(step + 1));
        }
    }

    #[test]
    fn test_color_bonus() {
        assert_eq!(color_bonus(1), 0);
        assert_eq!(color_bonus(2), 3);
        assert_eq!(color_bonus(3), 6);
        assert_eq!(color_bonus(4), 12);
        assert_eq!(color_bonus(5), 24);
    }

    #[test]
    fn test_group_bonus() {
        assert_eq!(group_bonus(4), 0);
        assert_eq!(group_bonus(5), 2);
        assert_eq!(group_bonus(7), 4);
        assert_eq!(group_bonus(10), 7);
        assert_eq!(group_bonus(11), 10);
        assert_eq!(group_bonus(30), 10);
    }

    #[test]
    fn test_single_group_first_step() {
        let result = calculate_score(4, 1, 1, &[4]);
        assert_eq!(result.multiplier, 1);
        assert_eq!(result.total, 40);
    }

    #[test]
    fn test_second_step_uses_chain_power() {
        let result = calculate_score(4, 2, 1, &[4]);
        assert_eq!(result.chain_power, 8);
        assert_eq!(result.total, 4 * 10 * 8);
    }

    #[test]
    fn test_multi_color_multi_group_step() {
        // Two groups (5 and 4), two colors, third step.
        let result = calculate_score(9, 3, 2, &[5, 4]);
        assert_eq!(result.chain_power, 16);
        assert_eq!(result.color_bonus, 3);
        assert_eq!(result.group_bonus, 2);
        assert_eq!(result.multiplier, 21);
        assert_eq!(result.total, 9 * 10 * 21);
    }

    #[test]
    fn test_nothing_erased_scores_zero() {
        assert_eq!(calculate_score(0, 1, 0, &[]).total, 0);
    }
}
