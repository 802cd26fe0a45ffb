//! Derived totals for a score sheet
use crate::category::Category;
use crate::constants::{BONUS_AWARD, BONUS_THRESHOLD};
use crate::player::Player;
use serde::{Deserialize, Serialize};

/// Threshold/award pair for the top-section bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusRule {
    pub threshold: u32,
    pub award: u32,
}

impl Default for BonusRule {
    fn default() -> Self {
        Self {
            threshold: BONUS_THRESHOLD,
            award: BONUS_AWARD,
        }
    }
}

/// Every derived figure of one sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTotals {
    pub top: u32,
    pub bonus: Option<u32>,
    pub bottom: u32,
    pub total: u32,
}

/// Sums saturate: chance accepts any value, so a sheet can exceed `u32`.
fn section_sum(player: &Player, categories: &[Category]) -> u32 {
    categories
        .iter()
        .map(|&c| player.value(c).unwrap_or(0))
        .fold(0, u32::saturating_add)
}

/// Sum of the six single-face categories; unplayed and skipped count as zero.
#[must_use]
pub fn top_section_total(player: &Player) -> u32 {
    section_sum(player, &Category::TOP)
}

/// Sum of the nine combination categories.
#[must_use]
pub fn bottom_section_total(player: &Player) -> u32 {
    section_sum(player, &Category::BOTTOM)
}

/// Bonus award when the top section reaches the threshold, `None` otherwise.
#[must_use]
pub fn bonus(player: &Player, rule: &BonusRule) -> Option<u32> {
    (top_section_total(player) >= rule.threshold).then_some(rule.award)
}

/// Grand total. A value stored under the bonus category is ignored.
#[must_use]
pub fn total(player: &Player, rule: &BonusRule) -> u32 {
    totals(player, rule).total
}

#[must_use]
pub fn totals(player: &Player, rule: &BonusRule) -> PlayerTotals {
    let top = top_section_total(player);
    let bonus = (top >= rule.threshold).then_some(rule.award);
    let bottom = bottom_section_total(player);
    PlayerTotals {
        top,
        bonus,
        bottom,
        total: top
            .saturating_add(bonus.unwrap_or(0))
            .saturating_add(bottom),
    }
}
