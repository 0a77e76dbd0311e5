//! Reward definitions shared by templates and event records.

use serde::{Deserialize, Serialize};

/// Kind of reward credited to a player's ledger.
///
/// `Equipment` and `Title` are part of the taxonomy but are granted by other systems;
/// reward distribution skips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    Coins,
    Xp,
    Material,
    Equipment,
    Title,
}

/// A single reward entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    #[serde(rename = "type")]
    pub kind: RewardKind,
    pub amount: i64,
    /// Inventory item key for `material`, `equipment` and `title` rewards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
}

impl Reward {
    pub fn coins(amount: i64) -> Self {
        Self {
            kind: RewardKind::Coins,
            amount,
            item_id: None,
        }
    }

    pub fn xp(amount: i64) -> Self {
        Self {
            kind: RewardKind::Xp,
            amount,
            item_id: None,
        }
    }

    pub fn material(item_id: impl Into<String>, amount: i64) -> Self {
        Self {
            kind: RewardKind::Material,
            amount,
            item_id: Some(item_id.into()),
        }
    }
}

/// Bonus rewards for the highest ranked contributors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopContributorRewards {
    #[serde(default)]
    pub top1: Vec<Reward>,
    #[serde(default)]
    pub top3: Vec<Reward>,
    #[serde(default)]
    pub top10: Vec<Reward>,
}

impl TopContributorRewards {
    /// Returns the bonus tier for a 1-based rank.
    ///
    /// Rank 1 gets `top1`, ranks 2-3 get `top3`, ranks 4-10 get `top10`, anything else
    /// gets nothing.
    pub fn for_rank(&self, rank: u32) -> &[Reward] {
        match rank {
            1 => &self.top1,
            2..=3 => &self.top3,
            4..=10 => &self.top10,
            _ => &[],
        }
    }
}
