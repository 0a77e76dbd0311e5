//! Reward distribution for completed events.
//!
//! Distribution runs once per event, by the caller that won the transition to completed. It
//! ranks the top contributors, stores the ranking on the event, then credits every participant
//! with the global rewards and the top ten with their tier bonus. Credits are independent: a
//! failing credit is logged and the rest still go out.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        active_slot::ActiveSlotRepository, inventory::InventoryRepository, user::UserRepository,
        world_event::WorldEventRepository,
    },
    error::{event::EventError, AppError},
    model::{
        reward::{Reward, RewardKind},
        world_event::{TopContributor, WorldEvent},
    },
};

/// Number of ranked contributors eligible for tier bonuses.
pub const TOP_CONTRIBUTOR_COUNT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionReport {
    pub top_contributors: Vec<TopContributor>,
    /// Rewards successfully applied to a ledger or inventory.
    pub credited: usize,
    /// Rewards that could not be applied.
    pub failed: usize,
    /// Rewards of kinds granted by other systems.
    pub skipped: usize,
}

pub struct RewardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RewardService<'a> {
    /// Creates a new RewardService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RewardService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ranks the top contributors of an event and attaches their tier bonus.
    ///
    /// Participants are sorted by contribution, highest first. Ties keep join order.
    pub fn rank_top_contributors(event: &WorldEvent) -> Vec<TopContributor> {
        event
            .participants_by_contribution()
            .into_iter()
            .take(TOP_CONTRIBUTOR_COUNT)
            .enumerate()
            .map(|(index, participant)| {
                let rank = index as u32 + 1;
                TopContributor {
                    rank,
                    discord_id: participant.discord_id,
                    username: participant.username.clone(),
                    contribution: participant.contribution,
                    rewards: event.top_contributor_rewards.for_rank(rank).to_vec(),
                }
            })
            .collect()
    }

    /// Releases the active slot held by a just-completed event and distributes its rewards.
    ///
    /// Must only be called by the caller whose write moved the event to completed.
    ///
    /// # Arguments
    /// - `event` - The completed event; its `top_contributors` are filled in on return
    ///
    /// # Returns
    /// - `Ok(DistributionReport)` - Distribution ran (individual credits may still have failed)
    /// - `Err(AppError)` - The slot or ranking could not be written
    pub async fn settle_completion(
        &self,
        event: &mut WorldEvent,
    ) -> Result<DistributionReport, AppError> {
        if !ActiveSlotRepository::new(self.db).release(event.id).await? {
            tracing::debug!("Event {} did not hold the active slot", event.event_id);
        }

        let report = self.distribute_rewards(event).await?;
        event.top_contributors = report.top_contributors.clone();

        Ok(report)
    }

    /// Ranks, stores and credits rewards for a completed event.
    ///
    /// # Arguments
    /// - `event` - Completed event snapshot
    ///
    /// # Returns
    /// - `Ok(DistributionReport)` - Ranking stored; counts of credited, failed and skipped rewards
    /// - `Err(AppError)` - Ranking could not be stored; nothing was credited
    pub async fn distribute_rewards(
        &self,
        event: &WorldEvent,
    ) -> Result<DistributionReport, AppError> {
        let top_contributors = Self::rank_top_contributors(event);

        WorldEventRepository::new(self.db)
            .save_top_contributors(event.id, &top_contributors)
            .await?;

        let mut credits: Vec<(u64, Reward)> = Vec::new();
        for participant in &event.participants {
            for reward in &event.global_rewards {
                credits.push((participant.discord_id, reward.clone()));
            }
        }
        for entry in &top_contributors {
            for reward in &entry.rewards {
                credits.push((entry.discord_id, reward.clone()));
            }
        }

        let mut report = DistributionReport::default();
        for (discord_id, reward) in credits {
            match self.credit(discord_id, &reward).await {
                Ok(true) => report.credited += 1,
                Ok(false) => report.skipped += 1,
                Err(e) => {
                    report.failed += 1;
                    tracing::error!(
                        "Failed to credit {:?} x{} to {} for event {}: {}",
                        reward.kind,
                        reward.amount,
                        discord_id,
                        event.event_id,
                        e
                    );
                }
            }
        }

        tracing::info!(
            "Distributed rewards for event {}: {} credited, {} failed, {} skipped",
            event.event_id,
            report.credited,
            report.failed,
            report.skipped
        );

        report.top_contributors = top_contributors;
        Ok(report)
    }

    /// Applies one reward to a player.
    ///
    /// # Returns
    /// - `Ok(true)` - Reward applied
    /// - `Ok(false)` - Reward kind is granted elsewhere and was skipped
    /// - `Err(AppError)` - Unknown player or storage failure
    async fn credit(&self, discord_id: u64, reward: &Reward) -> Result<bool, AppError> {
        let applied = match reward.kind {
            RewardKind::Coins => {
                UserRepository::new(self.db)
                    .add_coins(discord_id, reward.amount)
                    .await?
            }
            RewardKind::Xp => {
                UserRepository::new(self.db)
                    .add_xp(discord_id, reward.amount)
                    .await?
            }
            RewardKind::Material => {
                let Some(item_id) = reward.item_id.as_deref() else {
                    return Err(EventError::Invalid(
                        "Material reward is missing its item id.".to_string(),
                    )
                    .into());
                };
                InventoryRepository::new(self.db)
                    .add_item(discord_id, item_id, reward.amount)
                    .await?;
                true
            }
            RewardKind::Equipment | RewardKind::Title => {
                tracing::warn!(
                    "Skipping {:?} reward {:?} for {}; granted by another system",
                    reward.kind,
                    reward.item_id,
                    discord_id
                );
                return Ok(false);
            }
        };

        if !applied {
            return Err(EventError::no_user().into());
        }

        Ok(true)
    }
}
