use crate::server::{
    data::{character::CharacterRepository, user::UserRepository, world_event::WorldEventRepository},
    error::{event::EventError, AppError},
    model::world_event::{ActionOutcome, EventAction},
    service::{
        reward::RewardService,
        world_event::{engine, WorldEventService, MAX_WRITE_ATTEMPTS},
    },
};

impl<'a> WorldEventService<'a> {
    /// Performs a player action against the active event.
    ///
    /// The action is applied to a fresh copy of the record and saved under its version. A lost
    /// race reloads and re-applies, so preconditions (including the cooldown and the win
    /// condition) are always judged against the latest state. When the action completes the
    /// event, this call owns slot release and reward distribution.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID of the acting player
    /// - `action` - Action to perform; must match the event type
    ///
    /// # Returns
    /// - `Ok(ActionOutcome)` - Action applied and persisted
    /// - `Err(EventError::NotFound)` - No active event or no character
    /// - `Err(EventError::Ineligible)` - Player has not joined
    /// - `Err(EventError::Invalid)` - Wrong action for the event type, or malformed event
    /// - `Err(EventError::RateLimited)` - Cooldown has not elapsed
    /// - `Err(EventError::Exhausted)` - Win condition already met
    /// - `Err(EventError::Conflict)` - The record kept changing during every attempt
    pub async fn perform_action(
        &self,
        discord_id: u64,
        action: EventAction,
    ) -> Result<ActionOutcome, AppError> {
        let repo = WorldEventRepository::new(self.db);

        for attempt in 1..=MAX_WRITE_ATTEMPTS {
            let mut event = self.load_active().await?;

            if !event.is_participating(discord_id) {
                return Err(EventError::not_participating().into());
            }

            let character = CharacterRepository::new(self.db)
                .find_by_discord_id(discord_id)
                .await?
                .ok_or_else(EventError::no_character)?;

            let applied = engine::apply_action(
                &mut event,
                discord_id,
                &character,
                action,
                self.clock.now(),
                self.random,
            )?;

            if !repo.save_if_version(&mut event).await? {
                tracing::debug!(
                    "Action by {} lost a write race on event {} (attempt {})",
                    discord_id,
                    event.event_id,
                    attempt
                );
                continue;
            }

            let effect = applied.effect;

            if effect.xp_gained > 0 {
                match UserRepository::new(self.db)
                    .add_xp(discord_id, effect.xp_gained)
                    .await
                {
                    Ok(true) => {}
                    Ok(false) => {
                        tracing::error!("No ledger entry for {} to credit training XP", discord_id)
                    }
                    Err(e) => tracing::error!("Failed to credit training XP to {}: {}", discord_id, e),
                }
            }

            let mut message = effect.message;
            if applied.event_completed {
                tracing::info!(
                    "Event {} completed by an action from {}",
                    event.event_id,
                    discord_id
                );
                if let Err(e) = RewardService::new(self.db)
                    .settle_completion(&mut event)
                    .await
                {
                    tracing::error!(
                        "Failed to settle completed event {}: {}",
                        event.event_id,
                        e
                    );
                }
                message.push_str(&format!(" {} has been completed!", event.name));
            }

            return Ok(ActionOutcome {
                message,
                event_completed: applied.event_completed,
                wave_completed: effect.wave_completed,
                contribution_gained: effect.contribution,
                event,
            });
        }

        Err(EventError::contended().into())
    }
}
