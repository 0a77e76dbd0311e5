use crate::server::{
    data::{character::CharacterRepository, user::UserRepository, world_event::WorldEventRepository},
    error::{event::EventError, AppError},
    model::world_event::{JoinOutcome, Participant},
    service::world_event::{WorldEventService, MAX_WRITE_ATTEMPTS},
};

impl<'a> WorldEventService<'a> {
    /// Adds a player to the active event.
    ///
    /// Joining twice is not an error: the second call reports `already_participating` and
    /// writes nothing.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID of the joining player
    ///
    /// # Returns
    /// - `Ok(JoinOutcome)` - Joined now or already participating
    /// - `Err(EventError::NotFound)` - No active event, or the player has no character/profile
    /// - `Err(EventError::Ineligible)` - Character level below the event's minimum
    /// - `Err(EventError::Conflict)` - The record kept changing during every attempt
    pub async fn join_event(&self, discord_id: u64) -> Result<JoinOutcome, AppError> {
        let repo = WorldEventRepository::new(self.db);

        for attempt in 1..=MAX_WRITE_ATTEMPTS {
            let mut event = self.load_active().await?;

            let character = CharacterRepository::new(self.db)
                .find_by_discord_id(discord_id)
                .await?
                .ok_or_else(EventError::no_character)?;

            if character.level < event.min_level {
                return Err(EventError::level_too_low(event.min_level, character.level).into());
            }

            if event.is_participating(discord_id) {
                return Ok(JoinOutcome {
                    already_participating: true,
                    event,
                });
            }

            let user = UserRepository::new(self.db)
                .find_by_discord_id(discord_id)
                .await?
                .ok_or_else(EventError::no_user)?;

            event
                .participants
                .push(Participant::new(discord_id, user.name, self.clock.now()));
            event.refresh_totals();

            if repo.save_if_version(&mut event).await? {
                tracing::info!("{} joined event {}", discord_id, event.event_id);

                return Ok(JoinOutcome {
                    already_participating: false,
                    event,
                });
            }

            tracing::debug!(
                "Join by {} lost a write race on event {} (attempt {})",
                discord_id,
                event.event_id,
                attempt
            );
        }

        Err(EventError::contended().into())
    }
}
