//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with a character at the given level.
///
/// The character's attack and defense use the `CharacterFactory` defaults.
///
/// # Arguments
/// - `db` - Database connection
/// - `level` - Character level
///
/// # Returns
/// - `Ok((user, character))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_player(
    db: &DatabaseConnection,
    level: i32,
) -> Result<(entity::user::Model, entity::character::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let character = crate::factory::character::CharacterFactory::new(db, &user.discord_id)
        .level(level)
        .build()
        .await?;

    Ok((user, character))
}

/// Creates a user together with a character with explicit combat stats.
///
/// # Arguments
/// - `db` - Database connection
/// - `level` - Character level
/// - `attack` - Character attack stat
///
/// # Returns
/// - `Ok((user, character))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_player_with_attack(
    db: &DatabaseConnection,
    level: i32,
    attack: i32,
) -> Result<(entity::user::Model, entity::character::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let character = crate::factory::character::CharacterFactory::new(db, &user.discord_id)
        .level(level)
        .attack(attack)
        .build()
        .await?;

    Ok((user, character))
}
