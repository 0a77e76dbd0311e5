pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_character_table;
mod m20260105_000003_create_inventory_item_table;
mod m20260106_000004_create_world_event_table;
mod m20260106_000005_create_active_event_slot_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_character_table::Migration),
            Box::new(m20260105_000003_create_inventory_item_table::Migration),
            Box::new(m20260106_000004_create_world_event_table::Migration),
            Box::new(m20260106_000005_create_active_event_slot_table::Migration),
        ]
    }
}
