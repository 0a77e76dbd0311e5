pub use super::active_event_slot::Entity as ActiveEventSlot;
pub use super::character::Entity as Character;
pub use super::inventory_item::Entity as InventoryItem;
pub use super::user::Entity as User;
pub use super::world_event::Entity as WorldEvent;
