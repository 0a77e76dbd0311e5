mod active_slot;
mod character;
mod inventory;
mod user;
mod world_event;
