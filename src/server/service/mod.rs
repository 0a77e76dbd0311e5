//! Business logic layer.
//!
//! Services orchestrate repositories and enforce world event rules. They do not perform direct
//! database queries or entity conversions; those belong to the data layer.

pub mod announcement;
pub mod lifecycle;
pub mod reward;
pub mod world_event;

#[cfg(test)]
mod test;
