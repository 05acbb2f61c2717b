//! The domain module encapsulates the core simulation logic. It defines the `Car` and `Field`
//! entities, along with the rules for moving cars across the field and detecting collisions
//! between them.
//!
//! The module has no dependency on the application framework, so the simulation can be driven by
//! any caller.

mod basis;
mod car;
mod collision;
mod field;
mod simulation;

pub use basis::{Command, Direction, Position};
pub use car::{Car, CarError};
pub use collision::{Collision, HasCollision};
pub use field::{Bounds, Field, FieldError, HasBounds};
pub use simulation::{Outcome, Simulation};
