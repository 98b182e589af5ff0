//! Color-tagged hitbox collision
//!
//! Every draw call registers what it drew; later draws in the same frame
//! ask the registry which tags they overlap.

pub mod hitbox;
pub mod registry;

pub use hitbox::{Collision, HitBox, HitTag, IRect};
pub use registry::HitBoxRegistry;
