//! Bundled games

pub mod jujump;
pub mod pogo_jumper;

pub use jujump::Jujump;
pub use pogo_jumper::PogoJumper;

/// Upper bound on push-out steps per frame when resolving ground contact
pub(crate) const MAX_PUSH_OUT: u32 = 256;
