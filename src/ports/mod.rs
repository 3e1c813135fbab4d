//! Ports (trait boundaries) between the game core and its collaborators.
//!
//! The driver only talks to participants and observers through these
//! traits; search, random and console implementations live elsewhere.

pub mod observer;
pub mod participant;

pub use observer::Observer;
pub use participant::Participant;
