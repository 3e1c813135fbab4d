pub mod bench;
pub mod play;
