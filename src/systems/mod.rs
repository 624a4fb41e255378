pub mod blocking;
pub mod bounds;
pub mod motion;
pub mod separation;
