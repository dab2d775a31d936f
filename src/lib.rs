pub mod geometry;
pub mod pod;
pub mod race;
pub mod strategy;
pub mod tuning;
pub mod world;

pub use geometry::*;
pub use pod::*;
pub use race::*;
pub use strategy::*;
pub use tuning::*;
pub use world::*;
