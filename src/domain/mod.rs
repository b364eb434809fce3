//! Domain layer: routing decisions, entities, and capability traits.

pub mod capabilities;
pub mod entities;
pub mod routing;
