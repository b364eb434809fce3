//! Application layer: flow orchestration over the capability traits.

pub mod services;
