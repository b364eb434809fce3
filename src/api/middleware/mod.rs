pub mod rewrite;
pub mod tracing;
