//! CLI library components for the catalog converter.

pub mod logging;
pub mod pipeline;
pub mod types;
