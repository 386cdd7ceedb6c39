//! Firing-solution calculator for a constant-gravity mortar.
//!
//! The computational crates are re-exported here so front-ends (the `mortar` CLI, or any other
//! caller that collects six coordinates) depend on a single library.

pub mod input;

pub use mortar_ballistics as ballistics;
pub use mortar_config as config;
pub use mortar_core as primitives;
pub use mortar_export as export;

