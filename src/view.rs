//! Presentation interface: world to viewport mapping and the frame plan.
pub mod config;
pub mod plan;
pub mod viewport;
