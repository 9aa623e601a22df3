//! Shadow of the building on the ground plane.
//!
//! The solver derives the footprint and the shadow vector from a parameter
//! snapshot. The shadow itself is evaluated either as an explicit convex
//! polygon or per sample with a ray/box test.
pub mod classifier;
pub mod config;
pub mod raster;
pub mod readout;
pub mod solver;
