//! Scene parameters and their owning store.
pub mod io;
pub mod params;
pub mod store;
