//! Dashboard UI components

pub mod chart;
pub mod filters;
pub mod footer;
pub mod header;
pub mod tiles;
