//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

/// Truncate a chart label to fit under a bar of the given width.
///
/// Terminal bar charts cannot rotate labels, so long region names are cut
/// to the bar width instead.
pub fn truncate_label(name: &str, width: u16) -> String {
    name.chars().take(width as usize).collect()
}
