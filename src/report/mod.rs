//! Report rendering and export.

pub mod console;
pub mod generator;

pub use console::render_results;
pub use generator::*;
