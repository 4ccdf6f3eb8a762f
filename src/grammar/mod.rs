//! Grammar declaration and registration
//!
//! This module defines the argument model, the registry the engines read,
//! and YAML grammar declarations.

pub mod arg;
pub mod registry;
pub mod spec;

// Re-export main types
pub use arg::*;
pub use registry::*;
pub use spec::*;
