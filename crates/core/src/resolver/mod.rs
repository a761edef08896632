//! Override resolution engine.
//!
//! For a given (path, quantity kind) pair this module finds the most specific
//! node that supplies data, walking Specific -> Category -> Country -> Region
//! -> World and returning the first non-empty series block verbatim.
pub mod engine;

pub use engine::{OverrideResolver, Resolution, ResolutionError};

/// Resolver submodule identifier.
pub fn module_name() -> &'static str {
    "resolver"
}
