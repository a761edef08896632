//! ProcessableInput assembly.
//!
//! Orchestrates the override resolver and the temporal interpolator across
//! every enumerated (Category, Specific) leaf and every requested year,
//! producing the three aligned output tables per year.
pub mod engine;
pub mod tables;

pub use engine::{build_all, build_processable_input, build_year, BuildError};
pub use tables::ProcessableInput;
