pub mod builder;
pub mod error;
pub mod interpolate;
pub mod model;
pub mod resolver;
pub mod validation;

pub use builder::{build_all, build_processable_input, build_year, BuildError, ProcessableInput};
pub use error::{CoreError, Result};
pub use interpolate::{value_at, InterpolationError};
pub use model::{
    LeafKey, Node, NodePath, QuantityKind, Series, Vocabulary, World, WorldError, Year,
};
pub use resolver::{OverrideResolver, Resolution, ResolutionError};
