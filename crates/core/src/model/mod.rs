//! In-memory world model: node tree, paths, sparse year series and the
//! vocabularies a build is parameterised by.

pub mod node;
pub mod path;
pub mod quantity;
pub mod series;
pub mod vocabulary;
pub mod world;

pub use node::{Indicator, Material, Node};
pub use path::{LeafKey, NodePath};
pub use quantity::{QuantityKind, QuantitySeriesRef};
pub use series::{Series, SeriesError, Year};
pub use vocabulary::Vocabulary;
pub use world::{World, WorldError};
