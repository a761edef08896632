use thiserror::Error;

use crate::builder::BuildError;
use crate::interpolate::InterpolationError;
use crate::model::WorldError;
use crate::resolver::ResolutionError;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    #[error(transparent)]
    Build(#[from] BuildError),
}
