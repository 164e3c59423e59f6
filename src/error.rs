use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CarouselError {
    /// The image strip has not been laid out yet, so there is nothing to
    /// scroll. Callers treat this as a no-op.
    #[error("carousel container is not mounted yet")]
    ContainerNotReady,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
