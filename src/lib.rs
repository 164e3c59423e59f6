//! A horizontally scrolling image carousel rendered with raylib.
//!
//! The scroll logic ([`carousel`], [`animator`], [`viewport`]) is independent
//! of the renderer; [`render`] and [`texture_loader`] are the raylib side.

pub mod animator;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod images;
pub mod inputs;
pub mod layout;
pub mod render;
pub mod state;
pub mod texture_loader;
pub mod viewport;

pub use carousel::{Carousel, Direction, MoveOutcome};
pub use config::{CarouselConfig, ConfigError, ConfigField};
pub use error::CarouselError;
pub use state::{AnimationState, OverlapPolicy};
