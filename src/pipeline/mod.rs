//! Layered read/write pipeline.
//!
//! A [`FileDataSource`] sits at the bottom; each [`TransformLayer`] wraps one
//! source and is itself a source. Writes run forward transforms outermost
//! first, reads run inverse transforms innermost first.

mod layer;
mod manager;
mod source;
mod transform;

pub use layer::{compression, encryption, LayerSpec, Pipeline, TransformLayer};
pub use manager::{ApplicationConfigurator, DataManager};
pub use source::{DataSource, FileDataSource, DEFAULT_FILE_NAME};
pub use transform::{Reverse, Transform, Truncate, DEFAULT_KEEP, DEFAULT_MARKER};
