//! Two small composable structures from the structural patterns chapter:
//! a decorator-style transform [`pipeline`] and a [`composite`] tree.

pub mod composite;
pub mod config;
pub mod error;
pub mod pipeline;

pub use composite::{Component, ComponentRef, Container, Leaf, RemovePolicy};
pub use config::{AppConfig, CompositeConfig, PipelineConfig};
pub use error::ConfigError;
pub use pipeline::{
    ApplicationConfigurator, DataManager, DataSource, FileDataSource, LayerSpec, Pipeline,
    Transform, TransformLayer,
};
