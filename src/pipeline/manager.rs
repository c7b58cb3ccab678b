use log::info;

use super::layer::{LayerSpec, Pipeline};
use super::source::{DataSource, FileDataSource, DEFAULT_FILE_NAME};

/// Reads and writes through whatever pipeline it was handed, without knowing
/// which layers are active.
pub struct DataManager {
    source: Box<dyn DataSource>,
}

impl DataManager {
    pub fn new(source: Box<dyn DataSource>) -> Self {
        Self { source }
    }

    pub fn save_data(&mut self, data: &str) {
        info!("Saving data...");
        self.source.write(data);
    }

    pub fn load_data(&self) -> String {
        info!("Loading data...");
        self.source.read()
    }
}

/// Decides which layers to stack from explicit switches handed in at
/// startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationConfigurator {
    enable_encryption: bool,
    enable_compression: bool,
}

impl ApplicationConfigurator {
    pub fn new(enable_encryption: bool, enable_compression: bool) -> Self {
        Self {
            enable_encryption,
            enable_compression,
        }
    }

    /// Encryption goes on first, so compression ends up outermost.
    pub fn build_source(&self) -> Box<dyn DataSource> {
        let mut pipeline = Pipeline::new(FileDataSource::new(DEFAULT_FILE_NAME));
        if self.enable_encryption {
            pipeline = pipeline.layer(&LayerSpec::Encryption);
        }
        if self.enable_compression {
            pipeline = pipeline.layer(&LayerSpec::compression());
        }
        pipeline.build()
    }

    /// Saves `payload` and loads it straight back.
    pub fn run(&self, payload: &str) -> String {
        let mut manager = DataManager::new(self.build_source());
        manager.save_data(payload);
        manager.load_data()
    }
}
