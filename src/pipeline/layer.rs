use log::info;
use serde::{Deserialize, Serialize};

use super::source::{DataSource, FileDataSource};
use super::transform::{Reverse, Transform, Truncate, DEFAULT_KEEP, DEFAULT_MARKER};

// =============================================================================
// Transform layer: one transform wrapped around one source
// =============================================================================

/// Applies `transform.forward` before writing into `inner` and
/// `transform.inverse` after reading from it.
///
/// Stacking layers gives LIFO behaviour: the outermost layer transforms a
/// write first and un-transforms a read last.
#[derive(Debug, Clone)]
pub struct TransformLayer<T, S> {
    transform: T,
    inner: S,
}

impl<T: Transform, S: DataSource> TransformLayer<T, S> {
    pub fn new(transform: T, inner: S) -> Self {
        Self { transform, inner }
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<T: Transform, S: DataSource> DataSource for TransformLayer<T, S> {
    fn write(&mut self, data: &str) {
        let transformed = self.transform.forward(data);
        info!("{} forward: {} -> {}", self.transform.name(), data, transformed);
        self.inner.write(&transformed);
    }

    fn read(&self) -> String {
        let stored = self.inner.read();
        let restored = self.transform.inverse(&stored);
        info!("{} inverse: {} -> {}", self.transform.name(), stored, restored);
        restored
    }
}

pub fn encryption<S: DataSource>(source: S) -> TransformLayer<Reverse, S> {
    TransformLayer::new(Reverse, source)
}

pub fn compression<S: DataSource>(source: S) -> TransformLayer<Truncate, S> {
    TransformLayer::new(Truncate::default(), source)
}

// =============================================================================
// Layer specs: the closed set of layers a pipeline can be configured with
// =============================================================================

fn default_keep() -> usize {
    DEFAULT_KEEP
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayerSpec {
    Encryption,
    Compression {
        #[serde(default = "default_keep")]
        keep: usize,
        #[serde(default = "default_marker")]
        marker: String,
    },
}

impl LayerSpec {
    pub fn compression() -> Self {
        LayerSpec::Compression {
            keep: DEFAULT_KEEP,
            marker: DEFAULT_MARKER.to_string(),
        }
    }

    /// Stacks this layer on top of `inner`.
    pub fn wrap(&self, inner: Box<dyn DataSource>) -> Box<dyn DataSource> {
        match self {
            LayerSpec::Encryption => Box::new(TransformLayer::new(Reverse, inner)),
            LayerSpec::Compression { keep, marker } => {
                Box::new(TransformLayer::new(Truncate::new(*keep, marker.clone()), inner))
            }
        }
    }
}

// =============================================================================
// Pipeline builder
// =============================================================================

/// Builds a boxed pipeline. Layers are stacked in the order they are added,
/// so the first one sits right above the base holder.
pub struct Pipeline {
    source: Box<dyn DataSource>,
    depth: usize,
}

impl Pipeline {
    pub fn new(base: impl DataSource + 'static) -> Self {
        Self {
            source: Box::new(base),
            depth: 0,
        }
    }

    pub fn from_config(config: &crate::config::PipelineConfig) -> Self {
        config
            .layers
            .iter()
            .fold(Self::new(FileDataSource::new(&config.file_name)), |pipeline, spec| {
                pipeline.layer(spec)
            })
    }

    pub fn layer(self, spec: &LayerSpec) -> Self {
        Self {
            source: spec.wrap(self.source),
            depth: self.depth + 1,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn build(self) -> Box<dyn DataSource> {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Mutex;

    fn build(specs: &[LayerSpec]) -> Box<dyn DataSource> {
        specs
            .iter()
            .fold(Pipeline::new(FileDataSource::new("test.dat")), |p, spec| p.layer(spec))
            .build()
    }

    #[test]
    fn test_no_layers_is_plain_storage() {
        let mut source = build(&[]);
        source.write("hello");
        assert_eq!(source.read(), "hello");
    }

    #[test]
    fn test_encryption_then_compression_scenario() {
        let mut source = compression(encryption(FileDataSource::new("somefile.dat")));
        source.write("datasupersecret");

        // compress outermost first, then encrypt
        assert_eq!(source.inner().inner().read(), "satad");
        assert_eq!(source.read(), "datas.decompressed");
    }

    #[test]
    fn test_layer_order_changes_stored_value() {
        let mut reverse_inner = build(&[LayerSpec::Encryption, LayerSpec::compression()]);
        let mut truncate_inner = build(&[LayerSpec::compression(), LayerSpec::Encryption]);

        reverse_inner.write("datasupersecret");
        truncate_inner.write("datasupersecret");

        assert_eq!(reverse_inner.read(), "datas.decompressed");
        assert_eq!(truncate_inner.read(), "desserpmoced.ecret");
    }

    #[test]
    fn test_stored_values_differ_by_order() {
        let mut a = compression(encryption(FileDataSource::new("a")));
        let mut b = encryption(compression(FileDataSource::new("b")));
        a.write("datasupersecret");
        b.write("datasupersecret");

        assert_eq!(a.into_inner().into_inner().read(), "satad");
        assert_eq!(b.into_inner().into_inner().read(), "terce");
    }

    #[test]
    fn test_read_before_write_runs_inverses_on_empty() {
        let source = build(&[LayerSpec::Encryption]);
        assert_eq!(source.read(), "");

        let source = build(&[LayerSpec::compression()]);
        assert_eq!(source.read(), ".decompressed");
    }

    #[test]
    fn test_custom_compression_spec() {
        let spec = LayerSpec::Compression {
            keep: 3,
            marker: "...".to_string(),
        };
        let mut source = build(&[spec]);
        source.write("abcdef");
        assert_eq!(source.read(), "abc...");
    }

    #[test]
    fn test_pipeline_depth() {
        let pipeline = Pipeline::new(FileDataSource::new("x"))
            .layer(&LayerSpec::Encryption)
            .layer(&LayerSpec::compression());
        assert_eq!(pipeline.depth(), 2);
    }

    #[test]
    fn test_layer_spec_deserializes_with_defaults() {
        let spec: LayerSpec = serde_json::from_str(r#"{"kind":"compression"}"#).unwrap();
        assert_eq!(spec, LayerSpec::compression());

        let spec: LayerSpec = serde_json::from_str(r#"{"kind":"encryption"}"#).unwrap();
        assert_eq!(spec, LayerSpec::Encryption);
    }

    struct StepLog {
        lines: Mutex<Vec<String>>,
    }

    impl log::Log for StepLog {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Info
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                self.lines.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static STEP_LOG: StepLog = StepLog {
        lines: Mutex::new(Vec::new()),
    };

    #[test]
    fn test_steps_are_logged_at_info() {
        let _ = log::set_logger(&STEP_LOG);
        log::set_max_level(log::LevelFilter::Info);

        let mut source = compression(encryption(FileDataSource::new("steps.dat")));
        source.write("stepsofthedemo");
        source.read();

        let lines = STEP_LOG.lines.lock().unwrap();
        for expected in [
            "compression forward: stepsofthedemo -> steps",
            "encryption forward: steps -> spets",
            "encryption inverse: spets -> steps",
            "compression inverse: steps -> steps.decompressed",
        ] {
            assert!(
                lines.iter().any(|line| line == expected),
                "missing log line: {expected}"
            );
        }
    }

    fn layer_stack() -> impl Strategy<Value = Vec<LayerSpec>> {
        prop::collection::vec(
            prop_oneof![Just(LayerSpec::Encryption), Just(LayerSpec::compression())],
            0..6,
        )
    }

    proptest! {
        #[test]
        fn test_reverse_only_pipeline_round_trips(s in ".*", n in 0usize..8) {
            let specs = vec![LayerSpec::Encryption; n];
            let mut source = build(&specs);
            source.write(&s);
            prop_assert_eq!(source.read(), s);
        }

        #[test]
        fn test_truncate_breaks_round_trip(
            s in "[a-z0-9]{6,40}",
            specs in layer_stack(),
            at in 0usize..6,
        ) {
            let mut specs = specs;
            let at = at.min(specs.len());
            specs.insert(at, LayerSpec::compression());

            let mut source = build(&specs);
            source.write(&s);
            prop_assert_ne!(source.read(), s);
        }

        #[test]
        fn test_single_truncate_reads_prefix_plus_marker(s in "[a-z0-9]{6,40}") {
            let mut source = build(&[LayerSpec::compression()]);
            source.write(&s);
            prop_assert_eq!(source.read(), format!("{}{}", &s[..5], DEFAULT_MARKER));
        }
    }
}
