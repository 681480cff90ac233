// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::asset::DefinitionFactory;
use crate::config::consts::DEFAULT_MAX_PASSES;
use crate::config::{ComparisonMode, ExtensionMap};
use crate::engine::{ComparatorFactory, RepeatingTraverser, Traverser};
use crate::errors::{PipelineError, SetupError};
use crate::observability::messages::pipeline::{ExtensionRegistered, PipelineInitialized};
use crate::observability::messages::StructuredLog;
use crate::pipeline::Pipeline;
use crate::traits::{AssetFactory, Extension, ExtensionContext, Visitor};

/// Collects extensions, visitors and a factory, then builds a [`Pipeline`].
///
/// `build` runs once. It initializes every extension in registration order,
/// then gathers loader and processor visitors: extension visitors first, in
/// extension order, followed by visitors added directly to the builder.
/// After that the builder rejects every change with a [`SetupError`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use asset_pipeline::errors::{PipelineError, SetupError};
/// use asset_pipeline::extensions::FiltersExtension;
/// use asset_pipeline::pipeline::PipelineBuilder;
///
/// let mut builder = PipelineBuilder::new().with_max_passes(8);
/// builder.add_extension(Arc::new(FiltersExtension::new())).unwrap();
///
/// let pipeline = builder.build().unwrap();
/// assert!(pipeline.has_extension("filters"));
///
/// assert!(matches!(
///     builder.build(),
///     Err(PipelineError::Setup(SetupError::AlreadyInitialized))
/// ));
/// ```
pub struct PipelineBuilder {
    extensions: ExtensionMap,
    loader_visitors: Vec<Arc<dyn Visitor>>,
    processor_visitors: Vec<Arc<dyn Visitor>>,
    factory: Option<Arc<dyn AssetFactory>>,
    max_passes: usize,
    comparison: ComparisonMode,
    initialized: bool,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            extensions: ExtensionMap::new(),
            loader_visitors: Vec::new(),
            processor_visitors: Vec::new(),
            factory: None,
            max_passes: DEFAULT_MAX_PASSES,
            comparison: ComparisonMode::default(),
            initialized: false,
        }
    }

    /// Loader pass bound. Values below 1 are raised to 1.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    pub fn with_comparison(mut self, comparison: ComparisonMode) -> Self {
        self.comparison = comparison;
        self
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Set the factory root nodes are created with.
    ///
    /// Without one the pipeline uses an empty [`DefinitionFactory`].
    pub fn set_factory(&mut self, factory: Arc<dyn AssetFactory>) -> Result<(), SetupError> {
        if self.initialized {
            return Err(SetupError::FactoryAfterInitialize);
        }
        self.factory = Some(factory);
        Ok(())
    }

    /// Register an extension. A second extension with the same name replaces
    /// the first in its original position.
    pub fn add_extension(&mut self, extension: Arc<dyn Extension>) -> Result<(), SetupError> {
        if self.initialized {
            return Err(SetupError::ExtensionAfterInitialize {
                name: extension.name().to_string(),
            });
        }

        let name = extension.name().to_string();
        let replaced = self.extensions.insert(extension);
        ExtensionRegistered {
            name: &name,
            replaced,
        }
        .log();
        Ok(())
    }

    pub fn add_loader_visitor(&mut self, visitor: Arc<dyn Visitor>) -> Result<(), SetupError> {
        if self.initialized {
            return Err(SetupError::VisitorAfterInitialize {
                name: visitor.name().to_string(),
            });
        }
        self.loader_visitors.push(visitor);
        Ok(())
    }

    pub fn add_processor_visitor(&mut self, visitor: Arc<dyn Visitor>) -> Result<(), SetupError> {
        if self.initialized {
            return Err(SetupError::VisitorAfterInitialize {
                name: visitor.name().to_string(),
            });
        }
        self.processor_visitors.push(visitor);
        Ok(())
    }

    /// Initialize extensions and assemble the pipeline.
    ///
    /// The builder is marked initialized before any extension runs, so a
    /// failed initialization is not retried by a second call.
    pub fn build(&mut self) -> Result<Pipeline, PipelineError> {
        if self.initialized {
            return Err(SetupError::AlreadyInitialized.into());
        }
        self.initialized = true;

        let factory: Arc<dyn AssetFactory> = match &self.factory {
            Some(factory) => Arc::clone(factory),
            None => Arc::new(DefinitionFactory::default()),
        };
        let ctx = ExtensionContext::new(&factory, &self.extensions);

        for extension in self.extensions.iter() {
            extension.initialize(&ctx)?;
        }

        let mut loader = Traverser::new();
        let mut processor = Traverser::new();
        for extension in self.extensions.iter() {
            for visitor in extension.loader_visitors(&ctx) {
                loader.add_visitor(visitor);
            }
            for visitor in extension.processor_visitors(&ctx) {
                processor.add_visitor(visitor);
            }
        }
        for visitor in &self.loader_visitors {
            loader.add_visitor(Arc::clone(visitor));
        }
        for visitor in &self.processor_visitors {
            processor.add_visitor(Arc::clone(visitor));
        }

        let comparator = ComparatorFactory::from_mode(self.comparison);
        PipelineInitialized {
            extension_count: self.extensions.len(),
            loader_visitors: loader.len(),
            processor_visitors: processor.len(),
            max_passes: self.max_passes,
            comparator: comparator.name(),
        }
        .log();

        let loader = RepeatingTraverser::new(loader, comparator).with_max_passes(self.max_passes);

        Ok(Pipeline::new(
            loader,
            processor,
            factory,
            self.extensions.clone(),
        ))
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extensions::stub::{CallLog, RecordingVisitor};
    use crate::extensions::{ConcatExtension, FiltersExtension, InputsExtension};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts initialize calls and records what it saw of its siblings.
    struct TrackingExtension {
        name: &'static str,
        initialized: AtomicUsize,
        log: CallLog,
    }

    impl TrackingExtension {
        fn new(name: &'static str, log: CallLog) -> Self {
            Self {
                name,
                initialized: AtomicUsize::new(0),
                log,
            }
        }
    }

    impl Extension for TrackingExtension {
        fn name(&self) -> &str {
            self.name
        }

        fn initialize(&self, ctx: &ExtensionContext<'_>) -> Result<(), PipelineError> {
            self.initialized.fetch_add(1, Ordering::SeqCst);
            self.log.push(format!("init:{}", self.name));
            if self.name == "broken" {
                return Err(PipelineError::ExtensionInitialization {
                    name: self.name.to_string(),
                    reason: format!("sees {:?}", ctx.extensions().names()),
                });
            }
            Ok(())
        }

        fn loader_visitors(&self, _ctx: &ExtensionContext<'_>) -> Vec<Arc<dyn Visitor>> {
            self.log.push(format!("collect:{}", self.name));
            vec![Arc::new(RecordingVisitor::before(self.name, self.log.clone()))]
        }
    }

    #[test]
    fn test_extensions_initialize_in_order_before_collection() {
        let log = CallLog::default();
        let mut builder = PipelineBuilder::new();
        builder.add_extension(Arc::new(TrackingExtension::new("first", log.clone()))).unwrap();
        builder.add_extension(Arc::new(TrackingExtension::new("second", log.clone()))).unwrap();

        let pipeline = builder.build().unwrap();

        assert_eq!(
            log.entries(),
            vec!["init:first", "init:second", "collect:first", "collect:second"]
        );
        assert_eq!(
            pipeline.loader().traverser().visitor_names(),
            vec!["first", "second"]
        );
    }

    #[test]
    fn test_extension_visitors_precede_direct_visitors() {
        let log = CallLog::default();
        let mut builder = PipelineBuilder::new();
        builder
            .add_processor_visitor(Arc::new(RecordingVisitor::after("direct", log.clone())))
            .unwrap();
        builder.add_extension(Arc::new(FiltersExtension::new())).unwrap();

        let pipeline = builder.build().unwrap();

        assert_eq!(pipeline.processor().visitor_names(), vec!["filter", "direct"]);
    }

    #[test]
    fn test_build_runs_once() {
        let log = CallLog::default();
        let tracked = Arc::new(TrackingExtension::new("tracked", log));
        let mut builder = PipelineBuilder::new();
        builder.add_extension(tracked.clone()).unwrap();

        assert!(builder.build().is_ok());
        assert!(matches!(
            builder.build(),
            Err(PipelineError::Setup(SetupError::AlreadyInitialized))
        ));
        assert_eq!(tracked.initialized.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_changes_after_build_are_setup_errors() {
        let log = CallLog::default();
        let mut builder = PipelineBuilder::new();
        builder.build().unwrap();

        assert_eq!(
            builder.add_extension(Arc::new(InputsExtension::new())),
            Err(SetupError::ExtensionAfterInitialize {
                name: "inputs".to_string()
            })
        );
        assert_eq!(
            builder.add_loader_visitor(Arc::new(RecordingVisitor::before("late", log.clone()))),
            Err(SetupError::VisitorAfterInitialize {
                name: "late".to_string()
            })
        );
        assert_eq!(
            builder.add_processor_visitor(Arc::new(RecordingVisitor::after("late", log))),
            Err(SetupError::VisitorAfterInitialize {
                name: "late".to_string()
            })
        );
        assert_eq!(
            builder.set_factory(Arc::new(DefinitionFactory::default())),
            Err(SetupError::FactoryAfterInitialize)
        );
        assert!(builder.is_initialized());
    }

    #[test]
    fn test_failed_initialization_is_reported() {
        let log = CallLog::default();
        let mut builder = PipelineBuilder::new();
        builder.add_extension(Arc::new(TrackingExtension::new("ok", log.clone()))).unwrap();
        builder.add_extension(Arc::new(TrackingExtension::new("broken", log.clone()))).unwrap();
        builder.add_extension(Arc::new(TrackingExtension::new("never", log.clone()))).unwrap();

        let err = builder.build().err().expect("broken extension should fail");

        assert_eq!(
            err.to_string(),
            r#"Extension 'broken' failed to initialize: sees ["ok", "broken", "never"]"#
        );
        assert_eq!(log.entries(), vec!["init:ok", "init:broken"]);
        assert!(builder.is_initialized());
    }

    #[test]
    fn test_reregistered_extension_replaces_in_place() {
        let mut builder = PipelineBuilder::new();
        builder.add_extension(Arc::new(ConcatExtension::default())).unwrap();
        builder.add_extension(Arc::new(FiltersExtension::new())).unwrap();
        builder
            .add_extension(Arc::new(ConcatExtension::with_separator(";")))
            .unwrap();

        let pipeline = builder.build().unwrap();

        assert_eq!(pipeline.extensions().names(), vec!["concat", "filters"]);
    }

    #[test]
    fn test_settings_reach_the_loader() {
        let mut builder = PipelineBuilder::new()
            .with_max_passes(0)
            .with_comparison(ComparisonMode::Deep);

        let pipeline = builder.build().unwrap();

        assert_eq!(pipeline.loader().max_passes(), 1);
        assert_eq!(pipeline.loader().comparator().name(), "deep");
    }
}
