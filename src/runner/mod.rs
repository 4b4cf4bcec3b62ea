//! Exercise runner
//!
//! Resolves exercise names through the [`Registry`] and streams each
//! exercise's report into a sink.

mod error;
pub mod exercises;
mod registry;

pub use error::RunnerError;
pub use registry::{Exercise, ExerciseFn, ExerciseId, Registry};

use tracing::{debug, info_span};

use crate::config::ReportConfig;
use crate::dataset::Dataset;
use crate::report::{BufferSink, ReportSink};

/// Runs registered exercises against one dataset and configuration
#[derive(Debug)]
pub struct Runner {
    dataset: Dataset,
    config: ReportConfig,
    registry: Registry,
}

impl Runner {
    pub fn new(dataset: Dataset, config: ReportConfig) -> Self {
        Self {
            dataset,
            config,
            registry: Registry::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run one exercise by name.
    ///
    /// The name is resolved before anything is written, so an unknown name
    /// leaves the sink untouched.
    pub fn run(&self, name: &str, sink: &mut dyn ReportSink) -> Result<(), RunnerError> {
        let exercise = self.registry.lookup(name)?;
        self.run_exercise(exercise, sink);
        Ok(())
    }

    /// Run several exercises in order, resolving every name first.
    pub fn run_many<S: AsRef<str>>(
        &self,
        names: &[S],
        sink: &mut dyn ReportSink,
    ) -> Result<(), RunnerError> {
        let exercises = names
            .iter()
            .map(|name| self.registry.lookup(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        for exercise in exercises {
            self.run_exercise(exercise, sink);
        }
        Ok(())
    }

    /// Run every registered exercise in id order.
    pub fn run_all(&self, sink: &mut dyn ReportSink) {
        for exercise in self.registry.iter() {
            self.run_exercise(exercise, sink);
        }
    }

    /// Run one exercise and return its report lines.
    pub fn capture(&self, name: &str) -> Result<Vec<String>, RunnerError> {
        let mut buffer = BufferSink::new();
        self.run(name, &mut buffer)?;
        Ok(buffer.into_lines())
    }

    fn run_exercise(&self, exercise: &Exercise, sink: &mut dyn ReportSink) {
        let _span = info_span!("exercise", id = %exercise.id, title = exercise.title).entered();
        debug!(description = exercise.description, "Running exercise");

        let mut counter = CountingSink {
            inner: sink,
            lines: 0,
        };
        (exercise.run)(&self.dataset, &self.config, &mut counter);

        debug!(lines = counter.lines, "Exercise finished");
    }
}

/// Pass-through sink counting the lines an exercise writes
struct CountingSink<'a> {
    inner: &'a mut dyn ReportSink,
    lines: usize,
}

impl ReportSink for CountingSink<'_> {
    fn write_line(&mut self, line: &str) {
        self.lines += 1;
        self.inner.write_line(line);
    }
}
