// core/src/pipeline/definition.rs

//! The `Pipeline<T, Err>` struct and its structural editing methods.

use crate::core::step::{SkipCondition, StepDef};
use crate::error::FlowError;
use crate::pipeline::hooks::Handler;
use std::collections::HashMap;

/// An ordered set of named steps over a context `T`, whose handlers fail with `Err`.
///
/// `Err: From<FlowError>` lets the engine report its own failures (for instance a
/// required step with no handler) through the same error type the handlers use.
pub struct Pipeline<T, Err>
where
  T: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  pub(crate) name: String,
  pub(crate) steps: Vec<StepDef<T>>,
  pub(crate) handlers: HashMap<String, Vec<Handler<T, Err>>>,
}

impl<T, Err> Pipeline<T, Err>
where
  T: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Creates a pipeline from `(step_name, optional, skip_if)` triples, in run order.
  pub fn new(name: impl Into<String>, step_defs: &[(&str, bool, Option<SkipCondition<T>>)]) -> Self {
    let steps = step_defs
      .iter()
      .map(|(step_name, optional, skip_if)| StepDef::new(*step_name, *optional, skip_if.clone()))
      .collect();

    Self {
      name: name.into(),
      steps,
      handlers: HashMap::new(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Step names in run order.
  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  fn position_of(&self, step_name: &str) -> Option<usize> {
    self.steps.iter().position(|s| s.name == step_name)
  }

  /// Panics if `step_name` is not part of the pipeline. A typo here is a setup bug.
  pub(crate) fn ensure_step_exists(&self, step_name: &str) {
    if self.position_of(step_name).is_none() {
      panic!(
        "Flow setup error: step '{}' not found in pipeline '{}'.",
        step_name, self.name
      );
    }
  }

  /// Inserts a new step right after `existing_step_name`.
  pub fn insert_step_after(
    &mut self,
    existing_step_name: &str,
    new_step_name: impl Into<String>,
    optional: bool,
    skip_if: Option<SkipCondition<T>>,
  ) -> Result<(), FlowError> {
    let idx = self.position_of(existing_step_name).ok_or_else(|| FlowError::StepNotFound {
      step_name: existing_step_name.to_string(),
    })?;
    let new_step = StepDef::new(new_step_name, optional, skip_if);
    if self.position_of(&new_step.name).is_some() {
      panic!(
        "Flow setup error: step '{}' already exists in pipeline '{}'.",
        new_step.name, self.name
      );
    }
    self.steps.insert(idx + 1, new_step);
    Ok(())
  }

  /// Removes a step together with its handlers. Removing an unknown step is a no-op.
  pub fn remove_step(&mut self, step_name: &str) {
    if let Some(idx) = self.position_of(step_name) {
      self.steps.remove(idx);
      self.handlers.remove(step_name);
    }
  }

  pub fn set_optional(&mut self, step_name: &str, optional: bool) -> Result<(), FlowError> {
    let idx = self.position_of(step_name).ok_or_else(|| FlowError::StepNotFound {
      step_name: step_name.to_string(),
    })?;
    self.steps[idx].optional = optional;
    Ok(())
  }
}
