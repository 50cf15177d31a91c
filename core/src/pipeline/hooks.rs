// core/src/pipeline/hooks.rs

//! Handler registration.

use crate::core::context_data::ContextData;
use crate::core::control::PipelineControl;
use crate::error::FlowError;
use crate::pipeline::definition::Pipeline;
use std::future::Future;
use std::pin::Pin;

/// A boxed step handler.
///
/// Takes a clone of the run's `ContextData<T>` and resolves to the control signal.
/// Handlers must drop any lock guard before awaiting.
pub type Handler<T, Err> = Box<
  dyn Fn(ContextData<T>) -> Pin<Box<dyn Future<Output = Result<PipelineControl, Err>> + Send>> + Send + Sync,
>;

impl<T, Err> Pipeline<T, Err>
where
  T: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Registers a handler for `step_name`.
  ///
  /// The handler may fail with any error convertible into the pipeline's `Err`.
  /// Panics if the step does not exist.
  pub fn on_step<F, HandlerErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(ContextData<T>) -> F + Send + Sync + 'static,
  ) where
    F: Future<Output = Result<PipelineControl, HandlerErr>> + Send + 'static,
    HandlerErr: Into<Err> + Send + Sync + 'static,
  {
    self.ensure_step_exists(step_name);
    let handler: Handler<T, Err> = Box::new(move |ctx_data| {
      let fut = handler_fn(ctx_data);
      Box::pin(async move { fut.await.map_err(Into::into) })
    });
    self.handlers.entry(step_name.to_string()).or_default().push(handler);
  }

  /// Registers an already boxed handler.
  pub fn push_handler(&mut self, step_name: &str, handler: Handler<T, Err>) {
    self.ensure_step_exists(step_name);
    self.handlers.entry(step_name.to_string()).or_default().push(handler);
  }

  pub fn handler_count(&self, step_name: &str) -> usize {
    self.handlers.get(step_name).map_or(0, Vec::len)
  }
}
