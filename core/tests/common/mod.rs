// core/tests/common/mod.rs
#![allow(dead_code)]

use flow::{ContextData, FlowError, PipelineControl};
use tracing::Level;

/// A small running-tally context: steps append their names and add to `subtotal`.
#[derive(Clone, Debug, Default)]
pub struct TallyContext {
  pub subtotal: i64,
  pub steps_executed: Vec<String>,
  pub stop_at: Option<String>,
  pub skip_discount: bool,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("flow error: {0}")]
  Flow(String),

  #[error("step failed: {0}")]
  Step(String),
}

impl From<FlowError> for TestError {
  fn from(fe: FlowError) -> Self {
    TestError::Flow(format!("{:?}", fe))
  }
}

/// Adds `amount` to the subtotal, records the step, and stops if `stop_at` names it.
pub fn adding_handler(step_name: &'static str, amount: i64) -> flow::Handler<TallyContext, TestError> {
  Box::new(move |ctx: ContextData<TallyContext>| {
    Box::pin(async move {
      let mut guard = ctx.write();
      guard.subtotal += amount;
      guard.steps_executed.push(step_name.to_string());
      tracing::debug!(target: "test_handlers", step = step_name, subtotal = guard.subtotal, "executed");
      if guard.stop_at.as_deref() == Some(step_name) {
        return Ok(PipelineControl::Stop);
      }
      Ok(PipelineControl::Continue)
    })
  })
}

pub fn failing_handler(step_name: &'static str, message: &'static str) -> flow::Handler<TallyContext, TestError> {
  Box::new(move |ctx: ContextData<TallyContext>| {
    Box::pin(async move {
      ctx.write().steps_executed.push(step_name.to_string());
      tracing::warn!(target: "test_handlers", step = step_name, "failing with: '{}'", message);
      Err(TestError::Step(message.to_string()))
    })
  })
}

use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
