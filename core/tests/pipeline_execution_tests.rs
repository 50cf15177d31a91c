// core/tests/pipeline_execution_tests.rs
mod common;

use common::*;
use flow::{ContextData, FlowError, Pipeline, PipelineControl, PipelineResult, SkipCondition};
use serial_test::serial;
use std::sync::Arc;

#[tokio::test]
#[serial]
async fn runs_steps_in_declared_order() {
  setup_tracing();
  let mut pipeline = Pipeline::<TallyContext, TestError>::new(
    "tally",
    &[("base", false, None), ("shipping", false, None), ("tax", false, None)],
  );
  pipeline.push_handler("base", adding_handler("base", 100));
  pipeline.push_handler("shipping", adding_handler("shipping", 10));
  pipeline.push_handler("tax", adding_handler("tax", 5));

  let ctx = ContextData::new(TallyContext::default());
  let result = pipeline.run(ctx.clone()).await;

  assert_eq!(result.unwrap(), PipelineResult::Completed);
  let guard = ctx.read();
  assert_eq!(guard.subtotal, 115);
  assert_eq!(guard.steps_executed, vec!["base", "shipping", "tax"]);
}

#[tokio::test]
#[serial]
async fn handlers_within_a_step_run_in_registration_order() {
  setup_tracing();
  let mut pipeline = Pipeline::<TallyContext, TestError>::new("tally", &[("base", false, None)]);
  pipeline.push_handler("base", adding_handler("first", 1));
  pipeline.push_handler("base", adding_handler("second", 2));
  assert_eq!(pipeline.handler_count("base"), 2);

  let ctx = ContextData::new(TallyContext::default());
  pipeline.run(ctx.clone()).await.unwrap();

  assert_eq!(ctx.read().steps_executed, vec!["first", "second"]);
}

#[tokio::test]
#[serial]
async fn stop_halts_remaining_steps() {
  setup_tracing();
  let mut pipeline = Pipeline::<TallyContext, TestError>::new(
    "tally",
    &[("base", false, None), ("shipping", false, None), ("tax", false, None)],
  );
  pipeline.push_handler("base", adding_handler("base", 100));
  pipeline.push_handler("shipping", adding_handler("shipping", 10));
  pipeline.push_handler("tax", adding_handler("tax", 5));

  let ctx = ContextData::new(TallyContext {
    stop_at: Some("shipping".to_string()),
    ..Default::default()
  });
  let result = pipeline.run(ctx.clone()).await;

  assert_eq!(result.unwrap(), PipelineResult::Stopped);
  let guard = ctx.read();
  assert_eq!(guard.subtotal, 110);
  assert_eq!(guard.steps_executed, vec!["base", "shipping"]);
}

#[tokio::test]
#[serial]
async fn first_handler_error_is_returned_unchanged() {
  setup_tracing();
  let mut pipeline = Pipeline::<TallyContext, TestError>::new(
    "tally",
    &[("base", false, None), ("broken", false, None), ("tax", false, None)],
  );
  pipeline.push_handler("base", adding_handler("base", 100));
  pipeline.push_handler("broken", failing_handler("broken", "price lookup failed"));
  pipeline.push_handler("tax", adding_handler("tax", 5));

  let ctx = ContextData::new(TallyContext::default());
  let result = pipeline.run(ctx.clone()).await;

  assert_eq!(result.unwrap_err(), TestError::Step("price lookup failed".to_string()));
  assert_eq!(ctx.read().steps_executed, vec!["base", "broken"]);
}

#[tokio::test]
#[serial]
async fn skip_condition_is_evaluated_against_current_context() {
  setup_tracing();
  let skip_discount: SkipCondition<TallyContext> = Arc::new(|ctx: &TallyContext| ctx.skip_discount);
  let mut pipeline = Pipeline::<TallyContext, TestError>::new(
    "tally",
    &[("base", false, None), ("discount", false, Some(skip_discount))],
  );
  pipeline.push_handler("base", adding_handler("base", 100));
  pipeline.on_step("discount", |ctx: ContextData<TallyContext>| async move {
    let mut guard = ctx.write();
    guard.subtotal -= 20;
    guard.steps_executed.push("discount".to_string());
    Ok::<_, TestError>(PipelineControl::Continue)
  });

  let skipped = ContextData::new(TallyContext {
    skip_discount: true,
    ..Default::default()
  });
  pipeline.run(skipped.clone()).await.unwrap();
  assert_eq!(skipped.read().subtotal, 100);

  let applied = ContextData::new(TallyContext::default());
  pipeline.run(applied.clone()).await.unwrap();
  assert_eq!(applied.read().subtotal, 80);
}

#[tokio::test]
#[serial]
async fn optional_step_without_handlers_is_skipped() {
  setup_tracing();
  let mut pipeline =
    Pipeline::<TallyContext, TestError>::new("tally", &[("base", false, None), ("gift_wrap", true, None)]);
  pipeline.push_handler("base", adding_handler("base", 100));

  let ctx = ContextData::new(TallyContext::default());
  assert_eq!(pipeline.run(ctx).await.unwrap(), PipelineResult::Completed);
}

#[tokio::test]
#[serial]
async fn required_step_without_handlers_fails() {
  setup_tracing();
  let pipeline = Pipeline::<TallyContext, FlowError>::new("tally", &[("base", false, None)]);

  let result = pipeline.run(ContextData::new(TallyContext::default())).await;

  match result {
    Err(FlowError::HandlerMissing { step_name }) => assert_eq!(step_name, "base"),
    other => panic!("expected HandlerMissing, got {:?}", other),
  }
}

#[tokio::test]
#[serial]
async fn inserted_and_removed_steps_change_run_order() {
  setup_tracing();
  let mut pipeline =
    Pipeline::<TallyContext, TestError>::new("tally", &[("base", false, None), ("tax", false, None)]);
  pipeline.insert_step_after("base", "shipping", false, None).unwrap();
  assert_eq!(pipeline.step_names(), vec!["base", "shipping", "tax"]);

  pipeline.push_handler("base", adding_handler("base", 100));
  pipeline.push_handler("shipping", adding_handler("shipping", 10));
  pipeline.push_handler("tax", adding_handler("tax", 5));
  pipeline.remove_step("tax");
  assert_eq!(pipeline.handler_count("tax"), 0);

  let ctx = ContextData::new(TallyContext::default());
  pipeline.run(ctx.clone()).await.unwrap();
  assert_eq!(ctx.read().steps_executed, vec!["base", "shipping"]);

  let missing = pipeline.insert_step_after("nope", "later", false, None);
  assert!(matches!(missing, Err(FlowError::StepNotFound { .. })));
}

#[tokio::test]
#[serial]
async fn set_optional_turns_missing_handler_into_skip() {
  setup_tracing();
  let mut pipeline = Pipeline::<TallyContext, FlowError>::new("tally", &[("audit", false, None)]);
  pipeline.set_optional("audit", true).unwrap();

  let result = pipeline.run(ContextData::new(TallyContext::default())).await;
  assert_eq!(result.unwrap(), PipelineResult::Completed);
}

#[test]
#[should_panic(expected = "not found in pipeline")]
fn registering_handler_for_unknown_step_panics() {
  let mut pipeline = Pipeline::<TallyContext, TestError>::new("tally", &[("base", false, None)]);
  pipeline.push_handler("typo", adding_handler("typo", 1));
}
