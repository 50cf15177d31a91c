// core/src/registry.rs

//! `Flows<E>`: one pipeline per context type, dispatched by `TypeId`.

use crate::core::context_data::ContextData;
use crate::core::control::PipelineResult;
use crate::error::FlowError;
use crate::pipeline::definition::Pipeline;

use async_trait::async_trait;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{event, Level};

#[async_trait]
trait ErasedPipeline<AppErr>: Send + Sync
where
  AppErr: std::error::Error + Send + Sync + 'static,
{
  /// `ctx_obj` must hold a `ContextData<T>` for the pipeline's `T`.
  async fn run_erased(&self, ctx_obj: Box<dyn Any + Send>) -> Result<PipelineResult, AppErr>;
}

struct TypedPipeline<T, HandlerErr, AppErr>
where
  T: 'static + Send + Sync,
  HandlerErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  pipeline: Pipeline<T, HandlerErr>,
  _app_err: PhantomData<fn() -> AppErr>,
}

#[async_trait]
impl<T, HandlerErr, AppErr> ErasedPipeline<AppErr> for TypedPipeline<T, HandlerErr, AppErr>
where
  T: 'static + Send + Sync,
  HandlerErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
  AppErr: std::error::Error + From<HandlerErr> + From<FlowError> + Send + Sync + 'static,
{
  async fn run_erased(&self, ctx_obj: Box<dyn Any + Send>) -> Result<PipelineResult, AppErr> {
    let ctx_data = match ctx_obj.downcast::<ContextData<T>>() {
      Ok(boxed) => *boxed,
      Err(_) => {
        let context_type = std::any::type_name::<T>().to_string();
        event!(Level::ERROR, %context_type, "Context does not match the registered pipeline.");
        return Err(AppErr::from(FlowError::NotRegistered { context_type }));
      }
    };
    self.pipeline.run(ctx_data).await.map_err(AppErr::from)
  }
}

/// Registry of pipelines keyed by their context type.
///
/// `AppErr` is what `run` returns: it must absorb both the handlers' error type and
/// the engine's own `FlowError`.
pub struct Flows<AppErr = FlowError>
where
  AppErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  registry: RwLock<HashMap<TypeId, Arc<dyn ErasedPipeline<AppErr>>>>,
}

impl<AppErr> Flows<AppErr>
where
  AppErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  pub fn new() -> Self {
    Self {
      registry: RwLock::new(HashMap::new()),
    }
  }

  /// Registers `pipeline` for its context type, replacing any previous one.
  pub fn register<T, HandlerErr>(&self, pipeline: Pipeline<T, HandlerErr>)
  where
    T: 'static + Send + Sync,
    HandlerErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
    AppErr: From<HandlerErr>,
  {
    event!(
      Level::DEBUG,
      pipeline = %pipeline.name(),
      context_type = %std::any::type_name::<T>(),
      "Registering pipeline."
    );
    let entry: Arc<dyn ErasedPipeline<AppErr>> = Arc::new(TypedPipeline::<T, HandlerErr, AppErr> {
      pipeline,
      _app_err: PhantomData,
    });
    self.registry.write().insert(TypeId::of::<T>(), entry);
  }

  pub fn is_registered<T: 'static + Send + Sync>(&self) -> bool {
    self.registry.read().contains_key(&TypeId::of::<T>())
  }

  /// Runs the pipeline registered for `T`.
  pub async fn run<T>(&self, ctx_data: ContextData<T>) -> Result<PipelineResult, AppErr>
  where
    T: 'static + Send + Sync,
  {
    let runner = self.registry.read().get(&TypeId::of::<T>()).cloned();
    let runner = runner.ok_or_else(|| {
      let context_type = std::any::type_name::<T>().to_string();
      event!(Level::ERROR, %context_type, "No pipeline registered.");
      AppErr::from(FlowError::NotRegistered { context_type })
    })?;
    runner.run_erased(Box::new(ctx_data)).await
  }
}

impl<AppErr> Default for Flows<AppErr>
where
  AppErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}
