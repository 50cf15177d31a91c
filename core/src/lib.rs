// core/src/lib.rs

//! Flow: the step-pipeline engine behind the storefront's cart and checkout workflows.
//!
//! A pipeline is an ordered list of named steps over one shared context value:
//!  - each step has zero or more async handlers run in registration order,
//!  - steps can be optional, or skipped by a predicate on the context,
//!  - a handler can halt the run early with `PipelineControl::Stop`,
//!  - the first handler error aborts the run and is returned as-is.
//!
//! `Flows<E>` keeps one pipeline per context type so request handlers only need
//! to build a context and call `flows.run(ctx)`.

pub mod core;
pub mod error;
pub mod pipeline;
pub mod registry;

pub use crate::core::context_data::ContextData;
pub use crate::core::control::{PipelineControl, PipelineResult};
pub use crate::core::step::{SkipCondition, StepDef};
pub use crate::error::{FlowError, FlowResult};
pub use crate::pipeline::definition::Pipeline;
pub use crate::pipeline::hooks::Handler;
pub use crate::registry::Flows;
