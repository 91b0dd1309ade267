//! Factory contracts for the expression-binding machinery of a declarative
//! object model: scopes for reading and writing bound expressions, tracers
//! for recording dynamic attribute access, and inverters for pushing a value
//! change back through a write expression.

pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::engine::ExpressionEngine;
pub use crate::core::factories::{
    UnboundCodeInverterFactory, UnboundCodeTracerFactory, UnboundReadScopeFactory,
    UnboundTracedReadScopeFactory, UnboundWriteScopeFactory,
};
pub use crate::domain::model::{
    AttributeStorage, ChangeDescriptor, ChangeKind, ObjectHandle, SharedStorage, Value,
};
pub use crate::domain::ports::{
    CodeInverter, CodeInverterFactory, CodeTracer, CodeTracerFactory, ReadScopeFactory, Scope,
    TracedReadScopeFactory, WriteScopeFactory,
};
pub use crate::utils::error::{BindError, Result};
