pub mod engine;
pub mod factories;

pub use crate::domain::model::{AttributeStorage, ChangeDescriptor, ObjectHandle, SharedStorage};
pub use crate::domain::ports::{
    CodeInverterFactory, CodeTracerFactory, ReadScopeFactory, TracedReadScopeFactory,
    WriteScopeFactory,
};
pub use crate::utils::error::Result;
