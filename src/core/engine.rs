use crate::core::factories::{
    UnboundCodeInverterFactory, UnboundCodeTracerFactory, UnboundReadScopeFactory,
    UnboundTracedReadScopeFactory, UnboundWriteScopeFactory,
};
use crate::domain::model::{ChangeDescriptor, ObjectHandle, SharedStorage};
use crate::domain::ports::{
    CodeInverter, CodeInverterFactory, CodeTracer, CodeTracerFactory, ReadScopeFactory, Scope,
    TracedReadScopeFactory, WriteScopeFactory,
};
use crate::utils::error::Result;

/// Dispatch point of the binding machinery. Holds one factory per slot; every
/// slot starts out unbound and fails with the not-implemented error until a
/// concrete factory is bound.
pub struct ExpressionEngine {
    read: Box<dyn ReadScopeFactory>,
    write: Box<dyn WriteScopeFactory>,
    traced_read: Box<dyn TracedReadScopeFactory>,
    tracer: Box<dyn CodeTracerFactory>,
    inverter: Box<dyn CodeInverterFactory>,
}

impl ExpressionEngine {
    pub fn new() -> Self {
        Self {
            read: Box::new(UnboundReadScopeFactory),
            write: Box::new(UnboundWriteScopeFactory),
            traced_read: Box::new(UnboundTracedReadScopeFactory),
            tracer: Box::new(UnboundCodeTracerFactory),
            inverter: Box::new(UnboundCodeInverterFactory),
        }
    }

    pub fn with_read_scope_factory(mut self, factory: impl ReadScopeFactory + 'static) -> Self {
        self.read = Box::new(factory);
        self
    }

    pub fn with_write_scope_factory(mut self, factory: impl WriteScopeFactory + 'static) -> Self {
        self.write = Box::new(factory);
        self
    }

    pub fn with_traced_read_scope_factory(
        mut self,
        factory: impl TracedReadScopeFactory + 'static,
    ) -> Self {
        self.traced_read = Box::new(factory);
        self
    }

    pub fn with_tracer_factory(mut self, factory: impl CodeTracerFactory + 'static) -> Self {
        self.tracer = Box::new(factory);
        self
    }

    pub fn with_inverter_factory(mut self, factory: impl CodeInverterFactory + 'static) -> Self {
        self.inverter = Box::new(factory);
        self
    }

    pub fn read_scope(&self, owner: &ObjectHandle, storage: SharedStorage) -> Result<Box<dyn Scope>> {
        tracing::debug!("Creating read scope for {}", owner);
        self.read.create_scope(owner, storage)
    }

    pub fn write_scope(
        &self,
        owner: &ObjectHandle,
        storage: SharedStorage,
        change: &ChangeDescriptor,
    ) -> Result<Box<dyn Scope>> {
        tracing::debug!("Creating write scope for {} ({})", owner, change.name);
        self.write.create_scope(owner, storage, change)
    }

    pub fn traced_read_scope(
        &self,
        owner: &ObjectHandle,
        storage: SharedStorage,
        tracer: Box<dyn CodeTracer>,
    ) -> Result<Box<dyn Scope>> {
        tracing::debug!("Creating traced read scope for {}", owner);
        self.traced_read.create_scope(owner, storage, tracer)
    }

    pub fn tracer(
        &self,
        owner: &ObjectHandle,
        name: &str,
        storage: SharedStorage,
    ) -> Result<Box<dyn CodeTracer>> {
        tracing::debug!("Creating tracer for {}.{}", owner, name);
        self.tracer.create_tracer(owner, name, storage)
    }

    pub fn inverter(
        &self,
        owner: &ObjectHandle,
        name: &str,
        storage: SharedStorage,
    ) -> Result<Box<dyn CodeInverter>> {
        tracing::debug!("Creating inverter for {}.{}", owner, name);
        self.inverter.create_inverter(owner, name, storage)
    }
}

impl Default for ExpressionEngine {
    fn default() -> Self {
        Self::new()
    }
}
