use crate::domain::model::{ChangeDescriptor, ObjectHandle, SharedStorage, Value};
use crate::domain::ports::{
    CodeInverter, CodeInverterFactory, CodeTracer, CodeTracerFactory, ReadScopeFactory, Scope,
    TracedReadScopeFactory, WriteScopeFactory,
};
use crate::utils::error::{BindError, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// Read scope resolving names directly from the shared attribute storage.
pub struct StorageScope {
    storage: SharedStorage,
}

impl Scope for StorageScope {
    fn lookup(&self, name: &str) -> Option<Value> {
        self.storage.borrow().get(name).cloned()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StorageReadScopeFactory;

impl ReadScopeFactory for StorageReadScopeFactory {
    fn create_scope(&self, owner: &ObjectHandle, storage: SharedStorage) -> Result<Box<dyn Scope>> {
        tracing::trace!("Storage read scope for {}", owner);
        Ok(Box::new(StorageScope { storage }))
    }
}

/// Write scope exposing the change descriptor under the reserved name
/// `change` and falling back to storage for everything else.
pub struct ChangeScope {
    change: Value,
    storage: SharedStorage,
}

impl Scope for ChangeScope {
    fn lookup(&self, name: &str) -> Option<Value> {
        if name == "change" {
            return Some(self.change.clone());
        }
        self.storage.borrow().get(name).cloned()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeWriteScopeFactory;

impl WriteScopeFactory for ChangeWriteScopeFactory {
    fn create_scope(
        &self,
        owner: &ObjectHandle,
        storage: SharedStorage,
        change: &ChangeDescriptor,
    ) -> Result<Box<dyn Scope>> {
        tracing::trace!("Change write scope for {} ({})", owner, change.name);
        let change = serde_json::to_value(change).map_err(|e| BindError::InvalidChange {
            reason: e.to_string(),
        })?;
        Ok(Box::new(ChangeScope { change, storage }))
    }
}

/// Storage scope which notifies a tracer on every successful lookup.
pub struct TracedStorageScope {
    owner: ObjectHandle,
    storage: SharedStorage,
    tracer: RefCell<Box<dyn CodeTracer>>,
}

impl Scope for TracedStorageScope {
    fn lookup(&self, name: &str) -> Option<Value> {
        let value = self.storage.borrow().get(name).cloned()?;
        self.tracer
            .borrow_mut()
            .dynamic_load(&self.owner, name, &value);
        Some(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracedStorageScopeFactory;

impl TracedReadScopeFactory for TracedStorageScopeFactory {
    fn create_scope(
        &self,
        owner: &ObjectHandle,
        storage: SharedStorage,
        tracer: Box<dyn CodeTracer>,
    ) -> Result<Box<dyn Scope>> {
        tracing::trace!("Traced read scope for {}", owner);
        Ok(Box::new(TracedStorageScope {
            owner: owner.clone(),
            storage,
            tracer: RefCell::new(tracer),
        }))
    }
}

/// One dynamic attribute access observed during evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedAccess {
    pub owner: ObjectHandle,
    pub name: String,
    pub value: Value,
}

/// Shared access log filled by [`RecordingTracer`] instances.
pub type TraceLog = Rc<RefCell<Vec<TracedAccess>>>;

/// Tracer recording each dynamic attribute access into a shared log, from
/// which dependency relationships can later be extracted.
pub struct RecordingTracer {
    log: TraceLog,
}

impl CodeTracer for RecordingTracer {
    fn dynamic_load(&mut self, owner: &ObjectHandle, name: &str, value: &Value) {
        self.log.borrow_mut().push(TracedAccess {
            owner: owner.clone(),
            name: name.to_string(),
            value: value.clone(),
        });
    }
}

/// Tracer factory whose tracers all feed one shared log.
#[derive(Default)]
pub struct RecordingTracerFactory {
    log: TraceLog,
}

impl RecordingTracerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> TraceLog {
        Rc::clone(&self.log)
    }
}

impl CodeTracerFactory for RecordingTracerFactory {
    fn create_tracer(
        &self,
        owner: &ObjectHandle,
        name: &str,
        _storage: SharedStorage,
    ) -> Result<Box<dyn CodeTracer>> {
        tracing::trace!("Recording tracer for {}.{}", owner, name);
        Ok(Box::new(RecordingTracer {
            log: Rc::clone(&self.log),
        }))
    }
}

/// Inverter writing the incoming value back into storage under the bound
/// attribute name.
pub struct StorageInverter {
    name: String,
    storage: SharedStorage,
}

impl CodeInverter for StorageInverter {
    fn invert(&mut self, value: Value) -> Result<()> {
        self.storage.borrow_mut().set(self.name.clone(), value);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StorageInverterFactory;

impl CodeInverterFactory for StorageInverterFactory {
    fn create_inverter(
        &self,
        owner: &ObjectHandle,
        name: &str,
        storage: SharedStorage,
    ) -> Result<Box<dyn CodeInverter>> {
        tracing::trace!("Storage inverter for {}.{}", owner, name);
        Ok(Box::new(StorageInverter {
            name: name.to_string(),
            storage,
        }))
    }
}
