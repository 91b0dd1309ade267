use crate::domain::model::{ChangeDescriptor, ObjectHandle, SharedStorage, Value};
use crate::utils::error::Result;

/// A name-resolution mapping consulted while evaluating a bound expression.
pub trait Scope {
    /// Resolve a name, or `None` when the scope does not bind it.
    fn lookup(&self, name: &str) -> Option<Value>;

    fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

/// Observer notified of each dynamic attribute access performed while a bound
/// expression is evaluated. The recorded accesses are later used to establish
/// dependency relationships for reactive re-evaluation.
pub trait CodeTracer {
    fn dynamic_load(&mut self, owner: &ObjectHandle, name: &str, value: &Value);
}

/// Reverses a write expression, propagating an external value change back
/// through it (two-way binding support).
pub trait CodeInverter {
    fn invert(&mut self, value: Value) -> Result<()>;
}

/// Creates scope objects for evaluating a bound expression which provides a
/// value.
pub trait ReadScopeFactory {
    fn create_scope(&self, owner: &ObjectHandle, storage: SharedStorage) -> Result<Box<dyn Scope>>;
}

/// Creates scope objects for evaluating a bound expression triggered by a
/// change notification. The change descriptor describes what changed on the
/// owner.
pub trait WriteScopeFactory {
    fn create_scope(
        &self,
        owner: &ObjectHandle,
        storage: SharedStorage,
        change: &ChangeDescriptor,
    ) -> Result<Box<dyn Scope>>;
}

/// Creates read scopes which notify the given tracer on every dynamic
/// attribute load performed during evaluation.
pub trait TracedReadScopeFactory {
    fn create_scope(
        &self,
        owner: &ObjectHandle,
        storage: SharedStorage,
        tracer: Box<dyn CodeTracer>,
    ) -> Result<Box<dyn Scope>>;
}

/// Creates code tracers bound to the attribute for which an expression is
/// being evaluated.
pub trait CodeTracerFactory {
    fn create_tracer(
        &self,
        owner: &ObjectHandle,
        name: &str,
        storage: SharedStorage,
    ) -> Result<Box<dyn CodeTracer>>;
}

/// Creates code inverters bound to the attribute for which an expression is
/// being written.
pub trait CodeInverterFactory {
    fn create_inverter(
        &self,
        owner: &ObjectHandle,
        name: &str,
        storage: SharedStorage,
    ) -> Result<Box<dyn CodeInverter>>;
}
