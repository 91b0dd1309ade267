use crate::domain::model::{ChangeDescriptor, ObjectHandle, SharedStorage};
use crate::domain::ports::{
    CodeInverter, CodeInverterFactory, CodeTracer, CodeTracerFactory, ReadScopeFactory, Scope,
    TracedReadScopeFactory, WriteScopeFactory,
};
use crate::utils::error::{BindError, Result};

/// Base form of [`ReadScopeFactory`]. Stands in for a slot with no concrete
/// implementation bound; every invocation fails with
/// [`BindError::NotImplemented`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnboundReadScopeFactory;

impl ReadScopeFactory for UnboundReadScopeFactory {
    fn create_scope(
        &self,
        _owner: &ObjectHandle,
        _storage: SharedStorage,
    ) -> Result<Box<dyn Scope>> {
        Err(BindError::NotImplemented {
            factory: "ReadScopeFactory",
        })
    }
}

/// Base form of [`WriteScopeFactory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnboundWriteScopeFactory;

impl WriteScopeFactory for UnboundWriteScopeFactory {
    fn create_scope(
        &self,
        _owner: &ObjectHandle,
        _storage: SharedStorage,
        _change: &ChangeDescriptor,
    ) -> Result<Box<dyn Scope>> {
        Err(BindError::NotImplemented {
            factory: "WriteScopeFactory",
        })
    }
}

/// Base form of [`TracedReadScopeFactory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnboundTracedReadScopeFactory;

impl TracedReadScopeFactory for UnboundTracedReadScopeFactory {
    fn create_scope(
        &self,
        _owner: &ObjectHandle,
        _storage: SharedStorage,
        _tracer: Box<dyn CodeTracer>,
    ) -> Result<Box<dyn Scope>> {
        Err(BindError::NotImplemented {
            factory: "TracedReadScopeFactory",
        })
    }
}

/// Base form of [`CodeTracerFactory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnboundCodeTracerFactory;

impl CodeTracerFactory for UnboundCodeTracerFactory {
    fn create_tracer(
        &self,
        _owner: &ObjectHandle,
        _name: &str,
        _storage: SharedStorage,
    ) -> Result<Box<dyn CodeTracer>> {
        Err(BindError::NotImplemented {
            factory: "CodeTracerFactory",
        })
    }
}

/// Base form of [`CodeInverterFactory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnboundCodeInverterFactory;

impl CodeInverterFactory for UnboundCodeInverterFactory {
    fn create_inverter(
        &self,
        _owner: &ObjectHandle,
        _name: &str,
        _storage: SharedStorage,
    ) -> Result<Box<dyn CodeInverter>> {
        Err(BindError::NotImplemented {
            factory: "CodeInverterFactory",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{AttributeStorage, Value};
    use serde_json::json;
    use std::rc::Rc;

    fn placeholder_owner() -> ObjectHandle {
        ObjectHandle::new(1, "placeholder")
    }

    fn placeholder_storage() -> SharedStorage {
        let mut storage = AttributeStorage::new();
        storage.set("title", json!("untouched"));
        storage.into_shared()
    }

    #[test]
    fn test_unbound_factories_are_zero_sized() {
        assert_eq!(std::mem::size_of::<UnboundReadScopeFactory>(), 0);
        assert_eq!(std::mem::size_of::<UnboundWriteScopeFactory>(), 0);
        assert_eq!(std::mem::size_of::<UnboundTracedReadScopeFactory>(), 0);
        assert_eq!(std::mem::size_of::<UnboundCodeTracerFactory>(), 0);
        assert_eq!(std::mem::size_of::<UnboundCodeInverterFactory>(), 0);
    }

    #[test]
    fn test_unbound_read_scope_factory_fails() {
        // Construction succeeds; only the invocation fails.
        let factory = UnboundReadScopeFactory;
        let storage = placeholder_storage();

        let result = factory.create_scope(&placeholder_owner(), Rc::clone(&storage));
        assert_eq!(
            result.err(),
            Some(BindError::NotImplemented {
                factory: "ReadScopeFactory"
            })
        );
        // The invocation must not touch the storage it was handed.
        assert_eq!(storage.borrow().len(), 1);
        assert_eq!(storage.borrow().get("title"), Some(&json!("untouched")));
    }

    #[test]
    fn test_unbound_write_scope_factory_fails() {
        let factory = UnboundWriteScopeFactory;
        let storage = placeholder_storage();
        let change = ChangeDescriptor::updated("title", json!("a"), json!("b"));

        let result = factory.create_scope(&placeholder_owner(), Rc::clone(&storage), &change);
        assert_eq!(
            result.err(),
            Some(BindError::NotImplemented {
                factory: "WriteScopeFactory"
            })
        );
        assert_eq!(storage.borrow().len(), 1);
    }

    #[test]
    fn test_unbound_traced_read_scope_factory_fails() {
        struct NullTracer;
        impl CodeTracer for NullTracer {
            fn dynamic_load(&mut self, _owner: &ObjectHandle, _name: &str, _value: &Value) {}
        }

        let factory = UnboundTracedReadScopeFactory;
        let storage = placeholder_storage();

        let result =
            factory.create_scope(&placeholder_owner(), Rc::clone(&storage), Box::new(NullTracer));
        assert_eq!(
            result.err(),
            Some(BindError::NotImplemented {
                factory: "TracedReadScopeFactory"
            })
        );
        assert_eq!(storage.borrow().len(), 1);
    }

    #[test]
    fn test_unbound_code_tracer_factory_fails() {
        let factory = UnboundCodeTracerFactory;
        let storage = placeholder_storage();

        let result = factory.create_tracer(&placeholder_owner(), "title", Rc::clone(&storage));
        assert_eq!(
            result.err(),
            Some(BindError::NotImplemented {
                factory: "CodeTracerFactory"
            })
        );
        assert_eq!(storage.borrow().len(), 1);
    }

    #[test]
    fn test_unbound_code_inverter_factory_fails() {
        let factory = UnboundCodeInverterFactory;
        let storage = placeholder_storage();

        let result = factory.create_inverter(&placeholder_owner(), "title", Rc::clone(&storage));
        assert_eq!(
            result.err(),
            Some(BindError::NotImplemented {
                factory: "CodeInverterFactory"
            })
        );
        assert_eq!(storage.borrow().len(), 1);
    }

    #[test]
    fn test_unbound_factory_instances_are_interchangeable() {
        assert_eq!(UnboundReadScopeFactory, UnboundReadScopeFactory::default());
        assert_eq!(UnboundCodeTracerFactory, UnboundCodeTracerFactory::default());
    }
}
