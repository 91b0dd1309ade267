use bindscope::{
    AttributeStorage, BindError, ChangeDescriptor, CodeInverterFactory, CodeTracer,
    CodeTracerFactory, ExpressionEngine, ObjectHandle, ReadScopeFactory, SharedStorage,
    TracedReadScopeFactory, UnboundCodeInverterFactory, UnboundCodeTracerFactory,
    UnboundReadScopeFactory, UnboundTracedReadScopeFactory, UnboundWriteScopeFactory, Value,
    WriteScopeFactory,
};
use serde_json::json;
use std::rc::Rc;

struct NullTracer;

impl CodeTracer for NullTracer {
    fn dynamic_load(&mut self, _owner: &ObjectHandle, _name: &str, _value: &Value) {}
}

fn placeholder_storage() -> SharedStorage {
    let mut storage = AttributeStorage::new();
    storage.set("title", json!("seed"));
    storage.set("width", json!(800));
    storage.into_shared()
}

#[test]
fn test_every_base_factory_fails_with_not_implemented() {
    let owner = ObjectHandle::new(9, "panel");
    let storage = placeholder_storage();
    let change = ChangeDescriptor::updated("title", json!("seed"), json!("next"));

    let read = UnboundReadScopeFactory.create_scope(&owner, Rc::clone(&storage));
    assert_eq!(
        read.err(),
        Some(BindError::NotImplemented {
            factory: "ReadScopeFactory"
        })
    );

    let write = UnboundWriteScopeFactory.create_scope(&owner, Rc::clone(&storage), &change);
    assert_eq!(
        write.err(),
        Some(BindError::NotImplemented {
            factory: "WriteScopeFactory"
        })
    );

    let traced = UnboundTracedReadScopeFactory.create_scope(
        &owner,
        Rc::clone(&storage),
        Box::new(NullTracer),
    );
    assert_eq!(
        traced.err(),
        Some(BindError::NotImplemented {
            factory: "TracedReadScopeFactory"
        })
    );

    let tracer = UnboundCodeTracerFactory.create_tracer(&owner, "title", Rc::clone(&storage));
    assert_eq!(
        tracer.err(),
        Some(BindError::NotImplemented {
            factory: "CodeTracerFactory"
        })
    );

    let inverter = UnboundCodeInverterFactory.create_inverter(&owner, "title", Rc::clone(&storage));
    assert_eq!(
        inverter.err(),
        Some(BindError::NotImplemented {
            factory: "CodeInverterFactory"
        })
    );

    // None of the failed invocations may have touched the storage.
    let storage = storage.borrow();
    assert_eq!(storage.len(), 2);
    assert_eq!(storage.get("title"), Some(&json!("seed")));
    assert_eq!(storage.get("width"), Some(&json!(800)));
}

#[test]
fn test_not_implemented_error_names_the_missing_factory() {
    let err = BindError::NotImplemented {
        factory: "ReadScopeFactory",
    };
    assert_eq!(
        err.to_string(),
        "Factory not implemented: no concrete ReadScopeFactory bound"
    );
}

#[test]
fn test_fresh_engine_propagates_not_implemented_from_every_slot() {
    let engine = ExpressionEngine::new();
    let owner = ObjectHandle::new(2, "button");
    let storage = placeholder_storage();
    let change = ChangeDescriptor::created("label", json!("ok"));

    assert!(matches!(
        engine.read_scope(&owner, Rc::clone(&storage)),
        Err(BindError::NotImplemented { .. })
    ));
    assert!(matches!(
        engine.write_scope(&owner, Rc::clone(&storage), &change),
        Err(BindError::NotImplemented { .. })
    ));
    assert!(matches!(
        engine.traced_read_scope(&owner, Rc::clone(&storage), Box::new(NullTracer)),
        Err(BindError::NotImplemented { .. })
    ));
    assert!(matches!(
        engine.tracer(&owner, "label", Rc::clone(&storage)),
        Err(BindError::NotImplemented { .. })
    ));
    assert!(matches!(
        engine.inverter(&owner, "label", Rc::clone(&storage)),
        Err(BindError::NotImplemented { .. })
    ));
}
