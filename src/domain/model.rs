use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Dynamic attribute values are plain JSON values.
pub type Value = serde_json::Value;

/// Opaque handle identifying the declarative object that owns a bound
/// expression. Scopes, tracers and inverters receive it so they can report
/// which object an access belongs to; they never look inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectHandle {
    id: u64,
    label: String,
}

impl ObjectHandle {
    pub fn new(id: u64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.label, self.id)
    }
}

/// The ordered key-value map holding a declarative object's dynamic attribute
/// values. Iteration is in key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeStorage {
    entries: BTreeMap<String, Value>,
}

impl AttributeStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Set an attribute value, returning the previous value if one was present.
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(name.into(), value)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Wrap the storage in the shared handle passed to factories.
    pub fn into_shared(self) -> SharedStorage {
        Rc::new(RefCell::new(self))
    }
}

/// Shared handle to an object's attribute storage. Single-threaded: the
/// storage is shared between the owner and the scopes evaluating against it,
/// all within one evaluation pass.
pub type SharedStorage = Rc<RefCell<AttributeStorage>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Create,
    Update,
    Delete,
}

/// Description of an attribute change, handed to write scope factories when a
/// change notification triggers a bound expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeDescriptor {
    pub kind: ChangeKind,
    pub name: String,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
}

impl ChangeDescriptor {
    pub fn created(name: impl Into<String>, value: Value) -> Self {
        Self {
            kind: ChangeKind::Create,
            name: name.into(),
            old_value: None,
            new_value: Some(value),
        }
    }

    pub fn updated(name: impl Into<String>, old_value: Value, new_value: Value) -> Self {
        Self {
            kind: ChangeKind::Update,
            name: name.into(),
            old_value: Some(old_value),
            new_value: Some(new_value),
        }
    }

    pub fn deleted(name: impl Into<String>, old_value: Value) -> Self {
        Self {
            kind: ChangeKind::Delete,
            name: name.into(),
            old_value: Some(old_value),
            new_value: None,
        }
    }
}
