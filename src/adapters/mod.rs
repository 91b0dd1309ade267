// Adapters layer: concrete in-memory implementations of the binding contracts.

pub mod memory;
