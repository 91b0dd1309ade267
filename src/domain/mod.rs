// Domain layer: data model and ports (contracts). No dependencies beyond std/serde.

pub mod model;
pub mod ports;
