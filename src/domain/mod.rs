// Domain layer: court records, term summary value objects and ports.

pub mod model;
pub mod ports;
pub mod summary;
