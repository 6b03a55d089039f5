// Domain layer: value types and ports. No dependencies on the shell.

pub mod model;
pub mod ports;
