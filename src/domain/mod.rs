// Domain layer: ticket model and the ports the service and sources plug into.

pub mod model;
pub mod ports;
