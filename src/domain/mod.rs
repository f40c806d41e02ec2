// Domain layer: the capabilities being reported and the port used to look up their versions.

pub mod model;
pub mod ports;
