// Domain layer: answers, service catalogue and ports. No I/O here.

pub mod model;
pub mod ports;

pub mod services;
