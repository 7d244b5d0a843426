// Domain layer: menu/order models and ports. No I/O here.

pub mod model;
pub mod money;
pub mod ports;
