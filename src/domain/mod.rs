// Domain layer: page model and ports. Controllers in `core` only talk to these.

pub mod model;
pub mod ports;
