// Domain layer: reaction models and the ports the controller talks through.

pub mod model;
pub mod ports;
