// Domain layer: response models and ports (interfaces). No network code here.

pub mod model;
pub mod ports;
