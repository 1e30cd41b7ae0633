// Domain layer: catalog models and the seams (storage, config, pipeline) the core runs against.

pub mod model;
pub mod ports;
