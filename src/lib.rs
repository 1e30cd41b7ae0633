pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig, Settings};
pub use crate::core::{etl::EtlEngine, pipeline::ReadmePipeline};
pub use crate::utils::error::{GenError, Result};
