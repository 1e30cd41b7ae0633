pub mod catalog;
pub mod etl;
pub mod pipeline;
pub mod render;
pub mod schema;
pub mod splice;

pub use crate::domain::model::{LoadReport, RawDocuments, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
