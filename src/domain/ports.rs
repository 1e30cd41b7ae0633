use crate::domain::model::{LoadReport, RawDocuments, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn ports_path(&self) -> &str;
    fn categories_path(&self) -> &str;
    fn userstyles_url(&self) -> &str;
    fn readme_path(&self) -> &str;
}

/// Load → validate/render → splice. Errors from `extract` and `transform` abort the run
/// before anything is written; `load` only fails if the README itself cannot be read or written.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<RawDocuments>;
    async fn transform(&self, raw: RawDocuments) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<LoadReport>;
}
