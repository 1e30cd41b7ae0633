use crate::core::catalog::{group, merge};
use crate::core::render::{render_port_list, render_showcases};
use crate::core::schema::SchemaSet;
use crate::core::splice::{replace_section, PORTLIST_SECTION, SHOWCASE_SECTION};
use crate::core::{ConfigProvider, LoadReport, Pipeline, RawDocuments, Storage, TransformResult};
use crate::utils::error::{GenError, Result};
use reqwest::Client;

pub struct ReadmePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> ReadmePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    async fn read_text(&self, path: &str) -> Result<String> {
        let bytes = self.storage.read_file(path).await?;
        String::from_utf8(bytes).map_err(|e| {
            GenError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching userstyles catalog from: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GenError::network(url, e))?;

        tracing::debug!("Userstyles response status: {}", response.status());
        let response = response
            .error_for_status()
            .map_err(|e| GenError::network(url, e))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GenError::network(url, e))?;
        String::from_utf8(bytes.to_vec())
            .map_err(|_| GenError::network(url, "response body is not UTF-8 text"))
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ReadmePipeline<S, C> {
    async fn extract(&self) -> Result<RawDocuments> {
        // 三個來源互不依賴，依序讀取即可
        let ports = self.read_text(self.config.ports_path()).await?;
        let categories = self.read_text(self.config.categories_path()).await?;
        let userstyles = self.fetch_text(self.config.userstyles_url()).await?;

        tracing::debug!(
            "Loaded {} + {} bytes locally, {} bytes remotely",
            ports.len(),
            categories.len(),
            userstyles.len()
        );

        Ok(RawDocuments {
            ports,
            categories,
            userstyles,
        })
    }

    async fn transform(&self, raw: RawDocuments) -> Result<TransformResult> {
        let schemas = SchemaSet::embedded()?;

        let ports_doc = schemas.ports(self.config.ports_path(), &raw.ports)?;
        let categories_doc = schemas.categories(self.config.categories_path(), &raw.categories)?;
        let userstyles_doc = schemas.userstyles(self.config.userstyles_url(), &raw.userstyles)?;

        if ports_doc.ports.is_empty() {
            return Err(GenError::EmptyCollectionError {
                collection: "ports".to_string(),
            });
        }
        if categories_doc.categories.is_empty() {
            return Err(GenError::EmptyCollectionError {
                collection: "categories".to_string(),
            });
        }
        if userstyles_doc.userstyles.is_empty() {
            return Err(GenError::EmptyCollectionError {
                collection: "userstyles".to_string(),
            });
        }

        tracing::debug!(
            "Validated {} ports, {} categories, {} userstyles",
            ports_doc.ports.len(),
            categories_doc.categories.len(),
            userstyles_doc.userstyles.len()
        );

        let merged = merge(ports_doc.ports, userstyles_doc.userstyles);
        let buckets = group(&merged)?;

        for key in buckets.keys() {
            if !categories_doc.categories.iter().any(|c| &c.key == key) {
                tracing::warn!("Category '{}' is used but not declared; its entries are not listed", key);
            }
        }

        let row_count = buckets.values().map(Vec::len).sum();
        Ok(TransformResult {
            portlist: render_port_list(&categories_doc.categories, &buckets),
            showcase: render_showcases(ports_doc.showcases.as_deref()),
            row_count,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<LoadReport> {
        let readme_path = self.config.readme_path();
        let original = self.read_text(readme_path).await?;

        let mut sections = vec![(PORTLIST_SECTION, result.portlist.as_str())];
        if let Some(showcase) = result.showcase.as_deref() {
            sections.push((SHOWCASE_SECTION, showcase));
        }

        let mut document = original;
        let mut report = LoadReport {
            output_path: readme_path.to_string(),
            updated_sections: Vec::new(),
            failed_sections: Vec::new(),
        };

        // 任一區段失敗只記錄，不中斷；其餘區段照常更新
        for (section, content) in sections {
            match replace_section(&document, content, section) {
                Ok(updated) => {
                    document = updated;
                    report.updated_sections.push(section.to_string());
                }
                Err(e) => {
                    tracing::error!("❌ Could not update {} section: {}", section, e);
                    report.failed_sections.push((section.to_string(), e.to_string()));
                }
            }
        }

        tracing::debug!("Writing {} bytes to {}", document.len(), readme_path);
        self.storage
            .write_file(readme_path, document.as_bytes())
            .await?;

        Ok(report)
    }
}
