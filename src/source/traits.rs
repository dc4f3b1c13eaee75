use crate::model::{DataManifest, PriceRecord, Section, SourceError};

/// Read access to the dataset produced by the build-time fetcher.
#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    async fn manifest(&self) -> Result<DataManifest, SourceError>;
    async fn sections(&self, report_id: &str) -> Result<Vec<Section>, SourceError>;
    async fn items(&self, report_id: &str, section: &str) -> Result<Vec<String>, SourceError>;
    async fn prices(&self, report_id: &str, section: &str) -> Result<Vec<PriceRecord>, SourceError>;
}
