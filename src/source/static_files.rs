use crate::model::{DataManifest, PriceRecord, Section, SourceError};
use crate::source::traits::PriceSource;
use crate::utils::sanitize_path;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the static JSON dataset from a local directory:
///
/// ```text
/// <root>/manifest.json
/// <root>/reports/<report_id>/sections.json
/// <root>/reports/<report_id>/<section>/items.json
/// <root>/reports/<report_id>/<section>/prices.json
/// ```
pub struct StaticFileSource {
    root: PathBuf,
}

impl StaticFileSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn section_dir(&self, report_id: &str, section: &str) -> PathBuf {
        self.root
            .join("reports")
            .join(report_id)
            .join(sanitize_path(section))
    }

    async fn read_json<T: DeserializeOwned>(&self, path: PathBuf) -> Result<T, SourceError> {
        debug!("Reading {}", path.display());
        let bytes = match tokio::fs::read(&path).await {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SourceError::NotFound(path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait::async_trait]
impl PriceSource for StaticFileSource {
    async fn manifest(&self) -> Result<DataManifest, SourceError> {
        self.read_json(self.root.join("manifest.json")).await
    }

    async fn sections(&self, report_id: &str) -> Result<Vec<Section>, SourceError> {
        self.read_json(self.root.join("reports").join(report_id).join("sections.json"))
            .await
    }

    async fn items(&self, report_id: &str, section: &str) -> Result<Vec<String>, SourceError> {
        self.read_json(self.section_dir(report_id, section).join("items.json"))
            .await
    }

    async fn prices(
        &self,
        report_id: &str,
        section: &str,
    ) -> Result<Vec<PriceRecord>, SourceError> {
        self.read_json(self.section_dir(report_id, section).join("prices.json"))
            .await
    }
}
