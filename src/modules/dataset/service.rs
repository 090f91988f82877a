use actix_web::web;
use uuid::Uuid;

use crate::api::error;
use crate::modules::dataset::{
    model::{UploadConfig, UploadedFile},
    preview,
    schema::{DatasetUploadResponse, UploadStatus, UploadedDataset},
};

#[derive(Clone)]
pub struct DatasetService {
    config: UploadConfig,
}

impl DatasetService {
    pub fn new(config: UploadConfig) -> Self {
        log::info!(
            "DatasetService initialized (max upload {}, base url '{}')",
            config.max_size_label(),
            config.base_url
        );
        Self { config }
    }

    #[cfg(test)]
    pub fn with_defaults() -> Self {
        Self::new(UploadConfig::default())
    }

    /// Accept a file if either its declared type or its extension is supported
    pub fn validate_type(&self, name: &str, declared_type: &str) -> Result<(), error::SystemError> {
        let mime_ok = self.config.allowed_mime_types.iter().any(|m| m == declared_type);
        let ext_ok = self.config.allowed_extensions.iter().any(|ext| name.ends_with(ext.as_str()));

        if !mime_ok && !ext_ok {
            return Err(error::SystemError::bad_request(
                "Invalid file type. Supported: CSV, JSON, PCAP",
            ));
        }
        Ok(())
    }

    pub fn validate_size(&self, size: usize) -> Result<(), error::SystemError> {
        if size > self.config.max_file_size {
            return Err(error::SystemError::payload_too_large(format!(
                "File too large. Maximum size is {}",
                self.config.max_size_label()
            )));
        }
        Ok(())
    }

    /// Validate an upload and build its acknowledgement. Nothing is stored:
    /// `url` only names where the dataset would live.
    pub async fn upload(
        &self,
        file: UploadedFile,
    ) -> Result<DatasetUploadResponse, error::SystemError> {
        self.validate_type(&file.name, &file.declared_type)?;
        self.validate_size(file.size)?;

        let name = file.name.clone();
        let mime_type = file.declared_type.clone();
        let size = file.size;

        // Parsing a large JSON array is CPU bound, keep it off the worker
        let preview = match web::block(move || preview::assemble(&file)).await {
            Ok(preview) => preview,
            Err(e) => {
                log::warn!("Preview task for '{}' did not complete: {}", name, e);
                preview::error_preview()
            }
        };

        let url = format!("{}/{}", self.config.base_url, name);
        log::info!("Dataset '{}' accepted ({} bytes)", name, size);

        Ok(DatasetUploadResponse {
            file: UploadedDataset {
                id: Uuid::now_v7(),
                name,
                size,
                mime_type,
                uploaded_at: chrono::Utc::now(),
                url: url.clone(),
                status: UploadStatus::Uploaded,
                preview,
            },
            url,
        })
    }
}
