use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tabular preview attached to an upload acknowledgement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PreviewResult {
    #[serde(rename_all = "camelCase")]
    Csv { headers: Vec<String>, rows: Vec<Vec<String>>, total_rows: usize, total_columns: usize },

    #[serde(rename_all = "camelCase")]
    Json {
        headers: Vec<String>,
        rows: Vec<Vec<serde_json::Value>>,
        total_rows: usize,
        total_columns: usize,
    },

    Unknown { message: String },

    Error { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Uploaded,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedDataset {
    pub id: Uuid,
    pub name: String,
    pub size: usize,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
    pub url: String,
    pub status: UploadStatus,
    pub preview: PreviewResult,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetUploadResponse {
    pub file: UploadedDataset,
    pub url: String,
}
