use crate::constants::DEFAULT_MAX_UPLOAD_SIZE;

/// A file received by the upload endpoint, alive for a single request
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub declared_type: String,
    pub size: usize,
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self { name: name.into(), declared_type: declared_type.into(), size: content.len(), content }
    }
}

/// Dataset upload configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub max_file_size: usize,
    pub allowed_mime_types: Vec<String>,
    pub allowed_extensions: Vec<String>,
    pub base_url: String,
}

impl UploadConfig {
    pub fn from_env() -> Self {
        Self {
            max_file_size: crate::ENV.max_upload_size,
            base_url: crate::ENV.upload_base_url.clone(),
            ..Default::default()
        }
    }

    /// Human readable limit, e.g. `500MB`
    pub fn max_size_label(&self) -> String {
        let mib = 1024 * 1024;
        if self.max_file_size % mib == 0 {
            format!("{}MB", self.max_file_size / mib)
        } else {
            format!("{} bytes", self.max_file_size)
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_UPLOAD_SIZE,
            allowed_mime_types: vec![
                "text/csv".to_string(),
                "application/json".to_string(),
                "application/vnd.tcpdump.pcap".to_string(),
            ],
            allowed_extensions: vec![".csv".to_string(), ".json".to_string(), ".pcap".to_string()],
            base_url: "/uploads".to_string(),
        }
    }
}
