use serde::{Deserialize, Serialize};
use validator::Validate;

/// Parameters every training request must carry, in reporting order
pub const REQUIRED_PARAMS: [&str; 6] =
    ["cnnFilters", "lstmUnits", "dropoutRate", "learningRate", "batchSize", "epochs"];

pub const DEFAULT_SEQUENCE_LENGTH: u64 = 10;

/// Raw request body. Both fields are kept loose so presence can be checked
/// before the configuration is typed.
#[derive(Deserialize, Validate)]
pub struct StartTrainingModel {
    #[serde(default)]
    pub dataset: serde_json::Value,
    #[serde(default)]
    pub config: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrainingConfig {
    #[validate(range(min = 1, max = 65536, message = "cnnFilters must be between 1 and 65536"))]
    pub cnn_filters: u64,
    #[validate(range(min = 1, max = 65536, message = "lstmUnits must be between 1 and 65536"))]
    pub lstm_units: u64,
    #[validate(range(min = 0.0, max = 1.0, message = "dropoutRate must be between 0 and 1"))]
    pub dropout_rate: f64,
    #[validate(range(exclusive_min = 0.0, message = "learningRate must be positive"))]
    pub learning_rate: f64,
    #[validate(range(min = 1, message = "batchSize must be at least 1"))]
    pub batch_size: u64,
    #[validate(range(min = 1, message = "epochs must be at least 1"))]
    pub epochs: u64,
    #[serde(default)]
    pub sequence_length: Option<u64>,
}

impl TrainingConfig {
    /// Zero or absent falls back to the default window
    pub fn sequence_length(&self) -> u64 {
        self.sequence_length.filter(|&len| len > 0).unwrap_or(DEFAULT_SEQUENCE_LENGTH)
    }
}
