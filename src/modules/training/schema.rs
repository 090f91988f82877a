use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Starting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreprocessingRecord {
    pub step: &'static str,
    pub status: StepStatus,
    pub duration: &'static str,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingMetrics {
    pub loss: Vec<f64>,
    pub accuracy: Vec<f64>,
    pub val_loss: Vec<f64>,
    pub val_accuracy: Vec<f64>,
    pub current_loss: f64,
    pub current_accuracy: f64,
    pub best_accuracy: f64,
    pub training_time: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerSummary {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub layer_type: &'static str,
    pub output_shape: String,
    pub params: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub architecture: &'static str,
    pub total_layers: usize,
    pub layers: Vec<LayerSummary>,
    pub total_params: u64,
    pub trainable_params: u64,
    pub non_trainable_params: u64,
    pub model_size: String,
    pub input_shape: String,
    pub output_shape: &'static str,
    pub optimizer: &'static str,
    pub learning_rate: f64,
    pub loss_function: &'static str,
    pub metrics: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSession {
    pub id: Uuid,
    pub dataset: serde_json::Value,
    pub model_config: serde_json::Value,
    pub status: SessionStatus,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub architecture: &'static str,
    pub progress: u32,
    pub current_epoch: u32,
    pub metrics: TrainingMetrics,
    pub preprocessing_steps: Vec<PreprocessingRecord>,
    pub model_summary: ModelSummary,
}
