use uuid::Uuid;
use validator::Validate;

use crate::api::error;
use crate::modules::training::{
    model::{StartTrainingModel, TrainingConfig, REQUIRED_PARAMS},
    schema::{
        LayerSummary, ModelSummary, PreprocessingRecord, SessionStatus, StepStatus,
        TrainingMetrics, TrainingSession,
    },
};
use crate::utils::is_truthy;

pub const ARCHITECTURE: &str = "CNN+LSTM Hybrid";

const DENSE_UNITS: u64 = 64;
const OUTPUT_CLASSES: u64 = 2;
const BYTES_PER_PARAM: u64 = 4;

const PREPROCESSING_STEPS: [(&str, &str); 7] = [
    ("Loading dataset", "2.3s"),
    ("Data validation", "0.8s"),
    ("Missing value handling", "1.2s"),
    ("Feature encoding", "3.1s"),
    ("Normalization", "0.9s"),
    ("Sequence creation", "4.7s"),
    ("Train/test split", "0.4s"),
];

/// Hands out training sessions. No job is scheduled: the session only
/// describes what a run with this configuration would look like.
#[derive(Clone, Default)]
pub struct TrainingService;

impl TrainingService {
    pub fn new() -> Self {
        Self
    }

    /// Check presence of the request fields, then type and range-check the config
    pub fn parse_config(
        &self,
        request: &StartTrainingModel,
    ) -> Result<TrainingConfig, error::SystemError> {
        if !is_truthy(&request.dataset) || !is_truthy(&request.config) {
            return Err(error::SystemError::bad_request("Dataset and configuration required"));
        }

        let Some(raw) = request.config.as_object() else {
            return Err(error::SystemError::bad_request("Configuration must be an object"));
        };

        let missing: Vec<&str> =
            REQUIRED_PARAMS.iter().copied().filter(|param| !raw.contains_key(*param)).collect();
        if !missing.is_empty() {
            return Err(error::SystemError::bad_request(format!(
                "Missing configuration parameters: {}",
                missing.join(", ")
            )));
        }

        let config: TrainingConfig = serde_json::from_value(request.config.clone())
            .map_err(|e| error::SystemError::bad_request(format!("Invalid configuration: {e}")))?;
        config.validate().map_err(|e| error::SystemError::bad_request(e.to_string()))?;

        Ok(config)
    }

    pub fn start(&self, request: StartTrainingModel) -> Result<TrainingSession, error::SystemError> {
        let config = self.parse_config(&request)?;
        let model_summary = model_summary(&config);

        log::info!(
            "Training session requested: {} params, {} epochs, batch {}",
            model_summary.total_params,
            config.epochs,
            config.batch_size
        );

        Ok(TrainingSession {
            id: Uuid::now_v7(),
            dataset: request.dataset,
            model_config: request.config,
            status: SessionStatus::Starting,
            start_time: chrono::Utc::now(),
            architecture: ARCHITECTURE,
            progress: 0,
            current_epoch: 0,
            metrics: TrainingMetrics { training_time: "0m 0s".to_string(), ..Default::default() },
            preprocessing_steps: PREPROCESSING_STEPS
                .iter()
                .map(|&(step, duration)| PreprocessingRecord {
                    step,
                    status: StepStatus::Completed,
                    duration,
                })
                .collect(),
            model_summary,
        })
    }
}

/// Layer-by-layer estimate of the hybrid network. Parameter counts are
/// rough: biases are folded in per filter, the LSTM uses the standard
/// four-gate formula and the head assumes binary classification.
pub fn model_summary(config: &TrainingConfig) -> ModelSummary {
    let seq = config.sequence_length();
    let filters = config.cnn_filters;
    let units = config.lstm_units;
    let input_shape = format!("(None, {seq}, features)");

    let layers = vec![
        LayerSummary {
            name: "Input Layer",
            layer_type: "InputLayer",
            output_shape: input_shape.clone(),
            params: 0,
        },
        LayerSummary {
            name: "Conv1D",
            layer_type: "Conv1D",
            output_shape: format!("(None, {seq}, {filters})"),
            params: filters * 3 + filters,
        },
        LayerSummary {
            name: "BatchNormalization",
            layer_type: "BatchNormalization",
            output_shape: format!("(None, {seq}, {filters})"),
            params: filters * 4,
        },
        LayerSummary {
            name: "MaxPooling1D",
            layer_type: "MaxPooling1D",
            output_shape: format!("(None, {}, {filters})", seq / 2),
            params: 0,
        },
        LayerSummary {
            name: "LSTM",
            layer_type: "LSTM",
            output_shape: format!("(None, {units})"),
            params: 4 * units * (filters + units + 1),
        },
        LayerSummary {
            name: "Dropout",
            layer_type: "Dropout",
            output_shape: format!("(None, {units})"),
            params: 0,
        },
        LayerSummary {
            name: "Dense",
            layer_type: "Dense",
            output_shape: format!("(None, {DENSE_UNITS})"),
            params: units * DENSE_UNITS + DENSE_UNITS,
        },
        LayerSummary {
            name: "Output Layer",
            layer_type: "Dense",
            output_shape: "(None, num_classes)".to_string(),
            params: DENSE_UNITS * OUTPUT_CLASSES + OUTPUT_CLASSES,
        },
    ];

    let total_params: u64 = layers.iter().map(|l| l.params).sum();
    let size_mb = (total_params * BYTES_PER_PARAM) as f64 / 1024.0 / 1024.0;

    ModelSummary {
        architecture: "CNN + LSTM Hybrid",
        total_layers: layers.len(),
        layers,
        total_params,
        trainable_params: total_params,
        non_trainable_params: 0,
        model_size: format!("{size_mb:.2} MB"),
        input_shape,
        output_shape: "(None, num_classes)",
        optimizer: "Adam",
        learning_rate: config.learning_rate,
        loss_function: "categorical_crossentropy",
        metrics: vec!["accuracy", "precision", "recall"],
    }
}
