use serde::{Deserialize, Serialize};
use std::net::IpAddr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiCard {
    pub label: String,
    pub value: String,
    pub delta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Completed,
    Training,
    Preprocessing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingRun {
    pub dataset: String,
    pub model: String,
    /// `None` while the run has not produced an evaluation yet
    pub accuracy: Option<f64>,
    pub status: RunStatus,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetStatus {
    Ready,
    Processing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub id: String,
    pub name: String,
    pub size: String,
    pub records: u64,
    pub features: u32,
    pub status: DatasetStatus,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Running,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineStep {
    pub step: u32,
    pub name: String,
    pub description: String,
    pub status: StepStatus,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelResult {
    pub id: u32,
    pub dataset: String,
    pub architecture: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub train_time: String,
    pub status: RunStatus,
    pub created_at: chrono::NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackCategory {
    pub name: String,
    pub detected: u64,
    pub accuracy: f64,
}

/// Rows are actual classes, columns predicted classes, both in `labels` order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub labels: Vec<String>,
    pub matrix: Vec<Vec<u64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStatus {
    Ready,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainedModel {
    pub id: String,
    pub name: String,
    pub dataset: String,
    pub accuracy: f64,
    pub size: String,
    pub trained: chrono::NaiveDate,
    pub format: String,
    pub status: ModelStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportFormat {
    pub name: String,
    pub extension: String,
    pub description: String,
    pub size: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatAction {
    Blocked,
    Monitoring,
    Allowed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatEvent {
    pub id: u32,
    pub timestamp: chrono::NaiveTime,
    #[serde(rename = "type")]
    pub threat_type: String,
    pub severity: Severity,
    pub source: IpAddr,
    pub destination: IpAddr,
    pub confidence: f64,
    pub action: ThreatAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub change: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStatus {
    Active,
    Limited,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: u32,
    pub name: String,
    pub key: String,
    pub created: chrono::NaiveDate,
    pub last_used: chrono::NaiveDate,
    pub requests: u64,
    pub status: KeyStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEndpoint {
    pub method: String,
    pub path: String,
    pub description: String,
    pub requests: u64,
    pub avg_latency: String,
    pub success_rate: String,
}

/// Everything the dashboard pages display, in one document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub kpis: Vec<KpiCard>,
    pub recent_training: Vec<TrainingRun>,
    pub datasets: Vec<DatasetSummary>,
    pub pipeline: Vec<PipelineStep>,
    pub model_results: Vec<ModelResult>,
    pub attack_categories: Vec<AttackCategory>,
    pub confusion_matrix: ConfusionMatrix,
    pub trained_models: Vec<TrainedModel>,
    pub export_formats: Vec<ExportFormat>,
    pub threats: Vec<ThreatEvent>,
    pub network_stats: Vec<StatCard>,
    pub api_keys: Vec<ApiKey>,
    pub api_endpoints: Vec<ApiEndpoint>,
    pub usage_stats: Vec<StatCard>,
}
