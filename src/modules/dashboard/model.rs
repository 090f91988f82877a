use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::dashboard::schema::{
    ApiEndpoint, ApiKey, AttackCategory, ConfusionMatrix, ExportFormat, KeyStatus, KpiCard,
    ModelResult, Severity, StatCard, ThreatEvent, TrainedModel, TrainingRun,
};

pub const DEFAULT_THREAT_LIMIT: usize = 50;

#[derive(Deserialize, Validate)]
pub struct ThreatQuery {
    pub severity: Option<Severity>,
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub kpis: Vec<KpiCard>,
    pub recent_training: Vec<TrainingRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsOverview {
    pub models: Vec<ModelResult>,
    pub attack_categories: Vec<AttackCategory>,
    pub confusion_matrix: ConfusionMatrix,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCatalog {
    pub models: Vec<TrainedModel>,
    pub export_formats: Vec<ExportFormat>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionFeed {
    pub threats: Vec<ThreatEvent>,
    pub network_stats: Vec<StatCard>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyResponse {
    pub id: u32,
    pub name: String,
    pub key: String,
    pub created: chrono::NaiveDate,
    pub last_used: chrono::NaiveDate,
    pub requests: u64,
    pub status: KeyStatus,
}

/// Keep the key prefix and last four characters, hide the rest
pub fn mask_key(key: &str) -> String {
    let prefix_end = key.rfind('_').map(|i| i + 1).unwrap_or(0);
    let (prefix, secret) = key.split_at(prefix_end);

    match secret.char_indices().rev().nth(4) {
        Some((i, c)) => format!("{}****{}", prefix, &secret[i + c.len_utf8()..]),
        None => format!("{}****", prefix),
    }
}

impl From<ApiKey> for ApiKeyResponse {
    fn from(entity: ApiKey) -> Self {
        ApiKeyResponse {
            id: entity.id,
            name: entity.name,
            key: mask_key(&entity.key),
            created: entity.created,
            last_used: entity.last_used,
            requests: entity.requests,
            status: entity.status,
        }
    }
}

#[derive(Serialize)]
pub struct ApiOverview {
    pub keys: Vec<ApiKeyResponse>,
    pub endpoints: Vec<ApiEndpoint>,
    pub usage: Vec<StatCard>,
}
