use std::sync::Arc;

use crate::{
    api::error,
    modules::dashboard::{
        repository::DashboardRepository,
        schema::{
            ApiEndpoint, ApiKey, AttackCategory, ConfusionMatrix, DashboardSnapshot,
            DatasetSummary, ExportFormat, KpiCard, ModelResult, PipelineStep, Severity, StatCard,
            ThreatEvent, TrainedModel, TrainingRun,
        },
    },
};

const SEED: &str = include_str!("seed.json");

/// Dashboard data held in memory, loaded once at startup
#[derive(Clone)]
pub struct DashboardMemRepository {
    snapshot: Arc<DashboardSnapshot>,
}

impl DashboardMemRepository {
    pub fn new(snapshot: DashboardSnapshot) -> Self {
        Self { snapshot: Arc::new(snapshot) }
    }

    pub fn from_json(raw: &str) -> Result<Self, error::SystemError> {
        let snapshot: DashboardSnapshot = serde_json::from_str(raw)?;
        Ok(Self::new(snapshot))
    }

    /// Built-in sample data
    pub fn seeded() -> Result<Self, error::SystemError> {
        Self::from_json(SEED)
    }

    /// Load a snapshot from `path`, or the built-in sample data when unset
    pub async fn load(path: Option<&str>) -> Result<Self, error::SystemError> {
        match path {
            Some(path) => {
                let raw = tokio::fs::read_to_string(path).await?;
                log::info!("Dashboard data loaded from {}", path);
                Self::from_json(&raw)
            }
            None => Self::seeded(),
        }
    }
}

#[async_trait::async_trait]
impl DashboardRepository for DashboardMemRepository {
    async fn kpis(&self) -> Result<Vec<KpiCard>, error::SystemError> {
        Ok(self.snapshot.kpis.clone())
    }

    async fn recent_training(&self) -> Result<Vec<TrainingRun>, error::SystemError> {
        Ok(self.snapshot.recent_training.clone())
    }

    async fn datasets(&self) -> Result<Vec<DatasetSummary>, error::SystemError> {
        Ok(self.snapshot.datasets.clone())
    }

    async fn pipeline(&self) -> Result<Vec<PipelineStep>, error::SystemError> {
        let mut steps = self.snapshot.pipeline.clone();
        steps.sort_by_key(|s| s.step);
        Ok(steps)
    }

    async fn model_results(&self) -> Result<Vec<ModelResult>, error::SystemError> {
        Ok(self.snapshot.model_results.clone())
    }

    async fn find_model_result(&self, id: u32) -> Result<Option<ModelResult>, error::SystemError> {
        Ok(self.snapshot.model_results.iter().find(|m| m.id == id).cloned())
    }

    async fn attack_categories(&self) -> Result<Vec<AttackCategory>, error::SystemError> {
        Ok(self.snapshot.attack_categories.clone())
    }

    async fn confusion_matrix(&self) -> Result<ConfusionMatrix, error::SystemError> {
        Ok(self.snapshot.confusion_matrix.clone())
    }

    async fn trained_models(&self) -> Result<Vec<TrainedModel>, error::SystemError> {
        Ok(self.snapshot.trained_models.clone())
    }

    async fn find_trained_model(
        &self,
        id: &str,
    ) -> Result<Option<TrainedModel>, error::SystemError> {
        Ok(self.snapshot.trained_models.iter().find(|m| m.id == id).cloned())
    }

    async fn export_formats(&self) -> Result<Vec<ExportFormat>, error::SystemError> {
        Ok(self.snapshot.export_formats.clone())
    }

    async fn threats(
        &self,
        severity: Option<Severity>,
        limit: usize,
    ) -> Result<Vec<ThreatEvent>, error::SystemError> {
        let mut threats: Vec<ThreatEvent> = self
            .snapshot
            .threats
            .iter()
            .filter(|t| severity.map_or(true, |s| t.severity == s))
            .cloned()
            .collect();
        threats.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        threats.truncate(limit);
        Ok(threats)
    }

    async fn network_stats(&self) -> Result<Vec<StatCard>, error::SystemError> {
        Ok(self.snapshot.network_stats.clone())
    }

    async fn api_keys(&self) -> Result<Vec<ApiKey>, error::SystemError> {
        Ok(self.snapshot.api_keys.clone())
    }

    async fn api_endpoints(&self) -> Result<Vec<ApiEndpoint>, error::SystemError> {
        Ok(self.snapshot.api_endpoints.clone())
    }

    async fn usage_stats(&self) -> Result<Vec<StatCard>, error::SystemError> {
        Ok(self.snapshot.usage_stats.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_parses() {
        let repo = DashboardMemRepository::seeded().unwrap();
        assert_eq!(repo.snapshot.kpis.len(), 4);
        assert_eq!(repo.snapshot.confusion_matrix.labels.len(), 4);
        assert!(repo.snapshot.confusion_matrix.matrix.iter().all(|row| row.len() == 4));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result = DashboardMemRepository::from_json("{\"kpis\": 3}");
        assert!(matches!(result, Err(error::SystemError::JsonError(_))));
    }

    #[actix_web::test]
    async fn test_threats_filter_and_limit() {
        let repo = DashboardMemRepository::seeded().unwrap();

        let high = repo.threats(Some(Severity::High), 50).await.unwrap();
        assert_eq!(high.len(), 2);
        assert!(high.iter().all(|t| t.severity == Severity::High));

        let latest = repo.threats(None, 2).await.unwrap();
        assert_eq!(latest.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[actix_web::test]
    async fn test_find_by_id() {
        let repo = DashboardMemRepository::seeded().unwrap();
        assert!(repo.find_model_result(2).await.unwrap().is_some());
        assert!(repo.find_model_result(99).await.unwrap().is_none());
        assert!(repo.find_trained_model("cnn-gru-hybrid").await.unwrap().is_some());
        assert!(repo.find_trained_model("missing").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_load_without_path_uses_seed() {
        let repo = DashboardMemRepository::load(None).await.unwrap();
        assert_eq!(repo.datasets().await.unwrap().len(), 3);
    }
}
