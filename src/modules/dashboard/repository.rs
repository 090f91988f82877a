use crate::{
    api::error,
    modules::dashboard::schema::{
        ApiEndpoint, ApiKey, AttackCategory, ConfusionMatrix, DatasetSummary, ExportFormat,
        KpiCard, ModelResult, PipelineStep, Severity, StatCard, ThreatEvent, TrainedModel,
        TrainingRun,
    },
};

/// Read side of every dashboard page
#[async_trait::async_trait]
pub trait DashboardRepository {
    async fn kpis(&self) -> Result<Vec<KpiCard>, error::SystemError>;
    async fn recent_training(&self) -> Result<Vec<TrainingRun>, error::SystemError>;

    async fn datasets(&self) -> Result<Vec<DatasetSummary>, error::SystemError>;
    async fn pipeline(&self) -> Result<Vec<PipelineStep>, error::SystemError>;

    async fn model_results(&self) -> Result<Vec<ModelResult>, error::SystemError>;
    async fn find_model_result(&self, id: u32) -> Result<Option<ModelResult>, error::SystemError>;
    async fn attack_categories(&self) -> Result<Vec<AttackCategory>, error::SystemError>;
    async fn confusion_matrix(&self) -> Result<ConfusionMatrix, error::SystemError>;

    async fn trained_models(&self) -> Result<Vec<TrainedModel>, error::SystemError>;
    async fn find_trained_model(
        &self,
        id: &str,
    ) -> Result<Option<TrainedModel>, error::SystemError>;
    async fn export_formats(&self) -> Result<Vec<ExportFormat>, error::SystemError>;

    /// Most recent first, optionally restricted to one severity
    async fn threats(
        &self,
        severity: Option<Severity>,
        limit: usize,
    ) -> Result<Vec<ThreatEvent>, error::SystemError>;
    async fn network_stats(&self) -> Result<Vec<StatCard>, error::SystemError>;

    async fn api_keys(&self) -> Result<Vec<ApiKey>, error::SystemError>;
    async fn api_endpoints(&self) -> Result<Vec<ApiEndpoint>, error::SystemError>;
    async fn usage_stats(&self) -> Result<Vec<StatCard>, error::SystemError>;
}
